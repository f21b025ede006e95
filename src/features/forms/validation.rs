//! Declarative field validation for the registration and edit forms.
//!
//! Each field lists its rules in order; the first failing rule supplies the
//! field's message, so a form reports at most one message per field.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+'-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}$")
        .expect("email pattern compiles")
});

pub fn is_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// At least n characters
    MinLen(usize, &'static str),
    /// At most n characters
    MaxLen(usize, &'static str),
    Email(&'static str),
    /// Value must satisfy the predicate (enumerations, selectors)
    Matches(fn(&str) -> bool, &'static str),
}

impl Rule {
    fn check(&self, value: &str) -> Result<(), &'static str> {
        let passes = match self {
            Rule::MinLen(min, _) => value.chars().count() >= *min,
            Rule::MaxLen(max, _) => value.chars().count() <= *max,
            Rule::Email(_) => is_email(value),
            Rule::Matches(predicate, _) => predicate(value),
        };
        if passes {
            Ok(())
        } else {
            Err(self.message())
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Rule::MinLen(_, message)
            | Rule::MaxLen(_, message)
            | Rule::Email(message)
            | Rule::Matches(_, message) => message,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSchema {
    pub name: &'static str,
    pub rules: &'static [Rule],
}

#[derive(Debug, Clone, Copy)]
pub struct Schema {
    pub fields: &'static [FieldSchema],
}

/// Field values as the user typed them, looked up by field name.
pub trait FormValues {
    fn value(&self, field: &str) -> &str;
}

/// One message per invalid field, in schema order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: Vec<(&'static str, &'static str)>,
}

impl FieldErrors {
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, message)| *message)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn fields(&self) -> Vec<&'static str> {
        self.errors.iter().map(|(name, _)| *name).collect()
    }
}

impl Schema {
    pub fn validate(&self, values: &impl FormValues) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        for field in self.fields {
            let value = values.value(field.name);
            if let Some(message) = field.rules.iter().find_map(|rule| rule.check(value).err()) {
                errors.errors.push((field.name, message));
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct Values(HashMap<&'static str, String>);

    impl FormValues for Values {
        fn value(&self, field: &str) -> &str {
            self.0.get(field).map(String::as_str).unwrap_or("")
        }
    }

    fn is_yes(value: &str) -> bool {
        value == "sim"
    }

    static SCHEMA: Schema = Schema {
        fields: &[
            FieldSchema {
                name: "a",
                rules: &[Rule::MinLen(1, "obrigatório"), Rule::MaxLen(3, "longo demais")],
            },
            FieldSchema {
                name: "b",
                rules: &[Rule::Matches(is_yes, "diga sim")],
            },
        ],
    };

    #[test]
    fn first_failing_rule_wins_per_field() {
        let values = Values(HashMap::from([("a", String::new()), ("b", "não".to_string())]));
        let errors = SCHEMA.validate(&values).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("a"), Some("obrigatório"));
        assert_eq!(errors.get("b"), Some("diga sim"));
        assert_eq!(errors.fields(), vec!["a", "b"]);
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        let values = Values(HashMap::from([("a", "ção".to_string()), ("b", "sim".to_string())]));
        assert!(SCHEMA.validate(&values).is_ok());
    }

    #[test]
    fn email_syntax() {
        assert!(is_email("a@b.co"));
        assert!(is_email("maria.silva+kanban@empresa.com.br"));
        assert!(!is_email("no-at-sign"));
        assert!(!is_email("x@"));
        assert!(!is_email("@y.com"));
        assert!(!is_email("a@b"));
        assert!(!is_email("a b@c.com"));
    }
}
