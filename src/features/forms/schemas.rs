use super::validation::{FieldErrors, FieldSchema, FormValues, Rule, Schema};
use crate::core::models::{NewTask, NewUser, Priority, Task, TaskPatch, TaskStatus};

fn is_priority_choice(value: &str) -> bool {
    Priority::parse_choice(value).is_some()
}

fn is_column_status(value: &str) -> bool {
    TaskStatus::parse_column(value).is_some()
}

const DESCRICAO_RULES: &[Rule] = &[
    Rule::MinLen(1, "Informe uma descrição"),
    Rule::MaxLen(100, "Informe no máximo 100 caracteres"),
];

const SETOR_RULES: &[Rule] = &[
    Rule::MinLen(1, "Informe um setor"),
    Rule::MaxLen(50, "Informe no máximo 50 caracteres"),
];

const PRIORIDADE_RULES: &[Rule] = &[Rule::Matches(is_priority_choice, "Escolha Baixa, Média ou Alta")];

pub static USER_SCHEMA: Schema = Schema {
    fields: &[
        FieldSchema {
            name: "nome",
            rules: &[
                Rule::MinLen(1, "Informe ao menos um valor"),
                Rule::MaxLen(50, "Informe no máximo 50 caracteres"),
            ],
        },
        FieldSchema {
            name: "email",
            rules: &[
                Rule::MinLen(1, "Informe ao menos um valor"),
                Rule::MaxLen(50, "Informe até 50 caracteres"),
                Rule::Email("Formato de email inválido"),
            ],
        },
    ],
};

pub static TASK_SCHEMA: Schema = Schema {
    fields: &[
        FieldSchema { name: "descricao", rules: DESCRICAO_RULES },
        FieldSchema { name: "setor", rules: SETOR_RULES },
        FieldSchema { name: "prioridade", rules: PRIORIDADE_RULES },
        FieldSchema {
            name: "usuario",
            rules: &[Rule::MinLen(1, "Selecione um usuário")],
        },
    ],
};

pub static TASK_EDIT_SCHEMA: Schema = Schema {
    fields: &[
        FieldSchema { name: "descricao", rules: DESCRICAO_RULES },
        FieldSchema { name: "setor", rules: SETOR_RULES },
        FieldSchema { name: "prioridade", rules: PRIORIDADE_RULES },
        FieldSchema {
            name: "status",
            rules: &[Rule::Matches(is_column_status, "Escolha um status válido")],
        },
    ],
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserForm {
    pub nome: String,
    pub email: String,
}

impl FormValues for UserForm {
    fn value(&self, field: &str) -> &str {
        match field {
            "nome" => &self.nome,
            "email" => &self.email,
            _ => "",
        }
    }
}

impl UserForm {
    pub fn validate(&self) -> Result<NewUser, FieldErrors> {
        USER_SCHEMA.validate(self)?;
        Ok(NewUser {
            nome: self.nome.clone(),
            email: self.email.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskForm {
    pub descricao: String,
    pub setor: String,
    pub prioridade: String,
    pub usuario: String,
}

impl FormValues for TaskForm {
    fn value(&self, field: &str) -> &str {
        match field {
            "descricao" => &self.descricao,
            "setor" => &self.setor,
            "prioridade" => &self.prioridade,
            "usuario" => &self.usuario,
            _ => "",
        }
    }
}

impl TaskForm {
    pub fn validate(&self) -> Result<NewTask, FieldErrors> {
        TASK_SCHEMA.validate(self)?;
        Ok(NewTask {
            descricao: self.descricao.clone(),
            setor: self.setor.clone(),
            prioridade: Priority::from_label(&self.prioridade),
            usuario: self.usuario.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskEditForm {
    pub descricao: String,
    pub setor: String,
    pub prioridade: String,
    pub status: String,
}

impl FormValues for TaskEditForm {
    fn value(&self, field: &str) -> &str {
        match field {
            "descricao" => &self.descricao,
            "setor" => &self.setor,
            "prioridade" => &self.prioridade,
            "status" => &self.status,
            _ => "",
        }
    }
}

impl TaskEditForm {
    pub fn from_task(task: &Task) -> Self {
        Self {
            descricao: task.descricao.clone(),
            setor: task.setor.clone(),
            prioridade: task.prioridade.as_str().to_string(),
            status: task.status.as_str().to_string(),
        }
    }

    pub fn validate(&self) -> Result<TaskPatch, FieldErrors> {
        TASK_EDIT_SCHEMA.validate(self)?;
        Ok(TaskPatch {
            descricao: Some(self.descricao.clone()),
            setor: Some(self.setor.clone()),
            prioridade: Some(Priority::from_label(&self.prioridade)),
            status: Some(TaskStatus::from_label(&self.status)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_user() -> UserForm {
        UserForm {
            nome: "José da Silva".to_string(),
            email: "jose@empresa.com".to_string(),
        }
    }

    fn valid_task() -> TaskForm {
        TaskForm {
            descricao: "Organizar arquivos".to_string(),
            setor: "Administrativo".to_string(),
            prioridade: "Alta".to_string(),
            usuario: "1".to_string(),
        }
    }

    #[test]
    fn empty_name_is_blocked_with_required_message() {
        let form = UserForm { nome: String::new(), ..valid_user() };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("nome"), Some("Informe ao menos um valor"));
        assert_eq!(errors.get("email"), None);
    }

    #[test]
    fn name_of_51_chars_is_blocked_with_max_length_message() {
        let form = UserForm { nome: "a".repeat(51), ..valid_user() };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("nome"), Some("Informe no máximo 50 caracteres"));

        let boundary = UserForm { nome: "a".repeat(50), ..valid_user() };
        assert!(boundary.validate().is_ok());
    }

    #[test]
    fn valid_user_proceeds() {
        let payload = valid_user().validate().unwrap();
        assert_eq!(payload.nome, "José da Silva");
        assert_eq!(payload.email, "jose@empresa.com");
    }

    #[test]
    fn email_messages_follow_rule_order() {
        let empty = UserForm { email: String::new(), ..valid_user() };
        assert_eq!(empty.validate().unwrap_err().get("email"), Some("Informe ao menos um valor"));

        let malformed = UserForm { email: "jose.empresa.com".to_string(), ..valid_user() };
        assert_eq!(malformed.validate().unwrap_err().get("email"), Some("Formato de email inválido"));

        let long = UserForm { email: format!("{}@empresa.com", "j".repeat(40)), ..valid_user() };
        assert_eq!(long.validate().unwrap_err().get("email"), Some("Informe até 50 caracteres"));
    }

    #[test]
    fn every_invalid_field_gets_its_own_message() {
        let errors = TaskForm::default().validate().unwrap_err();
        assert_eq!(errors.fields(), vec!["descricao", "setor", "prioridade", "usuario"]);
        assert_eq!(errors.get("usuario"), Some("Selecione um usuário"));
    }

    #[test]
    fn priority_outside_choices_is_rejected() {
        for bad in ["Urgente", "media", "Média", ""] {
            let form = TaskForm { prioridade: bad.to_string(), ..valid_task() };
            let errors = form.validate().unwrap_err();
            assert_eq!(errors.get("prioridade"), Some("Escolha Baixa, Média ou Alta"), "value {:?}", bad);
            assert_eq!(errors.len(), 1);
        }
    }

    #[test]
    fn valid_task_builds_payload() {
        let payload = valid_task().validate().unwrap();
        assert_eq!(payload.prioridade, Priority::Alta);
        assert_eq!(payload.usuario, "1");
    }

    #[test]
    fn description_limit_is_100_chars() {
        let form = TaskForm { descricao: "d".repeat(101), ..valid_task() };
        assert_eq!(form.validate().unwrap_err().get("descricao"), Some("Informe no máximo 100 caracteres"));
    }

    #[test]
    fn edit_form_round_trips_task_into_full_patch() {
        let task = Task {
            id: 3,
            descricao: "Revisar contrato".to_string(),
            setor: "Jurídico".to_string(),
            prioridade: Priority::Baixa,
            status: TaskStatus::Doing,
            usuario: None,
            created_at: None,
        };
        let mut form = TaskEditForm::from_task(&task);
        form.status = "Pronto".to_string();
        let patch = form.validate().unwrap();
        assert_eq!(patch.status, Some(TaskStatus::Done));
        assert_eq!(patch.setor.as_deref(), Some("Jurídico"));
    }

    #[test]
    fn edit_form_rejects_unknown_status() {
        let task = Task {
            id: 3,
            descricao: "x".to_string(),
            setor: "y".to_string(),
            prioridade: Priority::Alta,
            status: TaskStatus::Unrecognized("arquivada".to_string()),
            usuario: None,
            created_at: None,
        };
        let errors = TaskEditForm::from_task(&task).validate().unwrap_err();
        assert_eq!(errors.get("status"), Some("Escolha um status válido"));
    }
}
