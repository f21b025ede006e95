use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: u64,
    pub nome: String,
    pub email: String,
}

impl User {
    /// Value submitted by the task form's user selector.
    pub fn option_value(&self) -> String {
        self.id.to_string()
    }
}

/// Payload of the user registration form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewUser {
    pub nome: String,
    pub email: String,
}
