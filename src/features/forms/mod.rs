pub mod components;
pub mod schemas;
pub mod validation;

pub use components::*;
pub use schemas::{TaskEditForm, TaskForm, UserForm};
pub use validation::{FieldErrors, Schema};

/// Submission lifecycle shared by the forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Editing,
    Submitting,
    Submitted,
    Failed,
}

impl FormStatus {
    pub fn is_submitting(self) -> bool {
        self == FormStatus::Submitting
    }

    /// Class and text of the line shown under the submit button once a
    /// submission has finished.
    pub fn feedback(self, saved: &'static str, failed: &'static str) -> Option<(&'static str, &'static str)> {
        match self {
            FormStatus::Submitted => Some(("form-feedback sucesso", saved)),
            FormStatus::Failed => Some(("form-feedback error", failed)),
            FormStatus::Editing | FormStatus::Submitting => None,
        }
    }
}
