pub mod task_form;
pub mod user_form;

pub use task_form::TaskRegistrationForm;
pub use user_form::UserRegistrationForm;

use leptos::prelude::*;

use super::validation::FieldErrors;
use super::FormStatus;

/// Message for one field, shown only while that field is invalid.
#[component]
pub fn FieldError(errors: RwSignal<FieldErrors>, field: &'static str) -> impl IntoView {
    move || {
        errors.with(|e| e.get(field)).map(|message| {
            view! { <p class="error" role="alert">{message}</p> }
        })
    }
}

/// Outcome of the last submission.
#[component]
pub fn FormFeedback(status: RwSignal<FormStatus>, saved: &'static str, failed: &'static str) -> impl IntoView {
    move || {
        status.get().feedback(saved, failed).map(|(class, message)| {
            view! { <p class=class role="status">{message}</p> }
        })
    }
}
