use leptos::prelude::*;

use crate::features::forms::{TaskRegistrationForm, UserRegistrationForm};

#[component]
pub fn RegisterUser() -> impl IntoView {
    view! {
        <div class="cadastro-page">
            <UserRegistrationForm />
        </div>
    }
}

#[component]
pub fn RegisterTask() -> impl IntoView {
    view! {
        <div class="cadastro-page">
            <TaskRegistrationForm />
        </div>
    }
}
