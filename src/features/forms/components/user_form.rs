use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::services::{CancelToken, TaskApi};
use crate::features::forms::components::{FieldError, FormFeedback};
use crate::features::forms::schemas::UserForm;
use crate::features::forms::validation::FieldErrors;
use crate::features::forms::FormStatus;
use crate::features::notifications::use_notifier;

#[component]
pub fn UserRegistrationForm() -> impl IntoView {
    let api = use_context::<TaskApi>().expect("TaskApi context");
    let notifier = use_notifier();
    let token = CancelToken::new();
    {
        let token = token.clone();
        on_cleanup(move || token.cancel());
    }

    let form = RwSignal::new(UserForm::default());
    let errors = RwSignal::new(FieldErrors::default());
    let status = RwSignal::new(FormStatus::Editing);

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let payload = match form.with_untracked(|f| f.validate()) {
            Ok(payload) => payload,
            Err(field_errors) => {
                errors.set(field_errors);
                status.set(FormStatus::Editing);
                return;
            }
        };
        errors.set(FieldErrors::default());
        status.set(FormStatus::Submitting);
        web_sys::console::log_1(&format!("dados recebidos: {:?}", payload).into());

        let api = api.clone();
        let token = token.clone();
        spawn_local(async move {
            let result = api.create_user(&payload).await;
            if token.is_cancelled() {
                return;
            }
            match result {
                Ok(()) => {
                    form.set(UserForm::default());
                    status.set(FormStatus::Submitted);
                    notifier.info("Usuário cadastrado com sucesso!");
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to create user: {}", e).into());
                    status.set(FormStatus::Failed);
                    notifier.error("Erro ao cadastrar usuário.");
                }
            }
        });
    };

    view! {
        <section class="formulario">
            <h2>"Cadastro de Usuário"</h2>
            <form on:submit=handle_submit novalidate>
                <label for="nome">"Nome:"</label>
                <input
                    id="nome"
                    type="text"
                    placeholder="Nome Sobrenome"
                    prop:value=move || form.with(|f| f.nome.clone())
                    on:input=move |ev| form.update(|f| f.nome = event_target_value(&ev))
                />
                <FieldError errors=errors field="nome" />

                <label for="email">"Email:"</label>
                <input
                    id="email"
                    type="email"
                    placeholder="email@dominio.com"
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                />
                <FieldError errors=errors field="email" />

                <button type="submit" disabled=move || status.get().is_submitting()>
                    "Cadastrar"
                </button>
                <FormFeedback status=status saved="Usuário cadastrado." failed="Não foi possível cadastrar o usuário." />
            </form>
        </section>
    }
}
