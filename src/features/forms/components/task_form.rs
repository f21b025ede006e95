use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::models::{Priority, User};
use crate::core::services::{CancelToken, TaskApi};
use crate::features::forms::components::{FieldError, FormFeedback};
use crate::features::forms::schemas::TaskForm;
use crate::features::forms::validation::FieldErrors;
use crate::features::forms::FormStatus;
use crate::features::notifications::use_notifier;

#[component]
pub fn TaskRegistrationForm() -> impl IntoView {
    let api = use_context::<TaskApi>().expect("TaskApi context");
    let notifier = use_notifier();
    let token = CancelToken::new();
    {
        let token = token.clone();
        on_cleanup(move || token.cancel());
    }

    let form = RwSignal::new(TaskForm::default());
    let errors = RwSignal::new(FieldErrors::default());
    let status = RwSignal::new(FormStatus::Editing);
    let users = RwSignal::new(Vec::<User>::new());

    // Selector options; stays empty when the listing is unavailable
    {
        let api = api.clone();
        let token = token.clone();
        spawn_local(async move {
            match api.list_users().await {
                Ok(loaded) => {
                    token.run_if_active(loaded, |loaded| users.set(loaded));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to load users: {}", e).into());
                }
            }
        });
    }

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
        web_sys::console::log_1(&format!("{:?}", payload).into());

        let api = api.clone();
        let token = token.clone();
        spawn_local(async move {
            let result = api.create_task(&payload).await;
            if token.is_cancelled() {
                return;
            }
            match result {
                Ok(()) => {
                    form.set(TaskForm::default());
                    status.set(FormStatus::Submitted);
                    notifier.info("Tarefa cadastrada com sucesso!");
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to create task: {}", e).into());
                    status.set(FormStatus::Failed);
                    notifier.error("Erro ao cadastrar tarefa.");
                }
            }
        });
    };

    view! {
        <div class="cadastro-tarefa">
            <h2>"Cadastro de Tarefa"</h2>
            <form on:submit=handle_submit novalidate>
                <div>
                    <label for="descricao">"Descrição"</label>
                    <textarea
                        id="descricao"
                        rows="3"
                        prop:value=move || form.with(|f| f.descricao.clone())
                        on:input=move |ev| form.update(|f| f.descricao = event_target_value(&ev))
                    ></textarea>
                    <FieldError errors=errors field="descricao" />
                </div>

                <div>
                    <label for="setor">"Setor"</label>
                    <input
                        id="setor"
                        type="text"
                        prop:value=move || form.with(|f| f.setor.clone())
                        on:input=move |ev| form.update(|f| f.setor = event_target_value(&ev))
                    />
                    <FieldError errors=errors field="setor" />
                </div>

                <div>
                    <label for="prioridade">"Prioridade"</label>
                    <select
                        id="prioridade"
                        prop:value=move || form.with(|f| f.prioridade.clone())
                        on:change=move |ev| form.update(|f| f.prioridade = event_target_value(&ev))
                    >
                        <option value="">"Selecione"</option>
                        {Priority::all().into_iter().map(|priority| {
                            view! {
                                <option value=priority.as_str().to_string()>
                                    {priority.display_name().to_string()}
                                </option>
                            }
                        }).collect::<Vec<_>>()}
                    </select>
                    <FieldError errors=errors field="prioridade" />
                </div>

                <div>
                    <label for="usuario">"Usuário"</label>
                    <select
                        id="usuario"
                        prop:value=move || form.with(|f| f.usuario.clone())
                        on:change=move |ev| form.update(|f| f.usuario = event_target_value(&ev))
                    >
                        <option value="">"Selecione"</option>
                        <For
                            each=move || users.get()
                            key=|user| user.id
                            children=move |user| view! {
                                <option value=user.option_value()>{user.nome.clone()}</option>
                            }
                        />
                    </select>
                    <FieldError errors=errors field="usuario" />
                </div>

                <button type="submit" disabled=move || status.get().is_submitting()>
                    "Cadastrar"
                </button>
                <FormFeedback status=status saved="Tarefa cadastrada." failed="Não foi possível cadastrar a tarefa." />
            </form>
        </div>
    }
}
