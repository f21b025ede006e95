use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::core::models::{Priority, TaskId, TaskStatus};
use crate::core::services::{CancelToken, TaskApi};
use crate::features::forms::{FieldError, FieldErrors, FormFeedback, FormStatus, TaskEditForm};
use crate::features::notifications::use_notifier;

#[derive(Debug, Clone, PartialEq)]
enum LoadState {
    Loading,
    Ready,
    Missing,
    Failed,
}

/// `/editar/:id`: edits one task's fields and returns to the board.
#[component]
pub fn EditTask() -> impl IntoView {
    let api = use_context::<TaskApi>().expect("TaskApi context");
    let notifier = use_notifier();
    let navigate = use_navigate();
    let params = use_params_map();
    let token = CancelToken::new();
    {
        let token = token.clone();
        on_cleanup(move || token.cancel());
    }

    let task_id: Option<TaskId> =
        params.with_untracked(|p| p.get("id").and_then(|id| id.parse::<TaskId>().ok()));

    let form = RwSignal::new(TaskEditForm::default());
    let errors = RwSignal::new(FieldErrors::default());
    let load_state = RwSignal::new(LoadState::Loading);
    let status = RwSignal::new(FormStatus::Editing);

    match task_id {
        Some(id) => {
            let api = api.clone();
            let token = token.clone();
            spawn_local(async move {
                let result = api.get_task(id).await;
                if token.is_cancelled() {
                    return;
                }
                match result {
                    Ok(task) => {
                        form.set(TaskEditForm::from_task(&task));
                        load_state.set(LoadState::Ready);
                    }
                    Err(e) if e.is_not_found() => load_state.set(LoadState::Missing),
                    Err(e) => {
                        web_sys::console::error_1(&format!("Failed to load task {}: {}", id, e).into());
                        load_state.set(LoadState::Failed);
                    }
                }
            });
        }
        None => load_state.set(LoadState::Missing),
    }

    let handle_submit = {
        let navigate = navigate.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            let Some(id) = task_id else { return };
            let patch = match form.with_untracked(|f| f.validate()) {
                Ok(patch) => patch,
                Err(field_errors) => {
                    errors.set(field_errors);
                    status.set(FormStatus::Editing);
                    return;
                }
            };
            errors.set(FieldErrors::default());
            status.set(FormStatus::Submitting);

            let api = api.clone();
            let token = token.clone();
            let navigate = navigate.clone();
            spawn_local(async move {
                let result = api.update_task(id, &patch).await;
                if token.is_cancelled() {
                    return;
                }
                match result {
                    Ok(()) => {
                        status.set(FormStatus::Submitted);
                        notifier.info("Tarefa atualizada com sucesso!");
                        navigate("/", Default::default());
                    }
                    Err(e) => {
                        web_sys::console::error_1(&format!("Failed to update task {}: {}", id, e).into());
                        status.set(FormStatus::Failed);
                        notifier.error("Erro ao atualizar tarefa.");
                    }
                }
            });
        }
    };

    let back = move |_| navigate("/", Default::default());

    view! {
        <section class="formulario editar-tarefa">
            <h2>"Editar Tarefa"</h2>
            {move || match load_state.get() {
                LoadState::Loading => view! { <p>"Carregando..."</p> }.into_any(),
                LoadState::Missing => view! { <p>"Tarefa não encontrada."</p> }.into_any(),
                LoadState::Failed => view! { <p>"Erro ao carregar a tarefa."</p> }.into_any(),
                LoadState::Ready => view! {}.into_any(),
            }}
            <form
                on:submit=handle_submit
                novalidate
                class:oculto=move || load_state.get() != LoadState::Ready
            >
                <label for="descricao">"Descrição"</label>
                <textarea
                    id="descricao"
                    rows="3"
                    prop:value=move || form.with(|f| f.descricao.clone())
                    on:input=move |ev| form.update(|f| f.descricao = event_target_value(&ev))
                ></textarea>
                <FieldError errors=errors field="descricao" />

                <label for="setor">"Setor"</label>
                <input
                    id="setor"
                    type="text"
                    prop:value=move || form.with(|f| f.setor.clone())
                    on:input=move |ev| form.update(|f| f.setor = event_target_value(&ev))
                />
                <FieldError errors=errors field="setor" />

                <label for="prioridade">"Prioridade"</label>
                <select
                    id="prioridade"
                    prop:value=move || form.with(|f| f.prioridade.clone())
                    on:change=move |ev| form.update(|f| f.prioridade = event_target_value(&ev))
                >
                    {Priority::all().into_iter().map(|priority| view! {
                        <option value=priority.as_str().to_string()>{priority.display_name().to_string()}</option>
                    }).collect::<Vec<_>>()}
                </select>
                <FieldError errors=errors field="prioridade" />

                <label for="status">"Status"</label>
                <select
                    id="status"
                    prop:value=move || form.with(|f| f.status.clone())
                    on:change=move |ev| form.update(|f| f.status = event_target_value(&ev))
                >
                    {TaskStatus::COLUMNS.into_iter().map(|status| {
                        let label = status.as_str().to_string();
                        view! { <option value=label.clone()>{label.clone()}</option> }
                    }).collect::<Vec<_>>()}
                </select>
                <FieldError errors=errors field="status" />

                <div class="modal-actions">
                    <button type="button" class="btn-secondary" on:click=back>"Voltar"</button>
                    <button type="submit" class="btn-primary" disabled=move || status.get().is_submitting()>
                        "Salvar"
                    </button>
                </div>
                <FormFeedback status=status saved="Tarefa atualizada." failed="Não foi possível salvar a tarefa." />
            </form>
        </section>
    }
}
