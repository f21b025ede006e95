use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::core::models::{Task, TaskId, TaskStatus};
use crate::features::kanban::dnd::DndSignals;

/// One task on the board.
///
/// The status selector holds an uncommitted choice; the task's own `status`
/// only changes once the API accepts it (or a drag moves the card).
#[component]
pub fn TaskCard(
    task: Task,
    dnd: DndSignals,
    #[prop(into)] pending: Signal<bool>,
    on_change_status: Callback<(TaskId, TaskStatus)>,
    on_delete: Callback<TaskId>,
) -> impl IntoView {
    let task_id = task.id;
    let navigate = use_navigate();

    let initial_choice = if task.status.is_column() {
        task.status.as_str().to_string()
    } else {
        String::new()
    };
    let (status_choice, set_status_choice) = signal(initial_choice);

    let apply_status = move |_| match TaskStatus::parse_column(&status_choice.get_untracked()) {
        Some(status) => on_change_status.run((task_id, status)),
        None => web_sys::console::warn_1(&format!("No status selected for task {}", task_id).into()),
    };

    let edit = move |_| navigate(&format!("/editar/{}", task_id), Default::default());

    view! {
        <article
            class="tarefa"
            class:pendente=move || pending.get()
            aria-labelledby=format!("tarefa-{}", task_id)
            style=move || dnd.state.with(|s| s.transform_for(task_id)).unwrap_or_default()
            on:mousedown=dnd.on_card_mousedown(task_id)
        >
            <header>
                <h3 id=format!("tarefa-{}", task_id)>{task.descricao.clone()}</h3>
            </header>
            <dl>
                <dt>"Setor:"</dt>
                <dd>{task.setor.clone()}</dd>
                <dt>"Prioridade:"</dt>
                <dd>{task.prioridade.display_name().to_string()}</dd>
                {task.usuario.clone().map(|usuario| view! {
                    <dt>"Usuário:"</dt>
                    <dd>{usuario}</dd>
                })}
                {task.created_at.map(|created| view! {
                    <dt>"Criada em:"</dt>
                    <dd>{created.format("%d/%m/%Y %H:%M").to_string()}</dd>
                })}
            </dl>

            <div class="tarefa__acoes">
                <button type="button" on:click=edit>"Editar"</button>
                <button type="button" on:click=move |_| on_delete.run(task_id)>"Excluir"</button>
            </div>

            <div class="tarefa__status">
                <label for=format!("status-{}", task_id)>"Status:"</label>
                <select
                    id=format!("status-{}", task_id)
                    prop:value=move || status_choice.get()
                    on:change=move |ev| set_status_choice.set(event_target_value(&ev))
                >
                    <option value="">"Selecione"</option>
                    {TaskStatus::COLUMNS.into_iter().map(|status| {
                        let label = status.as_str().to_string();
                        view! { <option value=label.clone()>{label.clone()}</option> }
                    }).collect::<Vec<_>>()}
                </select>
                <button type="button" on:click=apply_status>"Alterar Status"</button>
            </div>
        </article>
    }
}
