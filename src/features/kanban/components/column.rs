use leptos::prelude::*;

use crate::core::models::TaskStatus;
use crate::features::kanban::components::TaskCard;
use crate::features::kanban::dnd::DndSignals;
use crate::features::kanban::hooks::TasksHook;

/// Drop target for one status. Its id is the status itself.
#[component]
pub fn KanbanColumn(#[prop(into)] status: TaskStatus, tasks: TasksHook, dnd: DndSignals) -> impl IntoView {
    let board = tasks.board;
    let status_for_count = status.clone();
    let status_for_tasks = status.clone();
    let status_for_hover = status.clone();
    let label = status.as_str().to_string();

    view! {
        <section
            class="coluna"
            class:drop-alvo=move || dnd.is_over(&status_for_hover)
            data-coluna=label.clone()
            aria-label=format!("Coluna {}", label)
            on:mouseenter=dnd.on_column_mouseenter(status.clone())
            on:mouseleave=dnd.on_column_mouseleave()
        >
            <div class="column-header">
                <h2>{label.clone()}</h2>
                <span class="task-count">
                    {move || board.with(|b| b.count(&status_for_count))}
                </span>
            </div>
            <div class="column-content">
                <For
                    each=move || board.with(|b| b.column(&status_for_tasks))
                    key=|task| (task.id, task.status.as_str().to_string(), task.descricao.clone(), task.setor.clone(), task.prioridade.as_str().to_string())
                    children=move |task| {
                        let task_id = task.id;
                        view! {
                            <TaskCard
                                task=task
                                dnd=dnd
                                pending=Signal::derive(move || board.with(|b| b.is_pending(task_id)))
                                on_change_status=tasks.change_status
                                on_delete=tasks.delete_task
                            />
                        }
                    }
                />
            </div>
        </section>
    }
}
