use leptos::prelude::*;

use crate::core::models::TaskStatus;
use crate::features::kanban::components::KanbanColumn;
use crate::features::kanban::dnd::create_dnd_signals;
use crate::features::kanban::hooks::use_tasks;

/// Owns the task list for its lifetime: fetches on mount, routes completed
/// drags to the optimistic move handler, and lays out the three columns.
#[component]
pub fn KanbanBoard() -> impl IntoView {
    let tasks = use_tasks();
    let dnd = create_dnd_signals();
    dnd.bind_window_listeners(tasks.on_drag_end);

    let dragging = move || dnd.state.with(|s| s.dragging().is_some());

    view! {
        <div class="quadro" role="application" aria-label="Quadro Kanban de tarefas">
            <div class="quadro__topo">
                <h1 tabindex="0">"Meu Quadro"</h1>
                <button type="button" class="btn-secondary" on:click=move |_| tasks.refresh.run(())>
                    "Atualizar"
                </button>
            </div>
            <main class="conteiner" class:arrastando=dragging>
                <section class="atividades" role="region" aria-label="Colunas do quadro Kanban">
                    {TaskStatus::COLUMNS.into_iter().map(|status| {
                        view! { <KanbanColumn status=status tasks=tasks dnd=dnd /> }
                    }).collect::<Vec<_>>()}
                </section>
            </main>
            <p class="sr-only">
                "Use o mouse para arrastar tarefas entre colunas."
            </p>
        </div>
    }
}
