use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser;
use crate::core::models::{TaskId, TaskStatus};
use crate::core::services::{ApiError, CancelToken, RequestSequence, TaskApi};
use crate::features::kanban::board_state::{BoardState, StatusMove};
use crate::features::kanban::dnd::DragEnd;
use crate::features::notifications::Notifier;

pub const DELETE_CONFIRMATION: &str = "Tem certeza que deseja excluir esta tarefa?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Declined,
}

/// Optimistic half of a completed drag: rewrites the local status and
/// returns the move to persist.
pub fn apply_drag_end(board: &mut BoardState, end: &DragEnd) -> Option<StatusMove> {
    let (task_id, target) = end.target()?;
    board.begin_move(task_id, target)
}

/// Sends `{status}` for a move that is already visible locally.
pub async fn persist_move(api: &TaskApi, status_move: &StatusMove) -> Result<(), ApiError> {
    api.update_status(status_move.task_id, status_move.to.clone()).await
}

/// Issues the delete only when `confirm` agrees.
pub async fn delete_with_confirmation(
    api: &TaskApi,
    task_id: TaskId,
    confirm: impl FnOnce(&str) -> bool,
) -> Result<DeleteOutcome, ApiError> {
    if !confirm(DELETE_CONFIRMATION) {
        return Ok(DeleteOutcome::Declined);
    }
    api.delete_task(task_id).await?;
    Ok(DeleteOutcome::Deleted)
}

/// Fetches the full task list. The first load replaces the cache; later
/// loads merge so unsettled drags survive. Out-of-order responses are dropped.
pub fn refresh_board(
    api: TaskApi,
    board: RwSignal<BoardState>,
    token: CancelToken,
    sequence: RequestSequence,
    initial: bool,
) {
    let ticket = sequence.next();
    spawn_local(async move {
        match api.list_tasks().await {
            Ok(tasks) => {
                if !sequence.is_current(ticket) {
                    web_sys::console::log_1(&"Discarding superseded task list".into());
                    return;
                }
                token.run_if_active(tasks, |tasks| {
                    web_sys::console::log_1(&format!("Loaded {} tasks", tasks.len()).into());
                    if initial {
                        board.update(|b| b.replace_all(tasks));
                    } else {
                        board.update(|b| b.merge_from_server(tasks));
                    }
                });
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to load tasks: {}", e).into());
            }
        }
    });
}

/// Board-level drop handler: local update first, then the PATCH.
/// A rejected PATCH restores the committed status and raises a notice.
pub fn move_task(
    api: TaskApi,
    board: RwSignal<BoardState>,
    notifier: Notifier,
    token: CancelToken,
    end: DragEnd,
) {
    let mut issued = None;
    board.update(|b| issued = apply_drag_end(b, &end));
    let Some(status_move) = issued else {
        return;
    };

    web_sys::console::log_1(
        &format!(
            "move_task: task_id={}, {} -> {}",
            status_move.task_id,
            status_move.from.as_str(),
            status_move.to.as_str()
        )
        .into(),
    );

    spawn_local(async move {
        let result = persist_move(&api, &status_move).await;
        if token.is_cancelled() {
            return;
        }
        match result {
            Ok(()) => board.update(|b| b.commit(&status_move)),
            Err(e) => {
                web_sys::console::error_1(
                    &format!("Failed to update status of task {}: {}", status_move.task_id, e).into(),
                );
                let mut reverted = false;
                board.update(|b| reverted = b.rollback(&status_move));
                if reverted {
                    notifier.error(format!(
                        "Não foi possível mover a tarefa para \"{}\". A alteração foi desfeita.",
                        status_move.to.as_str()
                    ));
                }
            }
        }
    });
}

/// Card-level "Alterar Status": PATCH, then re-sync the board from the API.
pub fn change_status(
    api: TaskApi,
    board: RwSignal<BoardState>,
    notifier: Notifier,
    token: CancelToken,
    sequence: RequestSequence,
    task_id: TaskId,
    status: TaskStatus,
) {
    spawn_local(async move {
        match api.update_status(task_id, status.clone()).await {
            Ok(()) => {
                if token.is_cancelled() {
                    return;
                }
                board.update(|b| b.settle(task_id, status));
                notifier.info("Status alterado com sucesso!");
                refresh_board(api, board, token, sequence, false);
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to change status of task {}: {}", task_id, e).into());
                browser::alert("Erro ao alterar status.");
            }
        }
    });
}

/// Card-level "Excluir": asks first, then DELETE and re-sync.
pub fn delete_task(
    api: TaskApi,
    board: RwSignal<BoardState>,
    notifier: Notifier,
    token: CancelToken,
    sequence: RequestSequence,
    task_id: TaskId,
) {
    spawn_local(async move {
        match delete_with_confirmation(&api, task_id, browser::confirm).await {
            Ok(DeleteOutcome::Declined) => {}
            Ok(DeleteOutcome::Deleted) => {
                if token.is_cancelled() {
                    return;
                }
                board.update(|b| b.remove(task_id));
                notifier.info("Tarefa excluída com sucesso!");
                refresh_board(api, board, token, sequence, false);
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to delete task {}: {}", task_id, e).into());
                browser::alert("Erro ao excluir tarefa.");
            }
        }
    });
}
