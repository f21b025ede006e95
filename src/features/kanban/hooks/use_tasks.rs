use leptos::prelude::*;

use crate::core::models::{TaskId, TaskStatus};
use crate::core::services::{CancelToken, RequestSequence, TaskApi};
use crate::features::kanban::board_state::BoardState;
use crate::features::kanban::dnd::DragEnd;
use crate::features::kanban::services::{change_status, delete_task, move_task, refresh_board};
use crate::features::notifications::use_notifier;

/// Board state plus the handlers that mutate it. Every handler is tied to the
/// calling component's lifetime.
#[derive(Clone, Copy)]
pub struct TasksHook {
    pub board: RwSignal<BoardState>,
    pub on_drag_end: Callback<DragEnd>,
    pub change_status: Callback<(TaskId, TaskStatus)>,
    pub delete_task: Callback<TaskId>,
    pub refresh: Callback<()>,
}

pub fn use_tasks() -> TasksHook {
    let api = use_context::<TaskApi>().expect("TaskApi context");
    let notifier = use_notifier();
    let board = RwSignal::new(BoardState::default());
    let token = CancelToken::new();
    let sequence = RequestSequence::new();

    {
        let token = token.clone();
        on_cleanup(move || token.cancel());
    }

    // Load tasks on mount
    refresh_board(api.clone(), board, token.clone(), sequence.clone(), true);

    let on_drag_end = {
        let api = api.clone();
        let token = token.clone();
        Callback::new(move |end: DragEnd| {
            move_task(api.clone(), board, notifier, token.clone(), end);
        })
    };

    let change_status_fn = {
        let api = api.clone();
        let token = token.clone();
        let sequence = sequence.clone();
        Callback::new(move |(task_id, status): (TaskId, TaskStatus)| {
            change_status(api.clone(), board, notifier, token.clone(), sequence.clone(), task_id, status);
        })
    };

    let delete_task_fn = {
        let api = api.clone();
        let token = token.clone();
        let sequence = sequence.clone();
        Callback::new(move |task_id: TaskId| {
            delete_task(api.clone(), board, notifier, token.clone(), sequence.clone(), task_id);
        })
    };

    let refresh = Callback::new(move |_: ()| {
        refresh_board(api.clone(), board, token.clone(), sequence.clone(), false);
    });

    TasksHook {
        board,
        on_drag_end,
        change_status: change_status_fn,
        delete_task: delete_task_fn,
        refresh,
    }
}
