use std::collections::HashMap;

use crate::core::models::{Task, TaskId, TaskStatus};

/// An optimistic status change waiting for the API to confirm it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMove {
    pub task_id: TaskId,
    /// Last status the server is known to hold.
    pub from: TaskStatus,
    pub to: TaskStatus,
    seq: u64,
}

impl StatusMove {
    fn is_same(&self, other: &StatusMove) -> bool {
        self.task_id == other.task_id && self.seq == other.seq
    }
}

/// Client-side cache of the task list plus the moves not yet confirmed.
///
/// `tasks` always shows the optimistic view; `in_flight` keeps the committed
/// status of every task with a pending move so a failed patch can be undone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardState {
    tasks: Vec<Task>,
    in_flight: HashMap<TaskId, StatusMove>,
    next_seq: u64,
}

impl BoardState {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            in_flight: HashMap::new(),
            next_seq: 0,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn is_pending(&self, id: TaskId) -> bool {
        self.in_flight.contains_key(&id)
    }

    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.in_flight.clear();
    }

    /// Tasks whose status is exactly `status`, in server order.
    pub fn column(&self, status: &TaskStatus) -> Vec<Task> {
        if !status.is_column() {
            return Vec::new();
        }
        self.tasks
            .iter()
            .filter(|t| &t.status == status)
            .cloned()
            .collect()
    }

    pub fn count(&self, status: &TaskStatus) -> usize {
        self.tasks.iter().filter(|t| &t.status == status).count()
    }

    /// The three board columns in display order. Tasks with an unrecognized
    /// status appear in none of them.
    pub fn columns(&self) -> Vec<(TaskStatus, Vec<Task>)> {
        TaskStatus::COLUMNS
            .into_iter()
            .map(|status| {
                let tasks = self.column(&status);
                (status, tasks)
            })
            .collect()
    }

    /// Rewrites the task's status locally, before any request is made.
    ///
    /// Returns `None` when there is nothing to send: unknown task, a target
    /// that is not a column, or a drop onto the task's current column.
    pub fn begin_move(&mut self, task_id: TaskId, target: TaskStatus) -> Option<StatusMove> {
        if !target.is_column() {
            return None;
        }
        let task = self.tasks.iter_mut().find(|t| t.id == task_id)?;
        if task.status == target {
            return None;
        }

        // A second move before the first settles keeps the original committed status.
        let committed = match self.in_flight.get(&task_id) {
            Some(previous) => previous.from.clone(),
            None => task.status.clone(),
        };
        task.update_status(target.clone());

        self.next_seq += 1;
        let status_move = StatusMove {
            task_id,
            from: committed,
            to: target,
            seq: self.next_seq,
        };
        self.in_flight.insert(task_id, status_move.clone());
        Some(status_move)
    }

    /// The API accepted the move.
    pub fn commit(&mut self, status_move: &StatusMove) {
        match self.in_flight.get_mut(&status_move.task_id) {
            Some(current) if current.is_same(status_move) => {
                self.in_flight.remove(&status_move.task_id);
            }
            // The server now holds this move's target; a later rollback must return there.
            Some(newer) if newer.seq > status_move.seq => newer.from = status_move.to.clone(),
            _ => {}
        }
    }

    /// The API rejected the move: restore the committed status.
    ///
    /// Returns `false` when a newer move for the same task superseded this one;
    /// that move owns the task's status now.
    pub fn rollback(&mut self, status_move: &StatusMove) -> bool {
        let committed = match self.in_flight.get(&status_move.task_id) {
            Some(current) if current.is_same(status_move) => current.from.clone(),
            _ => return false,
        };
        self.in_flight.remove(&status_move.task_id);
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == status_move.task_id) {
            task.update_status(committed);
        }
        true
    }

    /// A card-level update the API already accepted. Any drag still in flight
    /// for the task no longer owns its status: its commit and rollback become no-ops.
    pub fn settle(&mut self, task_id: TaskId, status: TaskStatus) {
        self.in_flight.remove(&task_id);
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == task_id) {
            task.update_status(status);
        }
    }

    /// Replaces the cache with server truth, keeping the local status of
    /// tasks whose move has not settled yet.
    pub fn merge_from_server(&mut self, mut server_tasks: Vec<Task>) {
        for task in server_tasks.iter_mut() {
            if let Some(pending) = self.in_flight.get(&task.id) {
                task.update_status(pending.to.clone());
            }
        }
        let live: Vec<TaskId> = server_tasks.iter().map(|t| t.id).collect();
        self.in_flight.retain(|id, _| live.contains(id));
        self.tasks = server_tasks;
    }

    pub fn remove(&mut self, task_id: TaskId) {
        self.tasks.retain(|t| t.id != task_id);
        self.in_flight.remove(&task_id);
    }
}
