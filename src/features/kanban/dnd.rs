//! Pointer-driven drag and drop for the board.
//!
//! A press on a card only records a pending drag; moving past the threshold
//! starts it. Columns mark themselves as the drop target on mouseenter, and
//! the document-level mouseup completes the gesture with a [`DragEnd`].

use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::core::models::{TaskId, TaskStatus};

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// Result of a completed gesture: what was dragged and where it was dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct DragEnd {
    pub active: Option<TaskId>,
    pub over: Option<TaskStatus>,
}

impl DragEnd {
    /// Both ends are required for a status move.
    pub fn target(&self) -> Option<(TaskId, TaskStatus)> {
        match (&self.active, &self.over) {
            (Some(id), Some(status)) => Some((*id, status.clone())),
            _ => None,
        }
    }
}

/// Gesture bookkeeping, independent of the DOM.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragState {
    pending: Option<TaskId>,
    active: Option<TaskId>,
    over: Option<TaskStatus>,
    start: (i32, i32),
    offset: (i32, i32),
}

impl DragState {
    pub fn press(&mut self, task_id: TaskId, x: i32, y: i32) {
        self.pending = Some(task_id);
        self.start = (x, y);
        self.offset = (0, 0);
    }

    /// Returns true when this movement started the drag.
    pub fn pointer_moved(&mut self, x: i32, y: i32) -> bool {
        let dx = x - self.start.0;
        let dy = y - self.start.1;
        if self.active.is_some() {
            self.offset = (dx, dy);
            return false;
        }
        if self.pending.is_some() && (dx.abs() > DRAG_THRESHOLD_PX || dy.abs() > DRAG_THRESHOLD_PX) {
            self.active = self.pending;
            self.offset = (dx, dy);
            return true;
        }
        false
    }

    pub fn enter_column(&mut self, status: TaskStatus) {
        if self.active.is_some() {
            self.over = Some(status);
        }
    }

    pub fn leave_column(&mut self) {
        if self.active.is_some() {
            self.over = None;
        }
    }

    /// Ends the gesture. A press that never crossed the threshold is a click
    /// and yields nothing.
    pub fn release(&mut self) -> Option<DragEnd> {
        let was_dragging = self.active.is_some();
        let end = DragEnd {
            active: self.active.take(),
            over: self.over.take(),
        };
        self.pending = None;
        self.offset = (0, 0);
        was_dragging.then_some(end)
    }

    /// Drops the gesture without a drop event, e.g. when the button was
    /// released outside the window and no mouseup reached us.
    pub fn cancel(&mut self) {
        *self = DragState::default();
    }

    fn is_tracking(&self) -> bool {
        self.pending.is_some() || self.active.is_some()
    }

    pub fn dragging(&self) -> Option<TaskId> {
        self.active
    }

    pub fn over(&self) -> Option<&TaskStatus> {
        self.over.as_ref()
    }

    /// CSS transform for the card being dragged, if `task_id` is it.
    pub fn transform_for(&self, task_id: TaskId) -> Option<String> {
        (self.active == Some(task_id)).then(|| {
            format!(
                "transform: translate({}px, {}px); pointer-events: none;",
                self.offset.0, self.offset.1
            )
        })
    }
}

/// Reactive handle shared by the board, its columns and cards.
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub state: RwSignal<DragState>,
}

pub fn create_dnd_signals() -> DndSignals {
    DndSignals {
        state: RwSignal::new(DragState::default()),
    }
}

impl DndSignals {
    pub fn on_card_mousedown(self, task_id: TaskId) -> impl Fn(ev::MouseEvent) + Copy + 'static {
        move |ev: ev::MouseEvent| {
            if ev.button() != 0 {
                return;
            }
            // Controls inside the card keep their own click behaviour
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some()
                    || target.dyn_ref::<web_sys::HtmlSelectElement>().is_some()
                    || target.dyn_ref::<web_sys::HtmlOptionElement>().is_some()
                {
                    return;
                }
            }
            ev.prevent_default();
            self.state.update(|s| s.press(task_id, ev.client_x(), ev.client_y()));
        }
    }

    pub fn on_column_mouseenter(self, status: TaskStatus) -> impl Fn(ev::MouseEvent) + Clone + 'static {
        move |_ev: ev::MouseEvent| {
            if self.state.with_untracked(|s| s.dragging().is_some()) {
                let status = status.clone();
                self.state.update(|s| s.enter_column(status));
            }
        }
    }

    pub fn on_column_mouseleave(self) -> impl Fn(ev::MouseEvent) + Copy + 'static {
        move |_ev: ev::MouseEvent| {
            if self.state.with_untracked(|s| s.dragging().is_some()) {
                self.state.update(|s| s.leave_column());
            }
        }
    }

    pub fn is_over(self, status: &TaskStatus) -> bool {
        self.state.with(|s| s.dragging().is_some() && s.over() == Some(status))
    }

    /// Binds document-level mousemove/mouseup for the lifetime of the calling
    /// component. `on_drag_end` fires once per completed drag.
    pub fn bind_window_listeners(self, on_drag_end: Callback<DragEnd>) {
        let move_handle = window_event_listener(ev::mousemove, move |ev| {
            if !self.state.with_untracked(DragState::is_tracking) {
                return;
            }
            // Primary button no longer held
            if ev.buttons() & 1 == 0 {
                self.state.update(DragState::cancel);
                return;
            }
            self.state.update(|s| {
                s.pointer_moved(ev.client_x(), ev.client_y());
            });
        });

        let up_handle = window_event_listener(ev::mouseup, move |_ev| {
            if !self.state.with_untracked(DragState::is_tracking) {
                return;
            }
            let mut finished = None;
            self.state.update(|s| finished = s.release());
            if let Some(end) = finished {
                on_drag_end.run(end);
            }
        });

        on_cleanup(move || {
            move_handle.remove();
            up_handle.remove();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_movement_is_a_click_not_a_drag() {
        let mut state = DragState::default();
        state.press(1, 100, 100);
        assert!(!state.pointer_moved(103, 102));
        assert_eq!(state.dragging(), None);
        assert_eq!(state.release(), None);
    }

    #[test]
    fn crossing_threshold_starts_drag_and_tracks_offset() {
        let mut state = DragState::default();
        state.press(7, 10, 10);
        assert!(state.pointer_moved(20, 10));
        assert_eq!(state.dragging(), Some(7));
        assert!(!state.pointer_moved(50, 40));
        assert_eq!(
            state.transform_for(7).as_deref(),
            Some("transform: translate(40px, 30px); pointer-events: none;")
        );
        assert_eq!(state.transform_for(8), None);
    }

    #[test]
    fn release_over_column_yields_drag_end() {
        let mut state = DragState::default();
        state.press(1, 0, 0);
        state.pointer_moved(0, 30);
        state.enter_column(TaskStatus::Done);

        let end = state.release().expect("drag completed");
        assert_eq!(end.target(), Some((1, TaskStatus::Done)));
        assert_eq!(state.dragging(), None);
        assert_eq!(state.transform_for(1), None);
    }

    #[test]
    fn release_outside_columns_has_no_target() {
        let mut state = DragState::default();
        state.press(1, 0, 0);
        state.pointer_moved(30, 0);
        state.enter_column(TaskStatus::Doing);
        state.leave_column();

        let end = state.release().expect("drag completed");
        assert_eq!(end.active, Some(1));
        assert_eq!(end.over, None);
        assert_eq!(end.target(), None);
    }

    #[test]
    fn cancelled_press_does_not_start_a_drag_later() {
        let mut state = DragState::default();
        state.press(1, 0, 0);
        state.cancel();
        assert!(!state.pointer_moved(40, 40));
        assert_eq!(state.dragging(), None);
        assert_eq!(state.release(), None);

        state.press(2, 0, 0);
        state.pointer_moved(30, 0);
        state.enter_column(TaskStatus::Done);
        state.cancel();
        assert_eq!(state.dragging(), None);
        assert_eq!(state.over(), None);
        assert_eq!(state.transform_for(2), None);
    }

    #[test]
    fn hovering_columns_before_drag_starts_is_ignored() {
        let mut state = DragState::default();
        state.press(1, 0, 0);
        state.enter_column(TaskStatus::Done);
        assert_eq!(state.over(), None);
    }
}
