pub mod board_state;
pub mod components;
pub mod dnd;
pub mod hooks;
pub mod services;

pub use board_state::{BoardState, StatusMove};
pub use components::*;
pub use dnd::{DndSignals, DragEnd, DragState};
pub use hooks::*;
