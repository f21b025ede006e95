pub mod edit_task;
pub mod kanban;
pub mod registration;

pub use edit_task::EditTask;
pub use kanban::Kanban;
pub use registration::{RegisterTask, RegisterUser};
