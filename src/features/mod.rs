pub mod forms;
pub mod kanban;
pub mod notifications;
