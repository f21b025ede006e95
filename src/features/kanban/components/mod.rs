pub mod board;
pub mod column;
pub mod header;
pub mod task_card;

pub use board::KanbanBoard;
pub use column::KanbanColumn;
pub use header::AppHeader;
pub use task_card::TaskCard;
