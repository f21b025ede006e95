pub mod task;
pub mod user;

pub use task::{NewTask, Priority, Task, TaskId, TaskPatch, TaskStatus};
pub use user::{NewUser, User};
