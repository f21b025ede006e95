pub mod api;
pub mod cancel;
pub mod error;

pub use api::TaskApi;
pub use cancel::{CancelToken, RequestSequence, Ticket};
pub use error::{ApiError, Result};
