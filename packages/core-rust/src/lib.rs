//! Intercept Core — action holders, lifecycle statuses, errors, and the
//! execution-service and status-sink contracts shared by every service stack.

pub mod error;
pub mod holder;
pub mod traits;
pub mod types;

pub use error::ExecutionError;
pub use holder::ActionHolder;
pub use traits::{ActionService, SharedSink, StatusSink};
pub use types::{ActionKind, ActionStatus, HolderId};
