//! Domain model for the task resource.
//!
//! A task carries a title, a description and a lifecycle status. Field
//! bounds are enforced by [`crate::task::validation`] before values reach
//! these types; the domain only guarantees that status is one of the four
//! enumerated literals and that timestamps follow the clock.

mod error;
mod ids;
mod status;
mod task;

pub use error::{ParseTaskIdError, ParseTaskStatusError};
pub use ids::TaskId;
pub use status::TaskStatus;
pub use task::{NewTask, PersistedTaskData, Task, TaskPatch};
