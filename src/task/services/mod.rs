//! Application services for the task resource.

mod lifecycle;
mod requests;

pub use lifecycle::{TaskService, TaskServiceError, TaskServiceResult};
pub use requests::{CreateTaskRequest, UpdateTaskRequest};
