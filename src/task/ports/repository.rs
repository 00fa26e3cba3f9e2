//! Repository port for task persistence.

use crate::task::domain::{NewTask, Task, TaskId, TaskPatch};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Implementations trust their inputs: field bounds are enforced before a
/// payload reaches the store. A missing record is an ordinary outcome and is
/// reported through `Option`/`bool`, never as an error.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task, assigning its identifier and timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::StoreUnavailable`] when the persistence
    /// collaborator cannot complete the write.
    async fn insert(&self, new_task: NewTask) -> TaskRepositoryResult<Task>;

    /// Returns every stored task. Ordering is not guaranteed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::StoreUnavailable`] when the read fails.
    async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Finds a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::StoreUnavailable`] when the read fails.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Replaces title, description and status of a task and refreshes its
    /// update timestamp.
    ///
    /// Returns `None` when no task has the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::StoreUnavailable`] when the write fails.
    async fn update_by_id(&self, id: TaskId, patch: TaskPatch)
    -> TaskRepositoryResult<Option<Task>>;

    /// Deletes a task, returning whether a record was removed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::StoreUnavailable`] when the write fails.
    async fn delete_by_id(&self, id: TaskId) -> TaskRepositoryResult<bool>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The persistence collaborator could not complete the operation.
    #[error("task store unavailable: {0}")]
    StoreUnavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::StoreUnavailable(Arc::new(err))
    }
}
