//! Service layer for task create, read, update and delete.

use crate::task::{
    domain::{Task, TaskId, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError},
    services::{CreateTaskRequest, UpdateTaskRequest},
    validation::FieldErrors,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// One or more fields violated a rule; the store was not called.
    #[error(transparent)]
    Validation(#[from] FieldErrors),
    /// No task has the requested identifier, or the identifier is malformed.
    #[error("task not found: {0}")]
    NotFound(String),
    /// The stored status may not move to the requested one.
    #[error("cannot move a task from {from} to {to}")]
    InvalidTransition {
        /// Status currently stored.
        from: TaskStatus,
        /// Requested status.
        to: TaskStatus,
    },
    /// The store could not complete the operation.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Stateless orchestration of task operations.
///
/// Every mutating call validates its payload before touching the store.
pub struct TaskService<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
}

impl<R> Clone for TaskService<R>
where
    R: TaskRepository,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> TaskService<R>
where
    R: TaskRepository,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a pending task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] for out-of-bounds fields and
    /// [`TaskServiceError::Repository`] when the store fails.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskServiceResult<Task> {
        let new_task = request.validate().inspect_err(|errors| {
            warn!(fields = errors.len(), "rejected task creation");
        })?;
        let task = self
            .repository
            .insert(new_task)
            .await
            .inspect_err(|err| error!(error = %err, "task insert failed"))?;
        info!(task_id = %task.id(), "task created");
        Ok(task)
    }

    /// Returns every task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the store fails.
    pub async fn list(&self) -> TaskServiceResult<Vec<Task>> {
        let tasks = self
            .repository
            .find_all()
            .await
            .inspect_err(|err| error!(error = %err, "task listing failed"))?;
        debug!(count = tasks.len(), "listed tasks");
        Ok(tasks)
    }

    /// Returns the task with identifier `id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when `id` is malformed or does
    /// not resolve, and [`TaskServiceError::Repository`] when the store
    /// fails.
    pub async fn show(&self, id: &str) -> TaskServiceResult<Task> {
        let task_id = resolve_id(id)?;
        let found = self
            .repository
            .find_by_id(task_id)
            .await
            .inspect_err(|err| error!(error = %err, %task_id, "task lookup failed"))?;
        debug!(%task_id, found = found.is_some(), "looked up task");
        found.ok_or_else(|| TaskServiceError::NotFound(id.to_owned()))
    }

    /// Replaces the title, description and status of task `id`.
    ///
    /// The payload is validated before the identifier is resolved, so an
    /// invalid payload never reaches the store. The stored status is then
    /// checked with [`TaskStatus::can_transition_to`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] for invalid fields,
    /// [`TaskServiceError::NotFound`] when `id` does not resolve,
    /// [`TaskServiceError::InvalidTransition`] when the status change is
    /// refused, and [`TaskServiceError::Repository`] when the store fails.
    pub async fn update(&self, id: &str, request: UpdateTaskRequest) -> TaskServiceResult<Task> {
        let patch = request.validate().inspect_err(|errors| {
            warn!(task_id = id, fields = errors.len(), "rejected task update");
        })?;
        let task_id = resolve_id(id)?;
        let current = self
            .repository
            .find_by_id(task_id)
            .await
            .inspect_err(|err| error!(error = %err, %task_id, "task lookup failed"))?
            .ok_or_else(|| TaskServiceError::NotFound(id.to_owned()))?;
        let (from, to) = (current.status(), patch.status());
        if !from.can_transition_to(to) {
            warn!(%task_id, %from, %to, "refused status transition");
            return Err(TaskServiceError::InvalidTransition { from, to });
        }
        let updated = self
            .repository
            .update_by_id(task_id, patch)
            .await
            .inspect_err(|err| error!(error = %err, %task_id, "task update failed"))?
            .ok_or_else(|| TaskServiceError::NotFound(id.to_owned()))?;
        info!(%task_id, %from, status = %updated.status(), "task updated");
        Ok(updated)
    }

    /// Deletes task `id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task was removed and
    /// [`TaskServiceError::Repository`] when the store fails.
    pub async fn delete(&self, id: &str) -> TaskServiceResult<()> {
        let task_id = resolve_id(id)?;
        let removed = self
            .repository
            .delete_by_id(task_id)
            .await
            .inspect_err(|err| error!(error = %err, %task_id, "task delete failed"))?;
        if !removed {
            return Err(TaskServiceError::NotFound(id.to_owned()));
        }
        info!(%task_id, "task deleted");
        Ok(())
    }
}

fn resolve_id(id: &str) -> TaskServiceResult<TaskId> {
    TaskId::parse(id).map_err(|_| TaskServiceError::NotFound(id.to_owned()))
}
