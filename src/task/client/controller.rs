//! Drives forms and views against a [`TaskTransport`].

use super::{
    form::{
        FIX_FIELDS_MESSAGE, GENERIC_FAILURE_MESSAGE, Notification, SubmitBlocked, SubmitPayload,
        TaskForm,
    },
    transport::TaskTransport,
    view::ViewState,
};
use crate::task::domain::Task;
use std::sync::Arc;
use tracing::debug;

/// Client-side controller for the task pages.
///
/// Requests are neither retried nor cancelled; every failure is reported
/// once through the returned notification or view state.
pub struct TaskController<T>
where
    T: TaskTransport,
{
    transport: Arc<T>,
}

impl<T> Clone for TaskController<T>
where
    T: TaskTransport,
{
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T> TaskController<T>
where
    T: TaskTransport,
{
    /// Creates a controller over `transport`.
    #[must_use]
    pub const fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Validates and submits `form`.
    ///
    /// Returns `None` when a submission is already in flight, in which case
    /// nothing is sent.
    pub async fn submit(&self, form: &mut TaskForm) -> Option<Notification> {
        let payload = match form.begin_submit() {
            Ok(payload) => payload,
            Err(SubmitBlocked::InFlight) => return None,
            Err(SubmitBlocked::Invalid(errors)) => {
                debug!(fields = errors.len(), "form blocked by local validation");
                return Some(Notification::error(FIX_FIELDS_MESSAGE));
            }
        };

        let outcome = match &payload {
            SubmitPayload::Create(request) => self.transport.create(request).await,
            SubmitPayload::Update { task_id, request } => {
                self.transport.update(task_id, request).await
            }
        };
        Some(form.finish_submit(outcome))
    }

    /// Loads the task list view.
    pub async fn load_list(&self) -> ViewState<Vec<Task>> {
        ViewState::from_list_response(self.transport.list().await)
    }

    /// Loads a single task view.
    pub async fn load_task(&self, id: &str) -> ViewState<Task> {
        ViewState::from_show_response(self.transport.show(id).await)
    }

    /// Deletes a task and returns the notification to show.
    ///
    /// A success notification means the list should be reloaded.
    pub async fn delete(&self, id: &str) -> Notification {
        match self.transport.delete(id).await {
            Ok(envelope) if envelope.status => {
                Notification::success(envelope.message.unwrap_or_default())
            }
            Ok(envelope) => Notification::error(
                envelope
                    .message
                    .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_owned()),
            ),
            Err(err) => {
                debug!(error = %err, "delete request failed");
                Notification::error(err.user_message())
            }
        }
    }
}
