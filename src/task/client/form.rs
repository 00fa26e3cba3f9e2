//! Form state for creating and editing a task.
//!
//! The form runs the shared [`TASK_SCHEMA`](crate::task::validation::TASK_SCHEMA)
//! locally before anything is sent, keeps at most one message per field, and
//! clears a field's message as soon as that field is edited.

use super::transport::TransportResult;
use crate::task::{
    api::TaskEnvelope,
    domain::Task,
    services::{CreateTaskRequest, UpdateTaskRequest},
    validation::{
        DESCRIPTION_MAX_CHARS, FieldErrors, TaskCandidate, TaskField, validate_create,
        validate_update,
    },
};
use thiserror::Error;

/// Message shown when the service cannot be reached.
pub const NETWORK_FAILURE_MESSAGE: &str = "Unable to reach the task service.";
/// Message shown when a failure envelope carries no message.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong.";
/// Message shown when local validation blocks a submission.
pub const FIX_FIELDS_MESSAGE: &str = "Please correct the highlighted fields.";

/// What the form submits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    /// A new task.
    Create,
    /// Edits to an existing task.
    Update {
        /// Identifier of the task being edited.
        task_id: String,
    },
}

/// Severity of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    /// The operation succeeded.
    Success,
    /// The operation failed.
    Error,
}

/// A transient message shown after an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Severity.
    pub level: NotificationLevel,
    /// Text to display.
    pub message: String,
}

impl Notification {
    /// Creates a success notification.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    /// Creates an error notification.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

/// Validated request ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitPayload {
    /// Create request.
    Create(CreateTaskRequest),
    /// Update request for the given task.
    Update {
        /// Identifier of the task being edited.
        task_id: String,
        /// Replacement values.
        request: UpdateTaskRequest,
    },
}

/// Reasons a submission does not start.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitBlocked {
    /// A previous submission has not finished.
    #[error("a submission is already in flight")]
    InFlight,
    /// Local validation failed; the errors are also stored on the form.
    #[error(transparent)]
    Invalid(FieldErrors),
}

/// Editable task form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskForm {
    mode: FormMode,
    title: String,
    description: String,
    status: String,
    errors: FieldErrors,
    submitting: bool,
}

impl TaskForm {
    /// Creates an empty form for a new task.
    #[must_use]
    pub fn for_create() -> Self {
        Self {
            mode: FormMode::Create,
            title: String::new(),
            description: String::new(),
            status: String::new(),
            errors: FieldErrors::new(),
            submitting: false,
        }
    }

    /// Creates a form pre-filled from a loaded task.
    #[must_use]
    pub fn for_update(task: &Task) -> Self {
        Self {
            mode: FormMode::Update {
                task_id: task.id().to_string(),
            },
            title: task.title().to_owned(),
            description: task.description().to_owned(),
            status: task.status().as_str().to_owned(),
            errors: FieldErrors::new(),
            submitting: false,
        }
    }

    /// Returns the form mode.
    #[must_use]
    pub const fn mode(&self) -> &FormMode {
        &self.mode
    }

    /// Returns the current value of `field`.
    #[must_use]
    pub fn value(&self, field: TaskField) -> &str {
        match field {
            TaskField::Title => &self.title,
            TaskField::Description => &self.description,
            TaskField::Status => &self.status,
        }
    }

    /// Returns the current field errors.
    #[must_use]
    pub const fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Returns whether a submission is in flight; the submit control is
    /// disabled while this is `true`.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Returns the description length counter, e.g. `12/500 characters`.
    #[must_use]
    pub fn description_counter(&self) -> String {
        format!(
            "{}/{DESCRIPTION_MAX_CHARS} characters",
            self.description.chars().count()
        )
    }

    /// Sets `field` to `value` and clears that field's error.
    pub fn edit(&mut self, field: TaskField, value: impl Into<String>) {
        let value = value.into();
        match field {
            TaskField::Title => self.title = value,
            TaskField::Description => self.description = value,
            TaskField::Status => self.status = value,
        }
        self.errors.clear(field);
    }

    /// Validates the form locally and, on success, marks it as submitting.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitBlocked::InFlight`] while a submission is pending and
    /// [`SubmitBlocked::Invalid`] when a field fails the shared rules.
    pub fn begin_submit(&mut self) -> Result<SubmitPayload, SubmitBlocked> {
        if self.submitting {
            return Err(SubmitBlocked::InFlight);
        }

        let candidate = TaskCandidate {
            title: Some(self.title.as_str()),
            description: Some(self.description.as_str()),
            status: Some(self.status.as_str()),
        };
        let validated = match &self.mode {
            FormMode::Create => validate_create(&candidate).map(|new_task| {
                SubmitPayload::Create(CreateTaskRequest::new(
                    new_task.title(),
                    new_task.description(),
                ))
            }),
            FormMode::Update { task_id } => {
                validate_update(&candidate).map(|patch| SubmitPayload::Update {
                    task_id: task_id.clone(),
                    request: UpdateTaskRequest::new(
                        patch.title(),
                        patch.description(),
                        patch.status().as_str(),
                    ),
                })
            }
        };
        let payload = validated.map_err(|errors| {
            self.errors = errors.clone();
            SubmitBlocked::Invalid(errors)
        })?;

        self.errors = FieldErrors::new();
        self.submitting = true;
        Ok(payload)
    }

    /// Applies the response of a submission and returns the notification to
    /// show.
    ///
    /// On success a create form is reset and an update form keeps the values
    /// returned by the service. On failure, field errors from the response
    /// are shown on the form; task data is never taken from a failed
    /// response.
    pub fn finish_submit(&mut self, outcome: TransportResult<TaskEnvelope<Task>>) -> Notification {
        self.submitting = false;
        match outcome {
            Ok(envelope) if envelope.status => self.apply_success(envelope),
            Ok(envelope) => {
                if let Some(errors) = envelope.errors {
                    self.errors = errors;
                }
                Notification::error(
                    envelope
                        .message
                        .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_owned()),
                )
            }
            Err(err) => Notification::error(err.user_message()),
        }
    }

    fn apply_success(&mut self, envelope: TaskEnvelope<Task>) -> Notification {
        match self.mode {
            FormMode::Create => {
                self.title.clear();
                self.description.clear();
                self.status.clear();
            }
            FormMode::Update { .. } => {
                if let Some(task) = envelope.task_data.as_ref() {
                    self.title = task.title().to_owned();
                    self.description = task.description().to_owned();
                    self.status = task.status().as_str().to_owned();
                }
            }
        }
        self.errors = FieldErrors::new();
        Notification::success(envelope.message.unwrap_or_default())
    }
}

impl Default for TaskForm {
    fn default() -> Self {
        Self::for_create()
    }
}
