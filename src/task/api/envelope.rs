//! Response envelopes for task operations.
//!
//! Every response is a JSON object whose boolean `status` tells success from
//! failure. Successful mutations carry the affected `taskData`; failures
//! carry a human-readable `message` and, for validation failures, the
//! per-field `errors` map.

use crate::task::{
    domain::Task,
    services::{TaskServiceError, TaskServiceResult},
    validation::{FieldErrors, TaskField},
};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

/// Message returned after a successful create.
pub const CREATED_MESSAGE: &str = "Task created successfully.";
/// Message returned after a successful update.
pub const UPDATED_MESSAGE: &str = "Task updated successfully.";
/// Message returned after a successful delete.
pub const DELETED_MESSAGE: &str = "Task deleted successfully.";
/// Message returned when validation rejects a payload.
pub const VALIDATION_FAILED_MESSAGE: &str = "Validation failed.";
/// Message returned when an identifier does not resolve.
pub const NOT_FOUND_MESSAGE: &str = "Task not found.";
/// Prefix of the message returned when a request body cannot be decoded.
pub const MALFORMED_BODY_MESSAGE: &str = "Malformed request body";

/// JSON response wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskEnvelope<T> {
    /// `true` on success, `false` on any failure.
    pub status: bool,
    /// Human-readable outcome description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Affected task data on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_data: Option<T>,
    /// Per-field validation messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

impl<T> TaskEnvelope<T> {
    /// Creates a success envelope.
    #[must_use]
    pub fn success(message: Option<&str>, task_data: Option<T>) -> Self {
        Self {
            status: true,
            message: message.map(str::to_owned),
            task_data,
            errors: None,
        }
    }

    /// Creates a failure envelope.
    #[must_use]
    pub fn failure(message: impl Into<String>, errors: Option<FieldErrors>) -> Self {
        Self {
            status: false,
            message: Some(message.into()),
            task_data: None,
            errors,
        }
    }
}

/// Classification of an outcome, used to pick the response status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    /// Read, update or delete succeeded.
    Ok,
    /// A task was created.
    Created,
    /// The payload failed validation.
    Invalid,
    /// The identifier did not resolve.
    NotFound,
    /// The store failed.
    Fault,
}

impl OutcomeKind {
    /// Returns the HTTP status code sent with this outcome.
    #[must_use]
    pub const fn http_status(self) -> StatusCode {
        match self {
            Self::Ok => StatusCode::OK,
            Self::Created => StatusCode::CREATED,
            Self::Invalid => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Fault => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// An envelope paired with its outcome classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse<T> {
    /// Outcome classification.
    pub kind: OutcomeKind,
    /// Response body.
    pub envelope: TaskEnvelope<T>,
}

impl<T> ApiResponse<T> {
    const fn new(kind: OutcomeKind, envelope: TaskEnvelope<T>) -> Self {
        Self { kind, envelope }
    }

    fn from_error(err: TaskServiceError) -> Self {
        match err {
            TaskServiceError::Validation(errors) => Self::new(
                OutcomeKind::Invalid,
                TaskEnvelope::failure(VALIDATION_FAILED_MESSAGE, Some(errors)),
            ),
            TaskServiceError::InvalidTransition { from, to } => Self::new(
                OutcomeKind::Invalid,
                TaskEnvelope::failure(
                    VALIDATION_FAILED_MESSAGE,
                    Some(
                        std::iter::once((
                            TaskField::Status,
                            format!("Cannot move a task from {from} to {to}."),
                        ))
                        .collect(),
                    ),
                ),
            ),
            TaskServiceError::NotFound(_) => Self::new(
                OutcomeKind::NotFound,
                TaskEnvelope::failure(NOT_FOUND_MESSAGE, None),
            ),
            TaskServiceError::Repository(repository_error) => Self::new(
                OutcomeKind::Fault,
                TaskEnvelope::failure(repository_error.to_string(), None),
            ),
        }
    }
}

/// Builds the failure envelope for a request body that could not be decoded.
///
/// `detail` describes the decoding problem and is appended to the message.
#[must_use]
pub fn rejected<T>(detail: &str) -> ApiResponse<T> {
    ApiResponse::new(
        OutcomeKind::Invalid,
        TaskEnvelope::failure(format!("{MALFORMED_BODY_MESSAGE}: {detail}"), None),
    )
}

/// Maps the result of a create to its envelope.
#[must_use]
pub fn created(result: TaskServiceResult<Task>) -> ApiResponse<Task> {
    result.map_or_else(ApiResponse::from_error, |task| {
        ApiResponse::new(
            OutcomeKind::Created,
            TaskEnvelope::success(Some(CREATED_MESSAGE), Some(task)),
        )
    })
}

/// Maps the result of a listing to its envelope.
#[must_use]
pub fn listed(result: TaskServiceResult<Vec<Task>>) -> ApiResponse<Vec<Task>> {
    result.map_or_else(ApiResponse::from_error, |tasks| {
        ApiResponse::new(OutcomeKind::Ok, TaskEnvelope::success(None, Some(tasks)))
    })
}

/// Maps the result of a single-task lookup to its envelope.
#[must_use]
pub fn shown(result: TaskServiceResult<Task>) -> ApiResponse<Task> {
    result.map_or_else(ApiResponse::from_error, |task| {
        ApiResponse::new(OutcomeKind::Ok, TaskEnvelope::success(None, Some(task)))
    })
}

/// Maps the result of an update to its envelope.
#[must_use]
pub fn updated(result: TaskServiceResult<Task>) -> ApiResponse<Task> {
    result.map_or_else(ApiResponse::from_error, |task| {
        ApiResponse::new(
            OutcomeKind::Ok,
            TaskEnvelope::success(Some(UPDATED_MESSAGE), Some(task)),
        )
    })
}

/// Maps the result of a delete to its envelope.
#[must_use]
pub fn deleted(result: TaskServiceResult<()>) -> ApiResponse<()> {
    result.map_or_else(ApiResponse::from_error, |()| {
        ApiResponse::new(
            OutcomeKind::Ok,
            TaskEnvelope::success(Some(DELETED_MESSAGE), None),
        )
    })
}
