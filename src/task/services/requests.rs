//! Typed request payloads for the task service.
//!
//! Create and update have distinct shapes: the create payload has no status
//! field at all, so a client cannot choose the initial status. Absent and
//! `null` fields deserialize to `None` and are reported by validation as
//! minimum-length violations.

use crate::task::{
    domain::{NewTask, TaskPatch},
    validation::{FieldErrors, TaskCandidate, validate_create, validate_update},
};
use serde::{Deserialize, Serialize};

/// Payload for creating a task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateTaskRequest {
    /// Requested title.
    pub title: Option<String>,
    /// Requested description.
    pub description: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request with both fields present.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            description: Some(description.into()),
        }
    }

    /// Validates the payload and returns the trimmed insert payload.
    ///
    /// # Errors
    ///
    /// Returns [`FieldErrors`] when the title or description is out of
    /// bounds.
    pub fn validate(&self) -> Result<NewTask, FieldErrors> {
        let candidate = TaskCandidate {
            title: self.title.as_deref(),
            description: self.description.as_deref(),
            status: None,
        };
        validate_create(&candidate)
    }
}

/// Payload for replacing a task's title, description and status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateTaskRequest {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement status literal.
    pub status: Option<String>,
}

impl UpdateTaskRequest {
    /// Creates a request with every field present.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            description: Some(description.into()),
            status: Some(status.into()),
        }
    }

    /// Validates the payload and returns the trimmed replacement values.
    ///
    /// # Errors
    ///
    /// Returns [`FieldErrors`] when any field is out of bounds or the status
    /// is not one of the four literals.
    pub fn validate(&self) -> Result<TaskPatch, FieldErrors> {
        let candidate = TaskCandidate {
            title: self.title.as_deref(),
            description: self.description.as_deref(),
            status: self.status.as_deref(),
        };
        validate_update(&candidate)
    }
}
