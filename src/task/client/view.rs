//! List/show view states and the status badge.

use super::transport::TransportResult;
use crate::task::{
    api::TaskEnvelope,
    domain::{Task, TaskStatus},
};

/// Message rendered when a view fails to load.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load tasks. Please try again.";
/// Message rendered when the task list is empty.
pub const NO_TASKS_MESSAGE: &str = "No tasks found.";
/// Message rendered when a single task does not exist.
pub const TASK_MISSING_MESSAGE: &str = "Task not found.";

/// Loading state of a list or show view.
///
/// Views start in `Loading` and settle in exactly one of the other states.
/// A request that never resolves leaves the view in `Loading`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState<T> {
    /// The request has not resolved.
    Loading,
    /// Data arrived.
    Loaded(T),
    /// The request succeeded but there is nothing to show.
    Empty,
    /// The request failed.
    Failed,
}

impl<T> ViewState<T> {
    /// Returns `true` while the request is outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the loaded data, if any.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Loaded(data) => Some(data),
            Self::Loading | Self::Empty | Self::Failed => None,
        }
    }
}

impl ViewState<Vec<Task>> {
    /// Settles a list view from its response.
    #[must_use]
    pub fn from_list_response(outcome: TransportResult<TaskEnvelope<Vec<Task>>>) -> Self {
        match outcome {
            Ok(TaskEnvelope {
                status: true,
                task_data: Some(tasks),
                ..
            }) if !tasks.is_empty() => Self::Loaded(tasks),
            Ok(TaskEnvelope { status: true, .. }) => Self::Empty,
            Ok(_) | Err(_) => Self::Failed,
        }
    }

    /// Returns the placeholder text for a list view with no data.
    #[must_use]
    pub const fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::Empty => Some(NO_TASKS_MESSAGE),
            Self::Failed => Some(LOAD_FAILED_MESSAGE),
            Self::Loading | Self::Loaded(_) => None,
        }
    }
}

impl ViewState<Task> {
    /// Settles a show view from its response.
    ///
    /// A failure envelope means the task does not exist and settles as
    /// `Empty`; only transport failures settle as `Failed`.
    #[must_use]
    pub fn from_show_response(outcome: TransportResult<TaskEnvelope<Task>>) -> Self {
        match outcome {
            Ok(TaskEnvelope {
                status: true,
                task_data: Some(task),
                ..
            }) => Self::Loaded(task),
            Ok(_) => Self::Empty,
            Err(_) => Self::Failed,
        }
    }

    /// Returns the placeholder text for a show view with no data.
    #[must_use]
    pub const fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::Empty => Some(TASK_MISSING_MESSAGE),
            Self::Failed => Some(LOAD_FAILED_MESSAGE),
            Self::Loading | Self::Loaded(_) => None,
        }
    }
}

/// Colour of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeColor {
    /// Pending.
    Blue,
    /// Running.
    Yellow,
    /// Completed.
    Green,
    /// Failed.
    Red,
}

impl BadgeColor {
    /// Returns the colour name used by the stylesheet.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Red => "red",
        }
    }
}

/// Visual badge for a task's status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBadge {
    status: TaskStatus,
}

impl StatusBadge {
    /// Creates the badge for `status`.
    #[must_use]
    pub const fn new(status: TaskStatus) -> Self {
        Self { status }
    }

    /// Returns the badge text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        self.status.as_str()
    }

    /// Returns the badge colour.
    #[must_use]
    pub const fn color(self) -> BadgeColor {
        match self.status {
            TaskStatus::Pending => BadgeColor::Blue,
            TaskStatus::Running => BadgeColor::Yellow,
            TaskStatus::Completed => BadgeColor::Green,
            TaskStatus::Failed => BadgeColor::Red,
        }
    }
}

impl From<TaskStatus> for StatusBadge {
    fn from(status: TaskStatus) -> Self {
        Self::new(status)
    }
}
