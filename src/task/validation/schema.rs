//! Data-described field rules for task payloads.
//!
//! The same [`TASK_SCHEMA`] value drives the server-side validator and the
//! client-side form pre-check, so the two can never disagree on bounds or
//! messages.

use crate::task::domain::TaskStatus;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum title length in characters, measured after trimming.
pub const TITLE_MIN_CHARS: usize = 3;
/// Minimum description length in characters, measured after trimming.
pub const DESCRIPTION_MIN_CHARS: usize = 3;
/// Maximum description length in characters, measured after trimming.
pub const DESCRIPTION_MAX_CHARS: usize = 500;

/// Accepted status literals, in lifecycle order.
pub const STATUS_LITERALS: [&str; 4] = [
    TaskStatus::Pending.as_str(),
    TaskStatus::Running.as_str(),
    TaskStatus::Completed.as_str(),
    TaskStatus::Failed.as_str(),
];

/// Input field names shared by requests, errors and forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskField {
    /// The `title` field.
    Title,
    /// The `description` field.
    Description,
    /// The `status` field.
    Status,
}

impl TaskField {
    /// Every field, in reporting order.
    pub const ALL: [Self; 3] = [Self::Title, Self::Description, Self::Status];

    /// Returns the wire name of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Status => "status",
        }
    }
}

impl fmt::Display for TaskField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which operation a payload is validated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Creating a task: title and description only.
    Create,
    /// Updating a task: title, description and status.
    Update,
}

/// A single rule applied to a field value.
///
/// Length rules measure the trimmed value; [`FieldRule::OneOf`] compares the
/// raw value, so surrounding whitespace makes a literal unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// The value must contain at least `min` characters.
    MinChars {
        /// Inclusive lower bound.
        min: usize,
        /// Message reported on violation.
        message: &'static str,
    },
    /// The value must contain at most `max` characters.
    MaxChars {
        /// Inclusive upper bound.
        max: usize,
        /// Message reported on violation.
        message: &'static str,
    },
    /// The value must equal one of `allowed` exactly.
    OneOf {
        /// Accepted literals.
        allowed: &'static [&'static str],
        /// Message reported on violation.
        message: &'static str,
    },
}

impl FieldRule {
    /// Returns the violation message when `value` breaks this rule.
    #[must_use]
    pub fn check(&self, value: &str) -> Option<&'static str> {
        match *self {
            Self::MinChars { min, message } => {
                (value.trim().chars().count() < min).then_some(message)
            }
            Self::MaxChars { max, message } => {
                (value.trim().chars().count() > max).then_some(message)
            }
            Self::OneOf { allowed, message } => (!allowed.contains(&value)).then_some(message),
        }
    }
}

/// Ordered rules for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSchema {
    field: TaskField,
    rules: &'static [FieldRule],
}

impl FieldSchema {
    /// Returns the field these rules apply to.
    #[must_use]
    pub const fn field(&self) -> TaskField {
        self.field
    }

    /// Returns the rules in evaluation order.
    #[must_use]
    pub const fn rules(&self) -> &'static [FieldRule] {
        self.rules
    }

    /// Returns the message of the first rule `value` violates.
    #[must_use]
    pub fn first_violation(&self, value: &str) -> Option<&'static str> {
        self.rules.iter().find_map(|rule| rule.check(value))
    }
}

/// Complete rule set for task payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskSchema {
    title: FieldSchema,
    description: FieldSchema,
    status: FieldSchema,
}

impl TaskSchema {
    /// Returns the schema for one field.
    #[must_use]
    pub const fn field(&self, field: TaskField) -> &FieldSchema {
        match field {
            TaskField::Title => &self.title,
            TaskField::Description => &self.description,
            TaskField::Status => &self.status,
        }
    }

    /// Returns the field schemas checked in `mode`, in display order.
    pub fn fields(&self, mode: ValidationMode) -> impl Iterator<Item = &FieldSchema> {
        let status = match mode {
            ValidationMode::Create => None,
            ValidationMode::Update => Some(&self.status),
        };
        [&self.title, &self.description].into_iter().chain(status)
    }
}

/// The shared task rule set.
pub static TASK_SCHEMA: TaskSchema = TaskSchema {
    title: FieldSchema {
        field: TaskField::Title,
        rules: &[FieldRule::MinChars {
            min: TITLE_MIN_CHARS,
            message: "Title must be at least 3 character long.",
        }],
    },
    description: FieldSchema {
        field: TaskField::Description,
        rules: &[
            FieldRule::MinChars {
                min: DESCRIPTION_MIN_CHARS,
                message: "Description must be at least 3 character long.",
            },
            FieldRule::MaxChars {
                max: DESCRIPTION_MAX_CHARS,
                message: "Length exceeded.",
            },
        ],
    },
    status: FieldSchema {
        field: TaskField::Status,
        rules: &[FieldRule::OneOf {
            allowed: &STATUS_LITERALS,
            message: "Status must be one of Pending, Running, Completed, Failed.",
        }],
    },
};
