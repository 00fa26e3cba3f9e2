//! Per-field validation failures.

use super::TaskField;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Mapping from field to the message of the first rule it violated.
///
/// Serializes as a JSON object keyed by field name, e.g.
/// `{"title": "Title must be at least 3 character long."}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(transparent)]
#[error("validation failed for {} field(s)", .0.len())]
pub struct FieldErrors(BTreeMap<TaskField, String>);

impl FieldErrors {
    /// Creates an empty error set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Records `message` for `field` unless the field already has one.
    ///
    /// The first message recorded for a field wins.
    pub fn record(&mut self, field: TaskField, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    /// Removes and returns the message for `field`.
    pub fn clear(&mut self, field: TaskField) -> Option<String> {
        self.0.remove(&field)
    }

    /// Returns the message recorded for `field`.
    #[must_use]
    pub fn get(&self, field: TaskField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Returns `true` when no field has an error.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of fields with an error.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over `(field, message)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (TaskField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl FromIterator<(TaskField, String)> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = (TaskField, String)>>(iter: I) -> Self {
        let mut errors = Self::new();
        for (field, message) in iter {
            errors.record(field, message);
        }
        errors
    }
}
