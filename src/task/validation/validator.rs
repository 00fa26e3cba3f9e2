//! Boundary validator for task payloads.

use super::{FieldErrors, TASK_SCHEMA, TaskField, ValidationMode};
use crate::task::domain::{NewTask, TaskPatch, TaskStatus};

/// Raw, possibly incomplete field values received from a caller.
///
/// `None` means the field was absent; absence is reported as a violation of
/// the field's minimum-length rule rather than as a separate error kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskCandidate<'a> {
    /// Candidate title.
    pub title: Option<&'a str>,
    /// Candidate description.
    pub description: Option<&'a str>,
    /// Candidate status literal; ignored in [`ValidationMode::Create`].
    pub status: Option<&'a str>,
}

impl<'a> TaskCandidate<'a> {
    const fn value(&self, field: TaskField) -> Option<&'a str> {
        match field {
            TaskField::Title => self.title,
            TaskField::Description => self.description,
            TaskField::Status => self.status,
        }
    }
}

/// Trimmed payload that passed every rule for its mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedTask {
    /// Insert payload produced in [`ValidationMode::Create`].
    Create(NewTask),
    /// Replacement values produced in [`ValidationMode::Update`].
    Update(TaskPatch),
}

/// Validates `candidate` against the shared schema for `mode`.
///
/// # Errors
///
/// Returns [`FieldErrors`] with one message per failing field when any rule
/// is violated.
pub fn validate(
    candidate: &TaskCandidate<'_>,
    mode: ValidationMode,
) -> Result<NormalizedTask, FieldErrors> {
    match mode {
        ValidationMode::Create => validate_create(candidate).map(NormalizedTask::Create),
        ValidationMode::Update => validate_update(candidate).map(NormalizedTask::Update),
    }
}

/// Validates a create payload; any status on `candidate` is ignored.
///
/// # Errors
///
/// Returns [`FieldErrors`] when the title or description is out of bounds.
pub fn validate_create(candidate: &TaskCandidate<'_>) -> Result<NewTask, FieldErrors> {
    check(candidate, ValidationMode::Create)?;
    Ok(NewTask::new(
        trimmed(candidate.title),
        trimmed(candidate.description),
    ))
}

/// Validates an update payload, which always yields a status.
///
/// # Errors
///
/// Returns [`FieldErrors`] when any field is out of bounds or the status is
/// not exactly one of the four literals.
pub fn validate_update(candidate: &TaskCandidate<'_>) -> Result<TaskPatch, FieldErrors> {
    check(candidate, ValidationMode::Update)?;
    let status = parse_status(candidate.status)?;
    Ok(TaskPatch::new(
        trimmed(candidate.title),
        trimmed(candidate.description),
        status,
    ))
}

fn check(candidate: &TaskCandidate<'_>, mode: ValidationMode) -> Result<(), FieldErrors> {
    let errors: FieldErrors = TASK_SCHEMA
        .fields(mode)
        .filter_map(|schema| {
            let raw = candidate.value(schema.field()).unwrap_or_default();
            schema
                .first_violation(raw)
                .map(|message| (schema.field(), message.to_owned()))
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn parse_status(raw: Option<&str>) -> Result<TaskStatus, FieldErrors> {
    TaskStatus::try_from(raw.unwrap_or_default()).map_err(|err| {
        [(TaskField::Status, err.to_string())]
            .into_iter()
            .collect()
    })
}

fn trimmed(raw: Option<&str>) -> String {
    raw.unwrap_or_default().trim().to_owned()
}
