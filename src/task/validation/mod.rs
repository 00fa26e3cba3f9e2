//! Field validation for task payloads.
//!
//! Validation happens once, at the boundary, before any store call. Rules
//! are described as data in [`schema`] and evaluated by [`validator`]; the
//! client form controller evaluates the very same rules.

pub mod errors;
pub mod schema;
pub mod validator;

pub use errors::FieldErrors;
pub use schema::{
    DESCRIPTION_MAX_CHARS, DESCRIPTION_MIN_CHARS, FieldRule, FieldSchema, STATUS_LITERALS,
    TASK_SCHEMA, TITLE_MIN_CHARS, TaskField, TaskSchema, ValidationMode,
};
pub use validator::{NormalizedTask, TaskCandidate, validate, validate_create, validate_update};
