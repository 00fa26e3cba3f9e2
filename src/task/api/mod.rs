//! HTTP/JSON boundary for the task resource.
//!
//! [`envelope`] maps service outcomes to envelopes and status codes;
//! [`routes`] exposes them over `axum`.

pub mod envelope;
pub mod routes;

pub use envelope::{ApiResponse, OutcomeKind, TaskEnvelope};
pub use routes::{app, cors_layer, router};
