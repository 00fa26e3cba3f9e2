//! Client-side counterpart of the task API.
//!
//! Mirrors the server's field rules before submission by evaluating the
//! same shared schema, tracks per-field errors and the in-flight flag, and
//! maps responses to view states, notifications and status badges. No
//! rendering happens here.

pub mod controller;
pub mod form;
pub mod transport;
pub mod view;

pub use controller::TaskController;
pub use form::{FormMode, Notification, NotificationLevel, SubmitBlocked, SubmitPayload, TaskForm};
pub use transport::{HttpTaskTransport, TaskTransport, TransportError, TransportResult};
pub use view::{BadgeColor, StatusBadge, ViewState};
