//! Tasktrack: a small task tracking service.
//!
//! Tasks move through a four-value lifecycle (`Pending`, `Running`,
//! `Completed`, `Failed`) and are managed through create, list, show,
//! update and delete operations exposed over HTTP/JSON.
//!
//! # Architecture
//!
//! Tasktrack follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, HTTP, etc.)
//!
//! # Modules
//!
//! - [`task`]: The task resource, its validation rules, store and API
//! - [`config`]: Start-up configuration
//! - [`telemetry`]: Logging set-up

pub mod config;
pub mod task;
pub mod telemetry;
