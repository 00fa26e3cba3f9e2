//! The task resource.
//!
//! A single CRUD resource whose only behavioural rules are field bounds and
//! status membership. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Shared field rules in [`validation`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//! - The HTTP/JSON boundary in [`api`]
//! - The client-side form controller in [`client`]

pub mod adapters;
pub mod api;
pub mod client;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
