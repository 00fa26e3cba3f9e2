//! In-memory adapters for the task resource.

mod task;

pub use task::InMemoryTaskRepository;
