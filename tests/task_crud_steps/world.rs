//! Shared world state for task CRUD BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use tasktrack::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::Task,
    services::{TaskService, TaskServiceError},
};

/// Service type used by the BDD world.
pub type TestTaskService = TaskService<InMemoryTaskRepository>;

/// Scenario world for task CRUD behaviour tests.
pub struct TaskCrudWorld {
    pub service: TestTaskService,
    pub last_task: Option<Task>,
    pub last_result: Option<Result<(), TaskServiceError>>,
}

impl TaskCrudWorld {
    /// Creates a world over an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            service: TaskService::new(Arc::new(InMemoryTaskRepository::new())),
            last_task: None,
            last_result: None,
        }
    }

    /// Returns the identifier of the task created earlier in the scenario.
    pub fn task_id(&self) -> Result<String, eyre::Report> {
        self.last_task
            .as_ref()
            .map(|task| task.id().to_string())
            .ok_or_else(|| eyre::eyre!("missing created task in scenario world"))
    }

    /// Records the outcome of a step, keeping any returned task.
    pub fn record(&mut self, result: Result<Option<Task>, TaskServiceError>) {
        match result {
            Ok(task) => {
                if let Some(returned) = task {
                    self.last_task = Some(returned);
                }
                self.last_result = Some(Ok(()));
            }
            Err(err) => self.last_result = Some(Err(err)),
        }
    }
}

impl Default for TaskCrudWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskCrudWorld {
    TaskCrudWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
