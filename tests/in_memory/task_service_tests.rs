//! In-memory integration tests for task service flows.

use std::sync::Arc;

use tasktrack::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::TaskStatus,
    services::{CreateTaskRequest, TaskService, TaskServiceError, UpdateTaskRequest},
    validation::TaskField,
};
use rstest::{fixture, rstest};

type TestService = TaskService<InMemoryTaskRepository>;

#[fixture]
fn service() -> TestService {
    TaskService::new(Arc::new(InMemoryTaskRepository::new()))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_lifecycle_of_a_task(service: TestService) -> Result<(), eyre::Report> {
    let created = service
        .create(CreateTaskRequest::new("Buy milk", "2% milk from store"))
        .await?;
    let id = created.id().to_string();

    let listed = service.list().await?;
    eyre::ensure!(listed.len() == 1, "one task listed");

    let updated = service
        .update(
            &id,
            UpdateTaskRequest::new("Buy milk", "2% milk from store", "Completed"),
        )
        .await?;
    eyre::ensure!(updated.status() == TaskStatus::Completed, "status updated");

    service.delete(&id).await?;
    let lookup = service.show(&id).await;
    eyre::ensure!(
        matches!(lookup, Err(TaskServiceError::NotFound(_))),
        "deleted task must be gone, got {lookup:?}"
    );
    eyre::ensure!(service.list().await?.is_empty(), "list is empty again");
    Ok(())
}

#[rstest]
#[case(CreateTaskRequest::new("ab", "valid description"), &[TaskField::Title])]
#[case(CreateTaskRequest::new("Valid", "no"), &[TaskField::Description])]
#[case(CreateTaskRequest::default(), &[TaskField::Title, TaskField::Description])]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_creates_report_each_failing_field(
    service: TestService,
    #[case] request: CreateTaskRequest,
    #[case] expected: &[TaskField],
) -> Result<(), eyre::Report> {
    let result = service.create(request).await;

    let Err(TaskServiceError::Validation(errors)) = result else {
        return Err(eyre::eyre!("expected validation failure, got {result:?}"));
    };
    let fields: Vec<TaskField> = errors.iter().map(|(field, _)| field).collect();
    eyre::ensure!(fields == expected, "unexpected failing fields {fields:?}");
    eyre::ensure!(service.list().await?.is_empty(), "nothing stored");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn description_length_is_counted_in_characters(
    service: TestService,
) -> Result<(), eyre::Report> {
    let at_limit = "ü".repeat(500);
    let over_limit = "ü".repeat(501);

    service
        .create(CreateTaskRequest::new("Umlauts", at_limit))
        .await?;
    let rejected = service
        .create(CreateTaskRequest::new("Umlauts", over_limit))
        .await;

    let Err(TaskServiceError::Validation(errors)) = rejected else {
        return Err(eyre::eyre!("expected validation failure, got {rejected:?}"));
    };
    eyre::ensure!(
        errors.get(TaskField::Description) == Some("Length exceeded."),
        "unexpected description error {errors:?}"
    );
    Ok(())
}
