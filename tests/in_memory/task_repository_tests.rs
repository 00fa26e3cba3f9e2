//! In-memory integration tests for the task store contract.

use tasktrack::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{NewTask, TaskId, TaskPatch, TaskStatus},
    ports::TaskRepository,
};
use rstest::{fixture, rstest};

#[fixture]
fn repo() -> InMemoryTaskRepository {
    InMemoryTaskRepository::new()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn insert_assigns_identity_status_and_timestamps(
    repo: InMemoryTaskRepository,
) -> Result<(), eyre::Report> {
    let first = repo
        .insert(NewTask::new("Buy milk", "2% milk from store"))
        .await?;
    let second = repo
        .insert(NewTask::new("Buy milk", "2% milk from store"))
        .await?;

    eyre::ensure!(first.id() != second.id(), "identifiers must be unique");
    eyre::ensure!(first.status() == TaskStatus::Pending, "new tasks are pending");
    eyre::ensure!(
        first.created_at() == first.updated_at(),
        "timestamps start equal"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_all_returns_every_task_newest_first(
    repo: InMemoryTaskRepository,
) -> Result<(), eyre::Report> {
    for title in ["First", "Second", "Third"] {
        repo.insert(NewTask::new(title, "some description")).await?;
    }

    let all = repo.find_all().await?;

    eyre::ensure!(all.len() == 3, "expected three tasks, found {}", all.len());
    eyre::ensure!(
        all.windows(2)
            .all(|pair| matches!(pair, [newer, older] if newer.created_at() >= older.created_at())),
        "tasks must be ordered newest first"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_store_lists_nothing(repo: InMemoryTaskRepository) -> Result<(), eyre::Report> {
    eyre::ensure!(repo.find_all().await?.is_empty(), "store should be empty");
    eyre::ensure!(
        repo.find_by_id(TaskId::new()).await?.is_none(),
        "unknown id should not resolve"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_replaces_fields_and_keeps_creation_time(
    repo: InMemoryTaskRepository,
) -> Result<(), eyre::Report> {
    let created = repo
        .insert(NewTask::new("Buy milk", "2% milk from store"))
        .await?;

    let updated = repo
        .update_by_id(
            created.id(),
            TaskPatch::new("Buy oat milk", "Barista edition", TaskStatus::Running),
        )
        .await?
        .ok_or_else(|| eyre::eyre!("existing task should update"))?;
    let stored = repo
        .find_by_id(created.id())
        .await?
        .ok_or_else(|| eyre::eyre!("updated task should still exist"))?;

    eyre::ensure!(stored == updated, "store must hold the returned task");
    eyre::ensure!(updated.title() == "Buy oat milk", "title replaced");
    eyre::ensure!(updated.status() == TaskStatus::Running, "status replaced");
    eyre::ensure!(
        updated.created_at() == created.created_at(),
        "creation time is immutable"
    );
    eyre::ensure!(
        updated.updated_at() >= created.updated_at(),
        "update time moves forward"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_of_unknown_task_returns_none(
    repo: InMemoryTaskRepository,
) -> Result<(), eyre::Report> {
    let result = repo
        .update_by_id(
            TaskId::new(),
            TaskPatch::new("Title", "Description", TaskStatus::Failed),
        )
        .await?;

    eyre::ensure!(result.is_none(), "unknown id must not update");
    eyre::ensure!(repo.find_all().await?.is_empty(), "no task is created");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_exactly_once(repo: InMemoryTaskRepository) -> Result<(), eyre::Report> {
    let created = repo
        .insert(NewTask::new("Buy milk", "2% milk from store"))
        .await?;

    eyre::ensure!(repo.delete_by_id(created.id()).await?, "first delete removes");
    eyre::ensure!(
        !repo.delete_by_id(created.id()).await?,
        "second delete finds nothing"
    );
    eyre::ensure!(
        repo.find_by_id(created.id()).await?.is_none(),
        "deleted task must not resolve"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn clones_share_the_same_store(repo: InMemoryTaskRepository) -> Result<(), eyre::Report> {
    let other = repo.clone();
    let created = other
        .insert(NewTask::new("Buy milk", "2% milk from store"))
        .await?;

    eyre::ensure!(
        repo.find_by_id(created.id()).await?.is_some(),
        "clone writes must be visible"
    );
    Ok(())
}
