//! Then steps for task CRUD BDD scenarios.

use super::world::{TaskCrudWorld, run_async};
use rstest_bdd_macros::then;
use tasktrack::task::{
    domain::TaskStatus,
    services::TaskServiceError,
    validation::TaskField,
};

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskCrudWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let id = world.task_id()?;
    let stored = run_async(world.service.show(&id))?;

    if stored.status() != expected {
        return Err(eyre::eyre!(
            "expected status {}, found {}",
            expected.as_str(),
            stored.status().as_str()
        ));
    }
    Ok(())
}

#[then("the task list contains {count:u64} task")]
fn task_list_contains_one(world: &TaskCrudWorld, count: u64) -> Result<(), eyre::Report> {
    ensure_task_count(world, count)
}

#[then("the task list contains {count:u64} tasks")]
fn task_list_contains(world: &TaskCrudWorld, count: u64) -> Result<(), eyre::Report> {
    ensure_task_count(world, count)
}

fn ensure_task_count(world: &TaskCrudWorld, count: u64) -> Result<(), eyre::Report> {
    let tasks = run_async(world.service.list())?;
    let found = u64::try_from(tasks.len())?;
    eyre::ensure!(found == count, "expected {count} task(s), found {found}");
    Ok(())
}

#[then("the operation succeeds")]
fn operation_succeeds(world: &TaskCrudWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing operation result"))?;
    if let Err(err) = result {
        return Err(eyre::eyre!("expected success, got {err}"));
    }
    Ok(())
}

#[then(r#"the operation fails on the "{field_name}" field with "{message}""#)]
fn operation_fails_on_field(
    world: &TaskCrudWorld,
    field_name: String,
    message: String,
) -> Result<(), eyre::Report> {
    let field = TaskField::ALL
        .into_iter()
        .find(|candidate| candidate.as_str() == field_name)
        .ok_or_else(|| eyre::eyre!("unknown field in scenario: {field_name}"))?;
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing operation result"))?;

    let Err(TaskServiceError::Validation(errors)) = result else {
        return Err(eyre::eyre!("expected validation failure, got {result:?}"));
    };
    eyre::ensure!(
        errors.get(field) == Some(message.as_str()),
        "unexpected field errors {errors:?}"
    );
    Ok(())
}

#[then("the operation reports not found")]
fn operation_reports_not_found(world: &TaskCrudWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing operation result"))?;
    eyre::ensure!(
        matches!(result, Err(TaskServiceError::NotFound(_))),
        "expected NotFound, got {result:?}"
    );
    Ok(())
}

#[then("looking up the task reports not found")]
fn lookup_reports_not_found(world: &TaskCrudWorld) -> Result<(), eyre::Report> {
    let id = world.task_id()?;
    let lookup = run_async(world.service.show(&id));
    eyre::ensure!(
        matches!(lookup, Err(TaskServiceError::NotFound(_))),
        "expected NotFound, got {lookup:?}"
    );
    Ok(())
}
