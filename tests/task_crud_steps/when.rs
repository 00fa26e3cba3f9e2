//! When steps for task CRUD BDD scenarios.

use super::world::{TaskCrudWorld, run_async};
use rstest_bdd_macros::when;
use tasktrack::task::services::{CreateTaskRequest, UpdateTaskRequest};

#[when(r#"a task titled "{title}" described as "{description}" is submitted"#)]
fn task_submitted(world: &mut TaskCrudWorld, title: String, description: String) {
    let result = run_async(
        world
            .service
            .create(CreateTaskRequest::new(title, description)),
    );
    world.record(result.map(Some));
}

#[when(
    r#"the task is updated to title "{title}" description "{description}" status "{status}""#
)]
fn task_updated(
    world: &mut TaskCrudWorld,
    title: String,
    description: String,
    status: String,
) -> Result<(), eyre::Report> {
    let id = world.task_id()?;
    let result = run_async(
        world
            .service
            .update(&id, UpdateTaskRequest::new(title, description, status)),
    );
    world.record(result.map(Some));
    Ok(())
}

#[when("the task is deleted")]
fn task_deleted(world: &mut TaskCrudWorld) -> Result<(), eyre::Report> {
    let id = world.task_id()?;
    let result = run_async(world.service.delete(&id));
    world.record(result.map(|()| None));
    Ok(())
}

#[when(r#"the task with id "{id}" is deleted"#)]
fn task_with_id_deleted(world: &mut TaskCrudWorld, id: String) {
    let result = run_async(world.service.delete(&id));
    world.record(result.map(|()| None));
}
