//! Given steps for task CRUD BDD scenarios.

use super::world::{TaskCrudWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use tasktrack::task::services::CreateTaskRequest;

#[given(r#"a task titled "{title}" described as "{description}" has been created"#)]
fn task_created(
    world: &mut TaskCrudWorld,
    title: String,
    description: String,
) -> Result<(), eyre::Report> {
    let created = run_async(
        world
            .service
            .create(CreateTaskRequest::new(title, description)),
    )
    .wrap_err("create task in scenario setup")?;
    world.last_task = Some(created);
    Ok(())
}
