//! Given steps for task transition BDD scenarios.

use super::world::{TaskTransitionWorld, run_async};
use chrono::{Days, Utc};
use eyre::WrapErr;
use hive_core::task::{
    domain::{ProjectId, TaskStatus},
    ports::TaskRepository,
    services::CreateTaskRequest,
};
use mockable::DefaultClock;
use rstest_bdd_macros::given;

#[given(r#"a stored task "{title}" with status "{status}""#)]
fn stored_task_with_status(
    world: &mut TaskTransitionWorld,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    let target = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;

    let created = run_async(
        world
            .service
            .create_task(CreateTaskRequest::new(ProjectId::new(), title)),
    )
    .wrap_err("create task for transition scenario")?;

    // Walk the state machine to the requested starting point.
    let setup_path: &[TaskStatus] = match target {
        TaskStatus::ToDo => &[],
        TaskStatus::InProgress => &[TaskStatus::InProgress],
        TaskStatus::Completed => &[TaskStatus::InProgress, TaskStatus::Completed],
        TaskStatus::Cancelled => &[TaskStatus::Cancelled],
    };
    let mut task = created;
    for step in setup_path {
        task = run_async(world.service.transition_task(task.id(), *step))
            .wrap_err("walk task to scenario starting status")?;
    }

    world.last_created_task = Some(task);
    Ok(())
}

#[given("the task fell due yesterday")]
fn task_fell_due_yesterday(world: &mut TaskTransitionWorld) -> Result<(), eyre::Report> {
    let mut task = world
        .last_created_task
        .clone()
        .ok_or_else(|| eyre::eyre!("missing created task in scenario world"))?;

    let yesterday = Utc::now()
        .date_naive()
        .checked_sub_days(Days::new(1))
        .ok_or_else(|| eyre::eyre!("date arithmetic underflow"))?;
    task.reschedule(Some(yesterday), &DefaultClock);

    run_async(world.repository.update(&task)).wrap_err("persist rescheduled task")?;
    world.last_created_task = Some(task);
    Ok(())
}
