//! When steps for task transition BDD scenarios.

use super::world::{TaskTransitionWorld, run_async};
use hive_core::task::domain::TaskStatus;
use rstest_bdd_macros::when;

#[when(r#"the task is transitioned to "{target}""#)]
fn transition_task(world: &mut TaskTransitionWorld, target: String) -> Result<(), eyre::Report> {
    let target_status = TaskStatus::try_from(target.as_str())
        .map_err(|err| eyre::eyre!("invalid target status in scenario: {err}"))?;

    let task = world
        .last_created_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created task in scenario world"))?;

    let result = run_async(world.service.transition_task(task.id(), target_status));
    if let Ok(ref updated) = result {
        world.last_created_task = Some(updated.clone());
    }
    world.last_transition_result = Some(result);
    Ok(())
}
