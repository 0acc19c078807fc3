//! Then steps for task list BDD scenarios.

use super::world::TaskListWorld;
use cras::render::{Renderer, short_summary};
use cras::tasklist::{domain::TaskListError, services::TaskListServiceError};
use rstest_bdd_macros::then;

#[then(r#"the summary is "{expected}""#)]
fn summary_is(world: &TaskListWorld, expected: String) -> Result<(), eyre::Report> {
    let list = world
        .service()
        .view()
        .map_err(|err| eyre::eyre!("view failed: {err}"))?;
    let summary = short_summary(list.summary());
    if summary != expected {
        return Err(eyre::eyre!("expected summary {expected}, found {summary}"));
    }
    Ok(())
}

#[then(r#"task {number:usize} reads "{expected}""#)]
fn task_reads(world: &TaskListWorld, number: usize, expected: String) -> Result<(), eyre::Report> {
    let list = world
        .service()
        .view()
        .map_err(|err| eyre::eyre!("view failed: {err}"))?;
    let task = list
        .get_task(number.saturating_sub(1))
        .map_err(|err| eyre::eyre!("task lookup failed: {err}"))?;
    let renderer = Renderer::new(false);
    let line = format!(
        "{} {}",
        renderer.status_label(task.status()),
        task.description()
    );
    if line != expected {
        return Err(eyre::eyre!("expected task '{expected}', found '{line}'"));
    }
    Ok(())
}

#[then("the operation fails because the list is overdue")]
fn fails_overdue(world: &TaskListWorld) -> Result<(), eyre::Report> {
    match &world.last_error {
        Some(TaskListServiceError::Overdue { .. }) => Ok(()),
        other => Err(eyre::eyre!("expected overdue error, got {other:?}")),
    }
}

#[then("the operation fails because task {number:usize} does not exist")]
fn fails_missing_task(world: &TaskListWorld, number: usize) -> Result<(), eyre::Report> {
    match &world.last_error {
        Some(TaskListServiceError::Domain(TaskListError::TaskNotFound(missing)))
            if *missing == number =>
        {
            Ok(())
        }
        other => Err(eyre::eyre!("expected missing task {number}, got {other:?}")),
    }
}
