//! When steps for task list BDD scenarios.

use super::world::TaskListWorld;
use chrono::NaiveDate;
use cras::tasklist::domain::{TaskNumber, TaskStatus};
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when("task {number:usize} is marked done")]
fn mark_done(world: &mut TaskListWorld, number: usize) -> Result<(), eyre::Report> {
    let task_number = TaskNumber::new(number).wrap_err("task number")?;
    let result = world.service().mark(task_number, TaskStatus::Done);
    world.record(result);
    Ok(())
}

#[when("task {number:usize} is deleted")]
fn delete_task(world: &mut TaskListWorld, number: usize) -> Result<(), eyre::Report> {
    let task_number = TaskNumber::new(number).wrap_err("task number")?;
    let result = world.service().delete(task_number);
    world.record(result);
    Ok(())
}

#[when("the list is invalidated")]
fn invalidate(world: &mut TaskListWorld) {
    let result = world.service().invalidate();
    world.record(result);
}

#[when(r#""{text}" is appended"#)]
fn append(world: &mut TaskListWorld, text: String) {
    let result = world.service().append([text]);
    world.record(result);
}

#[when(r#"the day advances to "{day}""#)]
fn day_advances(world: &mut TaskListWorld, day: String) -> Result<(), eyre::Report> {
    world.today = NaiveDate::parse_from_str(&day, "%Y-%m-%d")
        .wrap_err_with(|| format!("parse scenario day '{day}'"))?;
    Ok(())
}
