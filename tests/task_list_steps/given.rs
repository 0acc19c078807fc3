//! Given steps for task list BDD scenarios.

use super::world::TaskListWorld;
use chrono::NaiveDate;
use cras::tasklist::domain::DueDate;
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"today is "{day}""#)]
fn today_is(world: &mut TaskListWorld, day: String) -> Result<(), eyre::Report> {
    world.today = NaiveDate::parse_from_str(&day, "%Y-%m-%d")
        .wrap_err_with(|| format!("parse scenario day '{day}'"))?;
    Ok(())
}

#[given(r#"a new list with tasks "{first}" and "{second}""#)]
fn new_list_with_tasks(
    world: &mut TaskListWorld,
    first: String,
    second: String,
) -> Result<(), eyre::Report> {
    world
        .service()
        .create([first, second], None)
        .wrap_err("create list for scenario")?;
    Ok(())
}

#[given(r#"a list due "{due}" with task "{text}""#)]
fn list_due_with_task(
    world: &mut TaskListWorld,
    due: String,
    text: String,
) -> Result<(), eyre::Report> {
    let due_date = DueDate::parse(&due).wrap_err("parse scenario due date")?;
    world
        .service()
        .create([text], Some(due_date))
        .wrap_err("create list for scenario")?;
    Ok(())
}
