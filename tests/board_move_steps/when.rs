//! When steps for board move BDD scenarios.

use super::world::{BoardWorld, parse_column, run_async};
use rstest_bdd_macros::when;

#[when(r#"the task is dragged to the "{column}" column"#)]
fn drag_task(world: &mut BoardWorld, column: String) -> Result<(), eyre::Report> {
    let key = world
        .active_task
        .clone()
        .ok_or_else(|| eyre::eyre!("missing active task in scenario world"))?;
    let target = parse_column(&column)?;

    world.last_move = Some(run_async(world.service.move_task(&key, target)));
    Ok(())
}
