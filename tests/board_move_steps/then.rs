//! Then steps for board move BDD scenarios.

use super::world::{BoardWorld, parse_column};
use rstest_bdd_macros::then;

#[then(r#"the task sits in the "{column}" column"#)]
fn task_sits_in_column(world: &mut BoardWorld, column: String) -> Result<(), eyre::Report> {
    let key = world
        .active_task
        .clone()
        .ok_or_else(|| eyre::eyre!("missing active task in scenario world"))?;
    let expected = parse_column(&column)?;
    let task = world
        .service
        .task(&key)
        .map_err(|err| eyre::eyre!("board lookup failed: {err}"))?
        .ok_or_else(|| eyre::eyre!("task {key} is not on the board"))?;

    if task.status() != expected {
        return Err(eyre::eyre!(
            "expected {key} in the {expected} column, found {}",
            task.status()
        ));
    }
    Ok(())
}

#[then("the move is reported as failed")]
fn move_reported_failed(world: &BoardWorld) -> Result<(), eyre::Report> {
    let outcome = world
        .last_move
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing move outcome in scenario world"))?;
    if outcome.is_ok() {
        return Err(eyre::eyre!("expected the move to fail, but it succeeded"));
    }
    Ok(())
}
