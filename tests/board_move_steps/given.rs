//! Given steps for board move BDD scenarios.

use super::world::{BoardWorld, run_async};
use crossboard::board::domain::TaskKey;
use crossboard::platform::domain::{PlatformKind, ToolResponse};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use serde_json::json;

#[given(r#"a board showing ticket "{ticket_id}" in the todo column"#)]
fn board_with_ticket(world: &mut BoardWorld, ticket_id: String) -> Result<(), eyre::Report> {
    world.tracker.script(
        "list_issues",
        ToolResponse::ok(json!({
            "issues": [
                {
                    "id": ticket_id.clone(),
                    "summary": "Fix login",
                    "project": "Platform",
                    "status": "To Do",
                },
            ],
        })),
    );
    world.cards.script("list_cards", ToolResponse::ok(json!({ "cards": [] })));
    run_async(world.service.refresh()).wrap_err("seed the board from the tracker")?;

    world.active_task = Some(TaskKey::new(PlatformKind::TicketTracker, ticket_id));
    Ok(())
}

#[given("the tracker will accept the next transition")]
fn tracker_accepts(world: &mut BoardWorld) {
    world
        .tracker
        .script("transition_issue", ToolResponse::ok(json!({})));
}

#[given("the tracker will reject the next transition")]
fn tracker_rejects(world: &mut BoardWorld) {
    world.tracker.script(
        "transition_issue",
        ToolResponse::failure("workflow forbids this transition"),
    );
}

#[given(r#"a board showing card "{card_id}" on board "{board_id}" in the doing column"#)]
fn board_with_card(
    world: &mut BoardWorld,
    card_id: String,
    board_id: String,
) -> Result<(), eyre::Report> {
    world
        .tracker
        .script("list_issues", ToolResponse::ok(json!({ "issues": [] })));
    world.cards.script(
        "list_cards",
        ToolResponse::ok(json!({
            "cards": [{
                "id": card_id.clone(),
                "name": "Polish empty states",
                "board_id": board_id,
                "board_name": "Launch",
                "list_name": "Doing",
            }],
        })),
    );
    run_async(world.service.refresh()).wrap_err("seed the board from the card board")?;

    world.active_task = Some(TaskKey::new(PlatformKind::CardBoard, card_id));
    Ok(())
}

#[given("the card board has lists named Backlog, Doing, QA and Shipped")]
fn card_board_lists(world: &mut BoardWorld) {
    world.cards.script(
        "list_board_lists",
        ToolResponse::ok(json!({
            "lists": [
                { "id": "l-1", "name": "Backlog" },
                { "id": "l-2", "name": "Doing" },
                { "id": "l-3", "name": "QA" },
                { "id": "l-4", "name": "Shipped" },
            ],
        })),
    );
}
