//! Cascading target resolution feeding task creation.

use super::helpers::{Fixture, fixture, script_full_listings};
use crossboard::platform::domain::{PlatformKind, ResourceKind, ToolResponse};
use crossboard::platform::ports::NewItemSpec;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_resolved_hierarchy_location_feeds_creation(fixture: Fixture) {
    fixture.hierarchy.script(
        "list_teams",
        ToolResponse::ok(json!({ "teams": [{ "id": "t-1", "name": "Core" }] })),
    );
    fixture.hierarchy.script(
        "list_spaces",
        ToolResponse::ok(json!({ "spaces": [{ "id": "s-1", "name": "Product" }] })),
    );
    fixture.hierarchy.script(
        "list_folders",
        ToolResponse::ok(json!({ "folders": [] })),
    );
    fixture.hierarchy.script(
        "list_folderless_lists",
        ToolResponse::ok(json!({ "lists": [{ "id": "l-1", "name": "Inbox" }] })),
    );

    let mut resolver = fixture
        .service
        .resolver_for(PlatformKind::HierarchicalTool)
        .expect("hierarchy resolver");
    resolver.load_roots().await;
    resolver.select(0, "t-1").await.expect("team");
    resolver.select(1, "s-1").await.expect("space");
    // An empty folder fetch still leaves the synthetic no-folder option.
    assert_eq!(resolver.options(2).len(), 1);
    resolver.select(2, "s-1").await.expect("no folder");
    resolver.select(3, "l-1").await.expect("list");
    let location = resolver.resolved_location().expect("full chain");
    assert_eq!(location.leaf().kind(), ResourceKind::List);

    fixture
        .hierarchy
        .script("create_task", ToolResponse::ok(json!({ "id": "h-2" })));
    script_full_listings(&fixture);
    let spec = NewItemSpec::new("Draft launch email")
        .expect("valid title")
        .with_description("cover the beta cohort")
        .with_due_date("2026-08-20");

    let report = fixture
        .service
        .create_task(PlatformKind::HierarchicalTool, &location, &spec)
        .await
        .expect("create succeeds");

    assert_eq!(report.tasks().len(), 4);
    let create_call = fixture
        .hierarchy
        .invocations()
        .into_iter()
        .find(|(tool, _)| tool == "create_task")
        .expect("create invoked");
    assert_eq!(
        create_call.1,
        json!({
            "list_id": "l-1",
            "name": "Draft launch email",
            "description": "cover the beta cohort",
            "due_date": "2026-08-20",
        })
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_failed_level_fetch_stops_the_cascade_until_reselection(fixture: Fixture) {
    fixture.cards.script(
        "list_boards",
        ToolResponse::ok(json!({ "boards": [{ "id": "b-1", "name": "Launch" }] })),
    );
    // The first lists fetch fails; the second, after re-selection, works.
    fixture
        .cards
        .script("list_board_lists", ToolResponse::failure("board archived"));
    fixture.cards.script(
        "list_board_lists",
        ToolResponse::ok(json!({ "lists": [{ "id": "l-1", "name": "Doing" }] })),
    );

    let mut resolver = fixture
        .service
        .resolver_for(PlatformKind::CardBoard)
        .expect("card board resolver");
    resolver.load_roots().await;

    resolver.select(0, "b-1").await.expect("board");
    assert!(resolver.options(1).is_empty());
    assert!(resolver.resolved_location().is_none());

    resolver.select(0, "b-1").await.expect("board again");
    assert_eq!(resolver.options(1).len(), 1);
}
