//! Aggregation, column view, and optimistic move flows over all four
//! platforms.

use super::helpers::{Fixture, fixture, script_full_listings};
use crossboard::board::domain::{BoardFilter, TaskKey};
use crossboard::board::services::MoveError;
use crossboard::platform::domain::{CanonicalStatus, PlatformKind, ToolResponse};
use rstest::rstest;
use serde_json::json;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn four_platforms_land_in_their_four_columns(fixture: Fixture) {
    script_full_listings(&fixture);

    let report = fixture.service.refresh().await.expect("refresh");
    assert!(report.failures().is_empty());

    let columns = fixture.service.columns().expect("columns");
    assert_eq!(columns.task_count(), 4);
    assert_eq!(
        columns
            .column(CanonicalStatus::Todo)
            .first()
            .map(|t| t.key().id()),
        Some("TT-1")
    );
    assert_eq!(
        columns
            .column(CanonicalStatus::InProgress)
            .first()
            .map(|t| t.key().id()),
        Some("c-1")
    );
    assert_eq!(
        columns
            .column(CanonicalStatus::Review)
            .first()
            .map(|t| t.key().id()),
        Some("h-1")
    );
    assert_eq!(
        columns
            .column(CanonicalStatus::Done)
            .first()
            .map(|t| t.key().id()),
        Some("t-1")
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_timed_out_platform_shrinks_the_board_without_hiding_the_rest(fixture: Fixture) {
    fixture.cards.script(
        "list_cards",
        ToolResponse::ok(json!({
            "cards": [
                { "id": "c-1", "name": "a", "board_id": "b", "board_name": "L", "list_name": "Doing" },
                { "id": "c-2", "name": "b", "board_id": "b", "board_name": "L", "list_name": "Doing" },
                { "id": "c-3", "name": "c", "board_id": "b", "board_name": "L", "list_name": "Doing" },
            ],
        })),
    );
    fixture
        .flat
        .script("list_tasks", ToolResponse::failure("gateway timeout"));
    // The tracker and the hierarchy are left unscripted: transport failures.

    let report = fixture.service.refresh().await.expect("refresh");

    // Three card-board tasks plus the ticket tracker's synthetic error
    // entry; the flat list and hierarchy contribute nothing but a failure
    // record each.
    assert_eq!(report.tasks().len(), 4);
    assert_eq!(report.failures().len(), 3);
    let failed: Vec<PlatformKind> = report.failures().iter().map(|f| f.platform()).collect();
    assert!(failed.contains(&PlatformKind::FlatList));
    let synthetic: Vec<_> = report
        .tasks()
        .iter()
        .filter(|task| task.key().id() == "fetch-failure")
        .collect();
    assert_eq!(synthetic.len(), 1);
    assert_eq!(
        synthetic.first().map(|t| t.platform()),
        Some(PlatformKind::TicketTracker)
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_rejected_move_restores_the_board_exactly(fixture: Fixture) {
    script_full_listings(&fixture);
    fixture.service.refresh().await.expect("refresh");
    fixture.hierarchy.script(
        "update_task_status",
        ToolResponse::failure("permission denied"),
    );
    let key = TaskKey::new(PlatformKind::HierarchicalTool, "h-1");

    let error = fixture
        .service
        .move_task(&key, CanonicalStatus::Done)
        .await
        .expect_err("move is rejected");

    assert!(matches!(error, MoveError::Adapter(_)));
    assert_eq!(
        fixture
            .service
            .task(&key)
            .expect("lookup")
            .map(|t| t.status()),
        Some(CanonicalStatus::Review)
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn filtered_views_narrow_by_platform_and_text(fixture: Fixture) {
    script_full_listings(&fixture);
    fixture.service.refresh().await.expect("refresh");

    let by_platform = fixture
        .service
        .filtered_view(&BoardFilter::all().with_platform(PlatformKind::CardBoard))
        .expect("view");
    assert_eq!(by_platform.len(), 1);

    let by_text = fixture
        .service
        .filtered_view(&BoardFilter::all().with_text("invites"))
        .expect("view");
    assert_eq!(by_text.len(), 1);
    assert_eq!(by_text.first().map(|t| t.key().id()), Some("t-1"));

    let by_project_text = fixture
        .service
        .filtered_view(&BoardFilter::all().with_text("launch"))
        .expect("view");
    assert_eq!(by_project_text.len(), 1);
    assert_eq!(by_project_text.first().map(|t| t.key().id()), Some("c-1"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn moves_translate_into_the_platforms_native_operations(fixture: Fixture) {
    script_full_listings(&fixture);
    fixture.service.refresh().await.expect("refresh");
    fixture.cards.script(
        "list_board_lists",
        ToolResponse::ok(json!({
            "lists": [
                { "id": "l-1", "name": "Backlog" },
                { "id": "l-4", "name": "Done" },
            ],
        })),
    );
    fixture.cards.script("move_card", ToolResponse::ok(json!({})));
    let key = TaskKey::new(PlatformKind::CardBoard, "c-1");

    fixture
        .service
        .move_task(&key, CanonicalStatus::Done)
        .await
        .expect("move succeeds");

    let tools = fixture.cards.invoked_tools();
    assert_eq!(tools, vec!["list_cards", "list_board_lists", "move_card"]);
}
