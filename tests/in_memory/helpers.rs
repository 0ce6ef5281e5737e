//! Shared fixtures for in-memory executor integration tests.

use crossboard::board::services::BoardService;
use crossboard::platform::adapters::memory::{ScriptedToolExecutor, StaticConnections};
use crossboard::platform::adapters::{
    AdapterRegistry, CardBoardAdapter, FlatListAdapter, HierarchyAdapter, TicketTrackerAdapter,
};
use crossboard::platform::domain::{PlatformKind, ToolResponse};
use mockable::DefaultClock;
use rstest::fixture;
use serde_json::json;
use std::sync::Arc;

/// Board service type used across the integration tests.
pub type TestService = BoardService<StaticConnections, DefaultClock>;

/// One scripted executor per platform plus the service over all four.
pub struct Fixture {
    pub service: TestService,
    pub tracker: Arc<ScriptedToolExecutor>,
    pub cards: Arc<ScriptedToolExecutor>,
    pub hierarchy: Arc<ScriptedToolExecutor>,
    pub flat: Arc<ScriptedToolExecutor>,
}

/// Provides a service wired to all four platforms over scripted executors.
#[fixture]
pub fn fixture() -> Fixture {
    let tracker = Arc::new(ScriptedToolExecutor::new());
    let cards = Arc::new(ScriptedToolExecutor::new());
    let hierarchy = Arc::new(ScriptedToolExecutor::new());
    let flat = Arc::new(ScriptedToolExecutor::new());
    let registry = AdapterRegistry::new()
        .with_adapter(Arc::new(TicketTrackerAdapter::new(Arc::clone(&tracker))))
        .with_adapter(Arc::new(CardBoardAdapter::new(Arc::clone(&cards))))
        .with_adapter(Arc::new(HierarchyAdapter::new(Arc::clone(&hierarchy))))
        .with_adapter(Arc::new(FlatListAdapter::new(Arc::clone(&flat))));
    let connections = StaticConnections::new(PlatformKind::ALL);
    let service = BoardService::new(
        Arc::new(registry),
        Arc::new(connections),
        Arc::new(DefaultClock),
    );
    Fixture {
        service,
        tracker,
        cards,
        hierarchy,
        flat,
    }
}

/// Scripts one listing per platform with one item each, covering all four
/// native label styles.
pub fn script_full_listings(fixture: &Fixture) {
    fixture.tracker.script(
        "list_issues",
        ToolResponse::ok(json!({
            "issues": [
                { "id": "TT-1", "summary": "Fix login", "project": "Platform", "status": "To Do" },
            ],
        })),
    );
    fixture.cards.script(
        "list_cards",
        ToolResponse::ok(json!({
            "cards": [{
                "id": "c-1",
                "name": "Polish empty states",
                "board_id": "b-9",
                "board_name": "Launch",
                "list_name": "In Progress",
            }],
        })),
    );
    fixture.hierarchy.script(
        "list_tasks",
        ToolResponse::ok(json!({
            "tasks": [
                { "id": "h-1", "name": "Review copy", "status": "Code Review", "project": "Website" },
            ],
        })),
    );
    fixture.flat.script(
        "list_tasks",
        ToolResponse::ok(json!({
            "tasks": [
                { "id": "t-1", "content": "Send invites", "project": "Offsite", "completed": true },
            ],
        })),
    );
}
