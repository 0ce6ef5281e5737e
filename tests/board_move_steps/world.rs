//! Shared world state for board move BDD scenarios.

use std::sync::Arc;

use crossboard::board::domain::TaskKey;
use crossboard::board::services::{BoardService, MoveError};
use crossboard::platform::adapters::memory::{ScriptedToolExecutor, StaticConnections};
use crossboard::platform::adapters::{AdapterRegistry, CardBoardAdapter, TicketTrackerAdapter};
use crossboard::platform::domain::{CanonicalStatus, PlatformKind};
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestBoardService = BoardService<StaticConnections, DefaultClock>;

/// Scenario world for board move behaviour tests.
pub struct BoardWorld {
    pub service: TestBoardService,
    pub tracker: Arc<ScriptedToolExecutor>,
    pub cards: Arc<ScriptedToolExecutor>,
    pub active_task: Option<TaskKey>,
    pub last_move: Option<Result<(), MoveError>>,
}

impl BoardWorld {
    /// Creates a world over scripted tracker and card board executors.
    #[must_use]
    pub fn new() -> Self {
        let tracker = Arc::new(ScriptedToolExecutor::new());
        let cards = Arc::new(ScriptedToolExecutor::new());
        let registry = AdapterRegistry::new()
            .with_adapter(Arc::new(TicketTrackerAdapter::new(Arc::clone(&tracker))))
            .with_adapter(Arc::new(CardBoardAdapter::new(Arc::clone(&cards))));
        let connections =
            StaticConnections::new([PlatformKind::TicketTracker, PlatformKind::CardBoard]);
        let service = BoardService::new(
            Arc::new(registry),
            Arc::new(connections),
            Arc::new(DefaultClock),
        );
        Self {
            service,
            tracker,
            cards,
            active_task: None,
            last_move: None,
        }
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Parses a spoken column name into its canonical status.
pub fn parse_column(column: &str) -> Result<CanonicalStatus, eyre::Report> {
    match column.trim().to_ascii_lowercase().as_str() {
        "todo" => Ok(CanonicalStatus::Todo),
        "in progress" => Ok(CanonicalStatus::InProgress),
        "review" => Ok(CanonicalStatus::Review),
        "done" => Ok(CanonicalStatus::Done),
        other => Err(eyre::eyre!("unknown board column: {other}")),
    }
}
