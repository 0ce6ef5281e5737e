//! Unified task record and its platform-scoped key.

use crate::platform::domain::{
    CanonicalStatus, NativeItem, PlatformKind, Priority, normalize_label,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Item id used by synthetic fetch-failure tasks.
const FETCH_FAILURE_ID: &str = "fetch-failure";

/// True identity of a task on the unified board.
///
/// Platform item ids are unique only within their platform namespace; two
/// platforms may both report an item `"42"`. The `(platform, id)` pair is
/// the key everywhere in the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskKey {
    platform: PlatformKind,
    id: String,
}

impl TaskKey {
    /// Creates a key from a platform and its item id.
    #[must_use]
    pub fn new(platform: PlatformKind, id: impl Into<String>) -> Self {
        Self {
            platform,
            id: id.into(),
        }
    }

    /// Returns the owning platform.
    #[must_use]
    pub const fn platform(&self) -> PlatformKind {
        self.platform
    }

    /// Returns the platform-scoped item id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for TaskKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.platform, self.id)
    }
}

/// One work item on the unified board.
///
/// Tasks are rebuilt fresh on every aggregation pass and carry no identity
/// beyond their key. The only paths into a `Task` run through the status
/// normalizer, so `status` always holds one of the four canonical values and
/// raw platform labels never leak past construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    key: TaskKey,
    description: String,
    project: String,
    status: CanonicalStatus,
    due_date: String,
    assignee: Option<String>,
    priority: Option<Priority>,
    board_ref: Option<String>,
}

impl Task {
    /// Builds a task from a platform-reported raw item, normalizing its
    /// native status label.
    ///
    /// The board reference is retained only for the card board platform,
    /// which needs it later to resolve move targets.
    #[must_use]
    pub fn from_native(platform: PlatformKind, item: NativeItem) -> Self {
        let status = normalize_label(item.native_status());
        let board_ref = match platform {
            PlatformKind::CardBoard => item.board_ref().map(ToOwned::to_owned),
            _ => None,
        };
        Self {
            key: TaskKey::new(platform, item.id()),
            description: item.description().to_owned(),
            project: item.project().to_owned(),
            status,
            due_date: item.due_date().to_owned(),
            assignee: item.assignee().map(ToOwned::to_owned),
            priority: item.priority(),
            board_ref,
        }
    }

    /// Builds the synthetic task that stands in for a failed platform fetch,
    /// so the fault is visible on the board instead of silently shrinking it.
    #[must_use]
    pub fn fetch_failure(platform: PlatformKind, detail: impl fmt::Display) -> Self {
        Self {
            key: TaskKey::new(platform, FETCH_FAILURE_ID),
            description: format!("Failed to fetch tasks: {detail}"),
            project: platform.display_name().to_owned(),
            status: CanonicalStatus::Todo,
            due_date: String::new(),
            assignee: None,
            priority: None,
            board_ref: None,
        }
    }

    /// Returns the task key.
    #[must_use]
    pub const fn key(&self) -> &TaskKey {
        &self.key
    }

    /// Returns the owning platform.
    #[must_use]
    pub const fn platform(&self) -> PlatformKind {
        self.key.platform()
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the containing project name.
    #[must_use]
    pub fn project(&self) -> &str {
        &self.project
    }

    /// Returns the canonical lifecycle status.
    #[must_use]
    pub const fn status(&self) -> CanonicalStatus {
        self.status
    }

    /// Returns the due date label, empty when the platform reported none.
    #[must_use]
    pub fn due_date(&self) -> &str {
        &self.due_date
    }

    /// Returns the assignee, if any.
    #[must_use]
    pub fn assignee(&self) -> Option<&str> {
        self.assignee.as_deref()
    }

    /// Returns the priority, if any.
    #[must_use]
    pub const fn priority(&self) -> Option<Priority> {
        self.priority
    }

    /// Returns the originating board reference, if any.
    #[must_use]
    pub fn board_ref(&self) -> Option<&str> {
        self.board_ref.as_deref()
    }

    /// Moves the task to a new canonical status.
    ///
    /// Restricted to the board store, the collection's only writer.
    pub(crate) const fn move_to(&mut self, status: CanonicalStatus) {
        self.status = status;
    }
}
