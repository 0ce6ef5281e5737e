//! Raw work items as reported by a platform adapter.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Business priority carried by some platforms.
///
/// Optional on a task; native payloads with unrecognised priority values
/// simply report none rather than failing the whole item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Low urgency.
    Low,
    /// Default urgency.
    Normal,
    /// High urgency.
    High,
    /// Highest urgency.
    Urgent,
}

impl Priority {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Normal => "normal",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }

    /// Parses a native priority label leniently.
    ///
    /// Returns `None` for labels no platform maps cleanly, instead of
    /// erroring: priority is advisory metadata, not part of the lifecycle.
    #[must_use]
    pub fn from_native(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "low" | "lowest" | "minor" | "trivial" | "4" => Some(Self::Low),
            "normal" | "medium" | "default" | "3" => Some(Self::Normal),
            "high" | "major" | "2" => Some(Self::High),
            "urgent" | "highest" | "critical" | "blocker" | "1" => Some(Self::Urgent),
            _ => None,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A work item exactly as one platform reports it, prior to normalization.
///
/// `native_status` still carries the platform's own label; it is translated
/// into a canonical status when the aggregator builds the unified task
/// record. `board_ref` is populated only by the card board adapter, which
/// needs the originating board id to resolve move targets later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeItem {
    id: String,
    description: String,
    project: String,
    native_status: String,
    due_date: String,
    assignee: Option<String>,
    priority: Option<Priority>,
    board_ref: Option<String>,
}

impl NativeItem {
    /// Creates an item with the fields every platform reports.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        project: impl Into<String>,
        native_status: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            project: project.into(),
            native_status: native_status.into(),
            due_date: String::new(),
            assignee: None,
            priority: None,
            board_ref: None,
        }
    }

    /// Sets the due date label.
    #[must_use]
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = due_date.into();
        self
    }

    /// Sets the assignee.
    #[must_use]
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the originating board reference.
    #[must_use]
    pub fn with_board_ref(mut self, board_ref: impl Into<String>) -> Self {
        self.board_ref = Some(board_ref.into());
        self
    }

    /// Returns the platform-scoped item identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the item description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the containing project name.
    #[must_use]
    pub fn project(&self) -> &str {
        &self.project
    }

    /// Returns the platform-native status label.
    #[must_use]
    pub fn native_status(&self) -> &str {
        &self.native_status
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
}
