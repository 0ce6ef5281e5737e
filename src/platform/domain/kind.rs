//! Platform identification for the unified board.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Closed enumeration of the platforms the board aggregates.
///
/// Each platform adapter owns exactly one kind; dispatch over platforms is a
/// lookup keyed on this enum rather than string comparison at call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformKind {
    /// Issue-centric ticket tracker (projects and transitions).
    TicketTracker,
    /// Card board with named lists per board.
    CardBoard,
    /// Folder-based hierarchical task tool (teams, spaces, folders, lists).
    HierarchicalTool,
    /// Flat task list with plain projects.
    FlatList,
}

impl PlatformKind {
    /// All platform kinds in presentation order.
    pub const ALL: [Self; 4] = [
        Self::TicketTracker,
        Self::CardBoard,
        Self::HierarchicalTool,
        Self::FlatList,
    ];

    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TicketTracker => "ticket_tracker",
            Self::CardBoard => "card_board",
            Self::HierarchicalTool => "hierarchical_tool",
            Self::FlatList => "flat_list",
        }
    }

    /// Returns a human-readable platform name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::TicketTracker => "Ticket Tracker",
            Self::CardBoard => "Card Board",
            Self::HierarchicalTool => "Hierarchical Tool",
            Self::FlatList => "Flat List",
        }
    }
}

impl TryFrom<&str> for PlatformKind {
    type Error = ParsePlatformKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "ticket_tracker" => Ok(Self::TicketTracker),
            "card_board" => Ok(Self::CardBoard),
            "hierarchical_tool" => Ok(Self::HierarchicalTool),
            "flat_list" => Ok(Self::FlatList),
            _ => Err(ParsePlatformKindError(value.to_owned())),
        }
    }
}

impl fmt::Display for PlatformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned while parsing platform kinds from their string form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown platform kind: {0}")]
pub struct ParsePlatformKindError(pub String);
