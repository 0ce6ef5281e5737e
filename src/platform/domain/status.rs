//! Canonical lifecycle states and native-label normalization.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// One of the four unified board columns.
///
/// The derived ordering is board-column position (left to right), not
/// business priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalStatus {
    /// Work not yet started.
    Todo,
    /// Work underway.
    InProgress,
    /// Work awaiting review or verification.
    Review,
    /// Work finished.
    Done,
}

impl CanonicalStatus {
    /// All statuses in board-column order.
    pub const COLUMNS: [Self; 4] = [Self::Todo, Self::InProgress, Self::Review, Self::Done];

    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::Review => "review",
            Self::Done => "done",
        }
    }

    /// Returns the zero-based column position on the board.
    #[must_use]
    pub fn column_index(self) -> usize {
        Self::COLUMNS.iter().position(|s| *s == self).unwrap_or(0)
    }
}

impl TryFrom<&str> for CanonicalStatus {
    type Error = ParseStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "todo" => Ok(Self::Todo),
            "in_progress" => Ok(Self::InProgress),
            "review" => Ok(Self::Review),
            "done" => Ok(Self::Done),
            _ => Err(ParseStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for CanonicalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned while parsing canonical statuses from their string form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown canonical status: {0}")]
pub struct ParseStatusError(pub String);

/// Keywords that classify a native label as [`CanonicalStatus::Done`].
const DONE_KEYWORDS: [&str; 4] = ["done", "complete", "closed", "resolved"];

/// Keywords that classify a native label as [`CanonicalStatus::InProgress`].
const IN_PROGRESS_KEYWORDS: [&str; 5] = ["progress", "doing", "working", "active", "running"];

/// Keywords that classify a native label as [`CanonicalStatus::Review`].
const REVIEW_KEYWORDS: [&str; 4] = ["review", "testing", "qa", "verification"];

/// Keywords that classify a native label as [`CanonicalStatus::Todo`].
const TODO_KEYWORDS: [&str; 5] = ["to do", "todo", "open", "new", "backlog"];

/// Keyword sets in match-priority order. The order is load-bearing: done
/// wins over in-progress, in-progress over review, review over todo.
const KEYWORD_SETS: [(&[&str], CanonicalStatus); 4] = [
    (&DONE_KEYWORDS, CanonicalStatus::Done),
    (&IN_PROGRESS_KEYWORDS, CanonicalStatus::InProgress),
    (&REVIEW_KEYWORDS, CanonicalStatus::Review),
    (&TODO_KEYWORDS, CanonicalStatus::Todo),
];

/// Maps a platform-native status label onto a canonical status.
///
/// The label is lower-cased and tested for substring membership against the
/// four keyword sets in priority order (done, in-progress, review, todo),
/// first match wins, so a label like `"Code Review - In Progress"` resolves
/// to `InProgress`. A label matching no set defaults to `Todo`.
///
/// Note that `"Reopened"` classifies as `Todo` via the `open` keyword.
/// Whether that is the right reading of such labels is a product policy
/// question; the current classification is intentional.
#[must_use]
pub fn normalize_label(native_label: &str) -> CanonicalStatus {
    let lowered = native_label.to_lowercase();
    KEYWORD_SETS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| lowered.contains(keyword)))
        .map_or(CanonicalStatus::Todo, |(_, status)| *status)
}
