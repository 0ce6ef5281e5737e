//! Read-side filtering of the unified task collection.

use super::Task;
use crate::platform::domain::PlatformKind;

/// Projection criteria for the board view.
///
/// Filtering is a pure read-side concern: a filter never mutates the stored
/// collection. The text criterion is a case-insensitive substring match on a
/// task's description or project; the platform criterion is exact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardFilter {
    platform: Option<PlatformKind>,
    text: Option<String>,
}

impl BoardFilter {
    /// Creates a filter matching every task.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            platform: None,
            text: None,
        }
    }

    /// Restricts the view to one platform.
    #[must_use]
    pub const fn with_platform(mut self, platform: PlatformKind) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Restricts the view to tasks whose description or project contains the
    /// given text, case-insensitively.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Returns the platform criterion, if any.
    #[must_use]
    pub const fn platform(&self) -> Option<PlatformKind> {
        self.platform
    }

    /// Returns the text criterion, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Returns true when the task satisfies every criterion.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        if let Some(platform) = self.platform
            && task.platform() != platform
        {
            return false;
        }
        let Some(text) = self.text.as_deref() else {
            return true;
        };
        let needle = text.to_lowercase();
        task.description().to_lowercase().contains(&needle)
            || task.project().to_lowercase().contains(&needle)
    }
}
