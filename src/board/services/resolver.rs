//! Cascading resolution of a platform's creation-target hierarchy.

use crate::platform::domain::{
    CreateLocation, PlatformKind, ResourceKind, ResourceNode, location_chain,
};
use crate::platform::ports::PlatformAdapter;
use std::sync::Arc;
use thiserror::Error;

/// Result type for resolver operations.
pub type ResolverResult<T> = Result<T, ResolverError>;

/// One level of the cascade: its options, selection, and loading flag.
#[derive(Debug, Clone)]
pub struct ResolverLevel {
    kind: ResourceKind,
    options: Vec<ResourceNode>,
    selected: Option<ResourceNode>,
    loading: bool,
}

impl ResolverLevel {
    const fn new(kind: ResourceKind) -> Self {
        Self {
            kind,
            options: Vec::new(),
            selected: None,
            loading: false,
        }
    }

    fn clear(&mut self) {
        self.options.clear();
        self.selected = None;
        self.loading = false;
    }

    /// Returns the hierarchy level this entry selects.
    #[must_use]
    pub const fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Returns the fetched options for this level.
    #[must_use]
    pub fn options(&self) -> &[ResourceNode] {
        &self.options
    }

    /// Returns the current selection, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<&ResourceNode> {
        self.selected.as_ref()
    }

    /// Returns true while this level's options are being fetched.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }
}

/// Step-by-step resolver for one platform's creation-target hierarchy.
///
/// Each level's fetch is gated strictly on the previous level's selection:
/// selecting a value triggers the next level's fetch, and re-selecting at
/// any level first invalidates every descendant's options and selection.
/// A failed fetch leaves its level empty and stops the cascade, with no retry
/// no fallback; the user re-triggers it by re-selecting the parent.
///
/// The resolver is driven by UI events one call at a time and is therefore
/// `&mut self` throughout; it is not meant to be shared across tasks.
pub struct ResourceResolver {
    adapter: Arc<dyn PlatformAdapter>,
    levels: Vec<ResolverLevel>,
}

impl ResourceResolver {
    /// Creates a resolver for the adapter's platform hierarchy.
    #[must_use]
    pub fn new(adapter: Arc<dyn PlatformAdapter>) -> Self {
        let levels = location_chain(adapter.kind())
            .iter()
            .map(|kind| ResolverLevel::new(*kind))
            .collect();
        Self { adapter, levels }
    }

    /// Returns the platform this resolver targets.
    #[must_use]
    pub fn platform(&self) -> PlatformKind {
        self.adapter.kind()
    }

    /// Returns every level for rendering cascading selectors.
    #[must_use]
    pub fn levels(&self) -> &[ResolverLevel] {
        &self.levels
    }

    /// Returns one level's fetched options, empty for unknown levels.
    #[must_use]
    pub fn options(&self, level: usize) -> &[ResourceNode] {
        self.levels.get(level).map_or(&[], ResolverLevel::options)
    }

    /// Returns one level's selection, if any.
    #[must_use]
    pub fn selected(&self, level: usize) -> Option<&ResourceNode> {
        self.levels.get(level).and_then(ResolverLevel::selected)
    }

    /// Returns one level's loading flag.
    #[must_use]
    pub fn is_loading(&self, level: usize) -> bool {
        self.levels
            .get(level)
            .is_some_and(ResolverLevel::is_loading)
    }

    /// Clears the cascade and fetches the root level's options.
    pub async fn load_roots(&mut self) {
        for level in &mut self.levels {
            level.clear();
        }
        self.fetch_level(0).await;
    }

    /// Records a selection and advances the cascade.
    ///
    /// Every level below the selection is invalidated first; the next
    /// level's fetch then runs, gated on this selection.
    ///
    /// # Errors
    ///
    /// Returns [`ResolverError`] when the level does not exist, its parent
    /// has no selection yet, or the option id is not among the fetched
    /// options.
    pub async fn select(&mut self, level: usize, option_id: &str) -> ResolverResult<()> {
        if level > 0 {
            let parent_selected = self
                .levels
                .get(level - 1)
                .ok_or(ResolverError::UnknownLevel(level))?
                .selected
                .is_some();
            if !parent_selected {
                return Err(ResolverError::ParentNotSelected(level));
            }
        }
        let entry = self
            .levels
            .get_mut(level)
            .ok_or(ResolverError::UnknownLevel(level))?;
        let option = entry
            .options
            .iter()
            .find(|node| node.id() == option_id)
            .cloned()
            .ok_or_else(|| ResolverError::UnknownOption {
                level,
                option_id: option_id.to_owned(),
            })?;
        entry.selected = Some(option);

        for descendant in self.levels.iter_mut().skip(level + 1) {
            descendant.clear();
        }
        if level + 1 < self.levels.len() {
            self.fetch_level(level + 1).await;
        }
        Ok(())
    }

    /// Returns the fully resolved location once every level is selected.
    #[must_use]
    pub fn resolved_location(&self) -> Option<CreateLocation> {
        let nodes: Option<Vec<ResourceNode>> = self
            .levels
            .iter()
            .map(|level| level.selected.clone())
            .collect();
        CreateLocation::new(nodes?).ok()
    }

    /// Fetches one level's options from its parent selection.
    async fn fetch_level(&mut self, index: usize) {
        let parent = if index == 0 {
            None
        } else {
            match self
                .levels
                .get(index - 1)
                .and_then(|level| level.selected.clone())
            {
                Some(node) => Some(node),
                // Gate: no parent selection, no fetch.
                None => return,
            }
        };

        if let Some(entry) = self.levels.get_mut(index) {
            entry.loading = true;
        }
        let outcome = self.adapter.list_children(parent.as_ref()).await;
        let level_kind = self.levels.get(index).map(ResolverLevel::kind);
        if let Some(entry) = self.levels.get_mut(index) {
            entry.loading = false;
            match outcome {
                Ok(mut nodes) => {
                    // Lists may live directly under a space, so the folder
                    // level always offers the synthetic "no folder" option
                    // ahead of the real folders.
                    if level_kind == Some(ResourceKind::Folder)
                        && let Some(space) = parent.filter(|node| node.kind() == ResourceKind::Space)
                    {
                        nodes.insert(0, ResourceNode::folderless_option(space.id()));
                    }
                    entry.options = nodes;
                }
                Err(error) => {
                    tracing::warn!(
                        platform = %self.adapter.kind(),
                        level = index,
                        %error,
                        "hierarchy fetch failed; leaving level empty"
                    );
                    entry.options = Vec::new();
                }
            }
        }
    }
}

/// Errors returned by resolver operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolverError {
    /// The platform hierarchy has no such level.
    #[error("hierarchy has no level {0}")]
    UnknownLevel(usize),

    /// The previous level has no selection yet.
    #[error("level {0} cannot be selected before its parent level")]
    ParentNotSelected(usize),

    /// The option id is not among the level's fetched options.
    #[error("level {level} has no option '{option_id}'")]
    UnknownOption {
        /// Level the selection targeted.
        level: usize,
        /// Option id that was not found.
        option_id: String,
    },
}
