//! Location hierarchy nodes used while resolving a creation target.

use super::{PlatformDomainError, PlatformKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display name of the synthetic "no folder" option.
const FOLDERLESS_NAME: &str = "No folder";

/// The level a resource node occupies in a platform's location hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    /// Top level of the hierarchical tool.
    Team,
    /// Second level of the hierarchical tool.
    Space,
    /// Third level of the hierarchical tool.
    Folder,
    /// Leaf container of the hierarchical tool and the card board.
    List,
    /// Top level of the card board.
    Board,
    /// Sole level of the flat platforms.
    Project,
}

impl ResourceKind {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Team => "team",
            Self::Space => "space",
            Self::Folder => "folder",
            Self::List => "list",
            Self::Board => "board",
            Self::Project => "project",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One selectable node in a platform's location hierarchy.
///
/// Nodes are transient: they exist only while a creation target is being
/// resolved. The `folderless` marker distinguishes the synthetic "no folder"
/// option (lists living directly under a space) from a real folder; its `id`
/// is the parent space's id, which the folderless-children fetch needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceNode {
    id: String,
    name: String,
    kind: ResourceKind,
    folderless: bool,
}

impl ResourceNode {
    /// Creates a real hierarchy node.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: ResourceKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            folderless: false,
        }
    }

    /// Creates the synthetic "no folder" option for a space.
    ///
    /// The node sits at the folder level but routes the subsequent list
    /// fetch to the space's direct children.
    #[must_use]
    pub fn folderless_option(space_id: impl Into<String>) -> Self {
        Self {
            id: space_id.into(),
            name: FOLDERLESS_NAME.to_owned(),
            kind: ResourceKind::Folder,
            folderless: true,
        }
    }

    /// Returns the platform-scoped node identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the hierarchy level this node occupies.
    #[must_use]
    pub const fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Returns true for the synthetic "no folder" option.
    #[must_use]
    pub const fn is_folderless(&self) -> bool {
        self.folderless
    }
}

impl fmt::Display for ResourceNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}' ({})", self.kind, self.name, self.id)
    }
}

/// A fully resolved root-to-leaf location chain for task creation.
///
/// The leaf is stored separately from its ancestors, so a location always
/// has at least one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateLocation {
    ancestors: Vec<ResourceNode>,
    leaf: ResourceNode,
}

impl CreateLocation {
    /// Builds a location from a non-empty root-to-leaf chain.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformDomainError::EmptyLocation`] when the chain has no
    /// nodes.
    pub fn new(nodes: impl IntoIterator<Item = ResourceNode>) -> Result<Self, PlatformDomainError> {
        let mut ancestors: Vec<ResourceNode> = nodes.into_iter().collect();
        let leaf = ancestors.pop().ok_or(PlatformDomainError::EmptyLocation)?;
        Ok(Self { ancestors, leaf })
    }

    /// Returns the chain from root to leaf.
    pub fn nodes(&self) -> impl Iterator<Item = &ResourceNode> {
        self.ancestors.iter().chain(std::iter::once(&self.leaf))
    }

    /// Returns the leaf node the new item is created under.
    #[must_use]
    pub const fn leaf(&self) -> &ResourceNode {
        &self.leaf
    }
}

/// Returns the hierarchy levels a platform requires before creation.
///
/// Flat platforms take a single `Project`; the card board is `Board → List`;
/// the hierarchical tool is `Team → Space → Folder → List`.
#[must_use]
pub const fn location_chain(kind: PlatformKind) -> &'static [ResourceKind] {
    match kind {
        PlatformKind::TicketTracker | PlatformKind::FlatList => &[ResourceKind::Project],
        PlatformKind::CardBoard => &[ResourceKind::Board, ResourceKind::List],
        PlatformKind::HierarchicalTool => &[
            ResourceKind::Team,
            ResourceKind::Space,
            ResourceKind::Folder,
            ResourceKind::List,
        ],
    }
}
