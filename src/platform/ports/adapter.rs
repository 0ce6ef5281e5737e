//! Per-platform adapter port: list, move, create, and hierarchy browsing.

use crate::platform::domain::{
    CanonicalStatus, CreateLocation, NativeItem, PlatformDomainError, PlatformKind, ResourceKind,
    ResourceNode, ToolFailure,
};
use crate::platform::ports::ExecutorError;
use async_trait::async_trait;
use thiserror::Error;

/// Result type for platform adapter operations.
pub type AdapterResult<T> = Result<T, AdapterError>;

/// Translation contract between one platform and the unified board.
///
/// Every method is a remote operation through the platform's tool executor.
/// Adapters are stateless transforms: they hold no task collection, never
/// retry, and never interpret another platform's payloads.
#[async_trait]
pub trait PlatformAdapter: Send + Sync {
    /// Returns the platform this adapter owns.
    fn kind(&self) -> PlatformKind;

    /// Lists the platform's work items in their raw, unnormalized form.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError`] when the remote call fails or its payload
    /// cannot be decoded.
    async fn list_items(&self) -> AdapterResult<Vec<NativeItem>>;

    /// Moves one item to the native equivalent of a canonical status.
    ///
    /// `context` carries platform-specific state that is not part of the
    /// unified task record, such as the card board's originating board id.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError`] when the remote call fails, the payload is
    /// malformed, or the platform has no native target for the status.
    async fn move_item(
        &self,
        item_id: &str,
        target: CanonicalStatus,
        context: &MoveContext,
    ) -> AdapterResult<()>;

    /// Creates a new item under a fully resolved location.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError`] when the location leaf is of the wrong kind
    /// or the remote call fails, including nominal successes that embed an
    /// error payload.
    async fn create_item(&self, location: &CreateLocation, spec: &NewItemSpec)
    -> AdapterResult<()>;

    /// Lists the child location nodes under `parent`, or the hierarchy
    /// roots when `parent` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::UnsupportedParent`] when the platform has no
    /// level below `parent`, and the usual remote failures otherwise.
    async fn list_children(&self, parent: Option<&ResourceNode>)
    -> AdapterResult<Vec<ResourceNode>>;
}

/// Platform-specific state accompanying a move that the task record alone
/// cannot supply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveContext {
    board_ref: Option<String>,
}

impl MoveContext {
    /// Creates an empty context for platforms that need none.
    #[must_use]
    pub const fn empty() -> Self {
        Self { board_ref: None }
    }

    /// Sets the originating board reference.
    #[must_use]
    pub fn with_board_ref(mut self, board_ref: impl Into<String>) -> Self {
        self.board_ref = Some(board_ref.into());
        self
    }

    /// Returns the originating board reference, if any.
    #[must_use]
    pub fn board_ref(&self) -> Option<&str> {
        self.board_ref.as_deref()
    }
}

/// Validated payload for creating a new item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItemSpec {
    title: String,
    description: String,
    due_date: Option<String>,
}

impl NewItemSpec {
    /// Creates a spec with the mandatory title.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformDomainError::EmptyTitle`] when the title is empty
    /// after trimming.
    pub fn new(title: impl Into<String>) -> Result<Self, PlatformDomainError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(PlatformDomainError::EmptyTitle);
        }
        Ok(Self {
            title,
            description: String::new(),
            due_date: None,
        })
    }

    /// Sets the item description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the due date label.
    #[must_use]
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    /// Returns the item title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the item description, empty when unset.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the due date label, if any.
    #[must_use]
    pub fn due_date(&self) -> Option<&str> {
        self.due_date.as_deref()
    }
}

/// Errors returned by platform adapter implementations.
#[derive(Debug, Clone, Error)]
pub enum AdapterError {
    /// The remote tool reported a failure.
    #[error("tool '{tool}' failed: {failure}")]
    Tool {
        /// Invoked tool name.
        tool: String,
        /// Reported failure.
        failure: ToolFailure,
    },

    /// The platform could not be reached.
    #[error(transparent)]
    Transport(#[from] ExecutorError),

    /// The remote payload could not be decoded into domain types.
    #[error("malformed payload from tool '{tool}': {detail}")]
    MalformedPayload {
        /// Invoked tool name.
        tool: String,
        /// Decoding failure detail.
        detail: String,
    },

    /// No list on the board maps onto the requested canonical status.
    #[error("board {board} has no list matching status '{target}'")]
    NoMatchingList {
        /// Board whose lists were inspected.
        board: String,
        /// Requested canonical status.
        target: CanonicalStatus,
    },

    /// The move context lacks the board reference this platform requires.
    #[error("item {item_id} carries no board reference")]
    MissingBoardRef {
        /// Item being moved.
        item_id: String,
    },

    /// The creation location leaf is of the wrong kind for this platform.
    #[error("cannot create under a {found} node, expected {expected}")]
    WrongLocationKind {
        /// Leaf kind the platform requires.
        expected: ResourceKind,
        /// Leaf kind that was supplied.
        found: ResourceKind,
    },

    /// The platform has no hierarchy level below the given parent.
    #[error("no child level below {parent} nodes on this platform")]
    UnsupportedParent {
        /// Parent kind that has no children.
        parent: ResourceKind,
    },
}

impl AdapterError {
    /// Wraps a failure reported by the named tool.
    pub fn tool(tool: impl Into<String>, failure: ToolFailure) -> Self {
        Self::Tool {
            tool: tool.into(),
            failure,
        }
    }

    /// Wraps a payload decoding failure from the named tool.
    pub fn malformed(tool: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::MalformedPayload {
            tool: tool.into(),
            detail: err.to_string(),
        }
    }
}
