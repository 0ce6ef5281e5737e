//! Remote tool execution port, the crate's sole I/O boundary.

use crate::platform::domain::ToolResponse;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// Result type for tool executor operations.
pub type ExecutorResult<T> = Result<T, ExecutorError>;

/// Contract for performing a named remote operation against one platform.
///
/// One implementation exists per platform, shaped identically. The executor
/// owns every transport concern (HTTP, credentials, timeouts); adapters only
/// name the operation and shape its arguments. Implementations must not
/// retry: retry policy belongs to the callers orchestrating the board.
#[async_trait]
pub trait ToolExecutor: Send + Sync {
    /// Invokes the named tool with JSON arguments.
    ///
    /// A tool that runs but reports failure yields `Ok` with a failed
    /// [`ToolResponse`]; `Err` is reserved for not reaching the tool at all.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutorError::Transport`] when the invocation cannot reach
    /// the platform.
    async fn invoke(&self, tool: &str, args: Value) -> ExecutorResult<ToolResponse>;
}

/// Errors returned by tool executor implementations.
#[derive(Debug, Clone, Error)]
pub enum ExecutorError {
    /// The remote platform could not be reached.
    #[error("transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl ExecutorError {
    /// Wraps a transport-layer failure.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
