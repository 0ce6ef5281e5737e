//! In-memory tool executor and connection registry for tests.

use crate::platform::domain::{PlatformKind, ToolResponse};
use crate::platform::ports::{ConnectionRegistry, ExecutorError, ExecutorResult, ToolExecutor};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

/// Scripted in-memory tool executor.
///
/// Each tool name maps to a queue of envelopes returned in order; a tool
/// with an exhausted or missing queue yields a transport error, which makes
/// unscripted invocations visible in tests. Every invocation is recorded.
#[derive(Debug, Clone, Default)]
pub struct ScriptedToolExecutor {
    state: Arc<Mutex<ScriptedState>>,
}

#[derive(Debug, Default)]
struct ScriptedState {
    responses: HashMap<String, VecDeque<ToolResponse>>,
    invocations: Vec<(String, Value)>,
}

impl ScriptedToolExecutor {
    /// Creates an executor with no scripted responses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a response for the named tool.
    pub fn script(&self, tool: impl Into<String>, response: ToolResponse) {
        if let Ok(mut state) = self.state.lock() {
            state
                .responses
                .entry(tool.into())
                .or_default()
                .push_back(response);
        }
    }

    /// Returns the recorded invocations in call order.
    #[must_use]
    pub fn invocations(&self) -> Vec<(String, Value)> {
        self.state
            .lock()
            .map(|state| state.invocations.clone())
            .unwrap_or_default()
    }

    /// Returns the recorded tool names in call order.
    #[must_use]
    pub fn invoked_tools(&self) -> Vec<String> {
        self.invocations()
            .into_iter()
            .map(|(tool, _)| tool)
            .collect()
    }
}

#[async_trait]
impl ToolExecutor for ScriptedToolExecutor {
    async fn invoke(&self, tool: &str, args: Value) -> ExecutorResult<ToolResponse> {
        let mut state = self
            .state
            .lock()
            .map_err(|err| ExecutorError::transport(std::io::Error::other(err.to_string())))?;
        state.invocations.push((tool.to_owned(), args));
        state
            .responses
            .get_mut(tool)
            .and_then(VecDeque::pop_front)
            .ok_or_else(|| {
                ExecutorError::transport(std::io::Error::other(format!(
                    "no scripted response for tool '{tool}'"
                )))
            })
    }
}

/// Connection registry with a fixed set of connected platforms.
#[derive(Debug, Clone, Default)]
pub struct StaticConnections {
    connected: Vec<PlatformKind>,
}

impl StaticConnections {
    /// Creates a registry reporting the given platforms as connected.
    #[must_use]
    pub fn new(connected: impl IntoIterator<Item = PlatformKind>) -> Self {
        Self {
            connected: connected.into_iter().collect(),
        }
    }
}

#[async_trait]
impl ConnectionRegistry for StaticConnections {
    async fn connected_platforms(&self) -> Vec<PlatformKind> {
        self.connected.clone()
    }
}
