//! Parallel aggregation of every connected platform into one collection.

use crate::board::domain::Task;
use crate::platform::adapters::AdapterRegistry;
use crate::platform::domain::PlatformKind;
use crate::platform::ports::{AdapterError, ConnectionRegistry};
use chrono::{DateTime, Utc};
use futures::future::join_all;
use mockable::Clock;
use std::sync::Arc;

/// One platform's fetch failure during an aggregation pass.
#[derive(Debug)]
pub struct RefreshFailure {
    platform: PlatformKind,
    error: AdapterError,
}

impl RefreshFailure {
    /// Returns the platform whose fetch failed.
    #[must_use]
    pub const fn platform(&self) -> PlatformKind {
        self.platform
    }

    /// Returns the fetch error.
    #[must_use]
    pub const fn error(&self) -> &AdapterError {
        &self.error
    }
}

/// Outcome of one aggregation pass.
#[derive(Debug)]
pub struct RefreshReport {
    tasks: Vec<Task>,
    failures: Vec<RefreshFailure>,
    refreshed_at: DateTime<Utc>,
}

impl RefreshReport {
    /// Returns the merged, normalized tasks.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the per-platform fetch failures.
    #[must_use]
    pub fn failures(&self) -> &[RefreshFailure] {
        &self.failures
    }

    /// Returns when the pass completed.
    #[must_use]
    pub const fn refreshed_at(&self) -> DateTime<Utc> {
        self.refreshed_at
    }

    /// Consumes the report, yielding its tasks.
    #[must_use]
    pub fn into_tasks(self) -> Vec<Task> {
        self.tasks
    }
}

/// Fan-out aggregation service.
///
/// Dispatches one `list_items` per connected adapter concurrently and joins
/// on all outcomes: a settle-all join, never fail-fast, so one slow or
/// broken platform cannot block or cancel the others.
#[derive(Clone)]
pub struct BoardAggregator<N, C>
where
    N: ConnectionRegistry,
    C: Clock + Send + Sync,
{
    adapters: Arc<AdapterRegistry>,
    connections: Arc<N>,
    clock: Arc<C>,
}

impl<N, C> BoardAggregator<N, C>
where
    N: ConnectionRegistry,
    C: Clock + Send + Sync,
{
    /// Creates an aggregator over the adapter registry.
    #[must_use]
    pub const fn new(adapters: Arc<AdapterRegistry>, connections: Arc<N>, clock: Arc<C>) -> Self {
        Self {
            adapters,
            connections,
            clock,
        }
    }

    /// Runs one aggregation pass over every connected platform.
    ///
    /// Adapters for disconnected platforms are skipped entirely, neither
    /// called nor recorded as failed. A failed adapter contributes zero
    /// tasks; the ticket tracker additionally substitutes a synthetic
    /// error task so the fault stays visible on the board. The returned
    /// collection fully replaces the previous pass; no incremental
    /// diffing, which would risk mixing two passes.
    pub async fn refresh(&self) -> RefreshReport {
        let connected = self.connections.connected_platforms().await;
        let fetches: Vec<_> = connected
            .into_iter()
            .filter_map(|kind| self.adapters.get(kind).map(|adapter| (kind, adapter)))
            .map(|(kind, adapter)| async move { (kind, adapter.list_items().await) })
            .collect();
        let outcomes = join_all(fetches).await;

        let mut tasks = Vec::new();
        let mut failures = Vec::new();
        for (kind, outcome) in outcomes {
            match outcome {
                Ok(items) => {
                    tasks.extend(items.into_iter().map(|item| Task::from_native(kind, item)));
                }
                Err(error) => {
                    tracing::warn!(platform = %kind, %error, "platform fetch failed");
                    if kind == PlatformKind::TicketTracker {
                        tasks.push(Task::fetch_failure(kind, &error));
                    }
                    failures.push(RefreshFailure {
                        platform: kind,
                        error,
                    });
                }
            }
        }
        tracing::debug!(
            tasks = tasks.len(),
            failures = failures.len(),
            "aggregation pass settled"
        );
        RefreshReport {
            tasks,
            failures,
            refreshed_at: self.clock.utc(),
        }
    }
}
