//! Facade service exposing the unified board to the UI collaborator.

use super::{
    BoardAggregator, BoardColumns, BoardStore, BoardStoreError, RefreshReport, ResourceResolver,
};
use crate::board::domain::{BoardFilter, Task, TaskKey};
use crate::platform::adapters::AdapterRegistry;
use crate::platform::domain::{CanonicalStatus, CreateLocation, PlatformKind};
use crate::platform::ports::{AdapterError, ConnectionRegistry, MoveContext, NewItemSpec};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Orchestration service tying the adapters, aggregator, and store into the
/// surface the UI consumes: refresh, views, moves, creation, and cascading
/// target resolution.
#[derive(Clone)]
pub struct BoardService<N, C>
where
    N: ConnectionRegistry,
    C: Clock + Send + Sync,
{
    adapters: Arc<AdapterRegistry>,
    aggregator: BoardAggregator<N, C>,
    store: BoardStore,
}

impl<N, C> BoardService<N, C>
where
    N: ConnectionRegistry,
    C: Clock + Send + Sync,
{
    /// Creates a board service over the registered adapters.
    #[must_use]
    pub fn new(adapters: Arc<AdapterRegistry>, connections: Arc<N>, clock: Arc<C>) -> Self {
        let aggregator = BoardAggregator::new(Arc::clone(&adapters), connections, clock);
        Self {
            adapters,
            aggregator,
            store: BoardStore::new(),
        }
    }

    /// Aggregates every connected platform and replaces the board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError`] when the replacement cannot be applied;
    /// per-platform fetch failures are reported inside the
    /// [`RefreshReport`], not as errors.
    pub async fn refresh(&self) -> Result<RefreshReport, BoardStoreError> {
        let report = self.aggregator.refresh().await;
        self.store.replace_all(report.tasks().to_vec())?;
        Ok(report)
    }

    /// Moves a task to a new canonical status, optimistically.
    ///
    /// The store reflects the move immediately; the platform adapter then
    /// performs the native move. On adapter failure the store reverts to the
    /// exact pre-move status and the failure surfaces to the caller: a
    /// compensating action, not a retry.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] when the task or its adapter is unknown, a move
    /// is already in flight for the task, or the platform rejects the move.
    pub async fn move_task(&self, key: &TaskKey, target: CanonicalStatus) -> Result<(), MoveError> {
        let task = self
            .store
            .task(key)?
            .ok_or_else(|| BoardStoreError::TaskNotFound(key.clone()))?;
        let adapter = self
            .adapters
            .get(key.platform())
            .ok_or(MoveError::PlatformNotRegistered(key.platform()))?;

        let mut context = MoveContext::empty();
        if let Some(board_ref) = task.board_ref() {
            context = context.with_board_ref(board_ref);
        }

        let token = self.store.tentative_move(key, target)?;
        match adapter.move_item(key.id(), target, &context).await {
            Ok(()) => {
                self.store.commit_move(token)?;
                Ok(())
            }
            Err(error) => {
                if let Err(rollback_error) = self.store.rollback_move(token) {
                    tracing::error!(task = %key, %rollback_error, "move rollback failed");
                }
                Err(MoveError::Adapter(error))
            }
        }
    }

    /// Creates a task under a fully resolved location, then refreshes.
    ///
    /// The refresh pulls the new item back through aggregation rather than
    /// guessing at the platform's canonical form of it.
    ///
    /// # Errors
    ///
    /// Returns [`CreateError`] when the platform has no adapter, the
    /// creation fails remotely (including nominal successes embedding an
    /// error payload), or the follow-up refresh cannot replace the board.
    pub async fn create_task(
        &self,
        platform: PlatformKind,
        location: &CreateLocation,
        spec: &NewItemSpec,
    ) -> Result<RefreshReport, CreateError> {
        let adapter = self
            .adapters
            .get(platform)
            .ok_or(CreateError::PlatformNotRegistered(platform))?;
        adapter.create_item(location, spec).await?;
        Ok(self.refresh().await?)
    }

    /// Returns the tasks satisfying a filter, in board order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Lock`] when the state lock is poisoned.
    pub fn filtered_view(&self, filter: &BoardFilter) -> Result<Vec<Task>, BoardStoreError> {
        self.store.filtered_view(filter)
    }

    /// Returns the four-column board view.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Lock`] when the state lock is poisoned.
    pub fn columns(&self) -> Result<BoardColumns, BoardStoreError> {
        self.store.columns()
    }

    /// Returns a snapshot of one task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Lock`] when the state lock is poisoned.
    pub fn task(&self, key: &TaskKey) -> Result<Option<Task>, BoardStoreError> {
        self.store.task(key)
    }

    /// Returns a fresh cascade resolver for one platform's hierarchy.
    #[must_use]
    pub fn resolver_for(&self, platform: PlatformKind) -> Option<ResourceResolver> {
        self.adapters.get(platform).map(ResourceResolver::new)
    }
}

/// Errors returned while moving a task.
#[derive(Debug, Error)]
pub enum MoveError {
    /// No adapter is registered for the task's platform.
    #[error("no adapter registered for platform {0}")]
    PlatformNotRegistered(PlatformKind),

    /// The board store rejected the move.
    #[error(transparent)]
    Store(#[from] BoardStoreError),

    /// The platform rejected or could not perform the move.
    #[error(transparent)]
    Adapter(#[from] AdapterError),
}

/// Errors returned while creating a task.
#[derive(Debug, Error)]
pub enum CreateError {
    /// No adapter is registered for the target platform.
    #[error("no adapter registered for platform {0}")]
    PlatformNotRegistered(PlatformKind),

    /// The platform rejected or could not perform the creation.
    #[error(transparent)]
    Adapter(#[from] AdapterError),

    /// The follow-up refresh could not replace the board.
    #[error(transparent)]
    Store(#[from] BoardStoreError),
}
