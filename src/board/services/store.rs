//! In-memory board state and the two-phase optimistic move protocol.

use crate::board::domain::{BoardFilter, Task, TaskKey};
use crate::platform::domain::CanonicalStatus;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};
use thiserror::Error;

/// Result type for board store operations.
pub type BoardStoreResult<T> = Result<T, BoardStoreError>;

/// Owner of the unified task collection.
///
/// The store is the collection's only writer: the aggregator replaces it
/// wholesale through [`BoardStore::replace_all`] and moves mutate a single
/// task's status through the token protocol. Reads always observe a fully
/// settled collection.
///
/// Moves are optimistic. [`BoardStore::tentative_move`] applies the new
/// status immediately and hands back a [`MoveToken`] recording the prior
/// status; the caller finishes the move with exactly one of
/// [`BoardStore::commit_move`] or [`BoardStore::rollback_move`]. The token
/// is not cloneable, so a task's status always reflects either the pre-move
/// or the post-move value, never anything in between.
#[derive(Debug, Clone, Default)]
pub struct BoardStore {
    state: Arc<RwLock<StoreState>>,
}

#[derive(Debug, Default)]
struct StoreState {
    tasks: HashMap<TaskKey, Task>,
    in_flight: HashSet<TaskKey>,
}

/// Receipt for one tentative move, consumed by commit or rollback.
#[derive(Debug)]
pub struct MoveToken {
    key: TaskKey,
    previous: CanonicalStatus,
    target: CanonicalStatus,
}

impl MoveToken {
    /// Returns the key of the task being moved.
    #[must_use]
    pub const fn key(&self) -> &TaskKey {
        &self.key
    }

    /// Returns the status the task held before the tentative move.
    #[must_use]
    pub const fn previous(&self) -> CanonicalStatus {
        self.previous
    }

    /// Returns the status the tentative move applied.
    #[must_use]
    pub const fn target(&self) -> CanonicalStatus {
        self.target
    }
}

impl BoardStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole collection atomically.
    ///
    /// Partial merges would leave the board mixing two aggregation passes,
    /// so replacement is all-or-nothing by design.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Lock`] when the state lock is poisoned.
    pub fn replace_all(&self, tasks: impl IntoIterator<Item = Task>) -> BoardStoreResult<()> {
        let mut state = self.write()?;
        state.tasks = tasks
            .into_iter()
            .map(|task| (task.key().clone(), task))
            .collect();
        tracing::debug!(count = state.tasks.len(), "board collection replaced");
        Ok(())
    }

    /// Returns a snapshot of the task with the given key.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Lock`] when the state lock is poisoned.
    pub fn task(&self, key: &TaskKey) -> BoardStoreResult<Option<Task>> {
        Ok(self.read()?.tasks.get(key).cloned())
    }

    /// Returns the number of tasks on the board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Lock`] when the state lock is poisoned.
    pub fn task_count(&self) -> BoardStoreResult<usize> {
        Ok(self.read()?.tasks.len())
    }

    /// Applies a move optimistically and returns its token.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::TaskNotFound`] for an unknown key and
    /// [`BoardStoreError::MoveInFlight`] when the task already has an
    /// unsettled move: the store is not a queue, and overlapping moves on
    /// one task would race the first move's rollback.
    pub fn tentative_move(
        &self,
        key: &TaskKey,
        target: CanonicalStatus,
    ) -> BoardStoreResult<MoveToken> {
        let mut state = self.write()?;
        if state.in_flight.contains(key) {
            return Err(BoardStoreError::MoveInFlight(key.clone()));
        }
        let task = state
            .tasks
            .get_mut(key)
            .ok_or_else(|| BoardStoreError::TaskNotFound(key.clone()))?;
        let previous = task.status();
        task.move_to(target);
        state.in_flight.insert(key.clone());
        tracing::debug!(task = %key, from = %previous, to = %target, "tentative move applied");
        Ok(MoveToken {
            key: key.clone(),
            previous,
            target,
        })
    }

    /// Finalizes a tentative move; the optimistic status stands.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Lock`] when the state lock is poisoned.
    pub fn commit_move(&self, token: MoveToken) -> BoardStoreResult<()> {
        let mut state = self.write()?;
        state.in_flight.remove(&token.key);
        tracing::debug!(task = %token.key, to = %token.target, "move committed");
        Ok(())
    }

    /// Reverts a tentative move to its exact prior status.
    ///
    /// A compensating action, not a retry. If a refresh replaced the
    /// collection meanwhile and the task is gone, the rollback is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Lock`] when the state lock is poisoned.
    pub fn rollback_move(&self, token: MoveToken) -> BoardStoreResult<()> {
        let mut state = self.write()?;
        state.in_flight.remove(&token.key);
        if let Some(task) = state.tasks.get_mut(&token.key) {
            task.move_to(token.previous);
            tracing::debug!(task = %token.key, back_to = %token.previous, "move rolled back");
        }
        Ok(())
    }

    /// Returns the tasks satisfying a filter, in board order.
    ///
    /// A pure projection: the stored collection is never mutated. Ordering
    /// is deterministic: column position, then platform, then item id.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Lock`] when the state lock is poisoned.
    pub fn filtered_view(&self, filter: &BoardFilter) -> BoardStoreResult<Vec<Task>> {
        let state = self.read()?;
        let mut tasks: Vec<Task> = state
            .tasks
            .values()
            .filter(|task| filter.matches(task))
            .cloned()
            .collect();
        sort_board_order(&mut tasks);
        Ok(tasks)
    }

    /// Returns the four-column board view.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Lock`] when the state lock is poisoned.
    pub fn columns(&self) -> BoardStoreResult<BoardColumns> {
        let tasks = self.filtered_view(&BoardFilter::all())?;
        let mut columns = BoardColumns::default();
        for task in tasks {
            columns.push(task);
        }
        Ok(columns)
    }

    fn read(&self) -> BoardStoreResult<std::sync::RwLockReadGuard<'_, StoreState>> {
        self.state
            .read()
            .map_err(|err| BoardStoreError::lock(std::io::Error::other(err.to_string())))
    }

    fn write(&self) -> BoardStoreResult<std::sync::RwLockWriteGuard<'_, StoreState>> {
        self.state
            .write()
            .map_err(|err| BoardStoreError::lock(std::io::Error::other(err.to_string())))
    }
}

/// Sorts tasks by column position, then platform, then item id.
fn sort_board_order(tasks: &mut [Task]) {
    tasks.sort_by(|a, b| {
        a.status()
            .cmp(&b.status())
            .then_with(|| a.platform().as_str().cmp(b.platform().as_str()))
            .then_with(|| a.key().id().cmp(b.key().id()))
    });
}

/// The unified collection bucketed into the four board columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardColumns {
    todo: Vec<Task>,
    in_progress: Vec<Task>,
    review: Vec<Task>,
    done: Vec<Task>,
}

impl BoardColumns {
    fn push(&mut self, task: Task) {
        match task.status() {
            CanonicalStatus::Todo => self.todo.push(task),
            CanonicalStatus::InProgress => self.in_progress.push(task),
            CanonicalStatus::Review => self.review.push(task),
            CanonicalStatus::Done => self.done.push(task),
        }
    }

    /// Returns one column's tasks in board order.
    #[must_use]
    pub fn column(&self, status: CanonicalStatus) -> &[Task] {
        match status {
            CanonicalStatus::Todo => &self.todo,
            CanonicalStatus::InProgress => &self.in_progress,
            CanonicalStatus::Review => &self.review,
            CanonicalStatus::Done => &self.done,
        }
    }

    /// Returns the total task count across the columns.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.todo.len() + self.in_progress.len() + self.review.len() + self.done.len()
    }
}

/// Errors returned by board store operations.
#[derive(Debug, Clone, Error)]
pub enum BoardStoreError {
    /// No task with the given key is on the board.
    #[error("task not found: {0}")]
    TaskNotFound(TaskKey),

    /// The task already has an unsettled move.
    #[error("a move is already in flight for task {0}")]
    MoveInFlight(TaskKey),

    /// The state lock was poisoned.
    #[error("board state lock error: {0}")]
    Lock(Arc<dyn std::error::Error + Send + Sync>),
}

impl BoardStoreError {
    /// Wraps a lock failure.
    pub fn lock(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Lock(Arc::new(err))
    }
}
