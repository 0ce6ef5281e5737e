//! Hand-rolled adapter doubles for board service tests.

use crate::platform::domain::{
    CanonicalStatus, CreateLocation, NativeItem, PlatformKind, ResourceNode,
};
use crate::platform::ports::{
    AdapterError, AdapterResult, MoveContext, NewItemSpec, PlatformAdapter,
};
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Adapter double with canned outcomes and call counters.
pub struct StubAdapter {
    kind: PlatformKind,
    items: Mutex<Result<Vec<NativeItem>, AdapterError>>,
    list_calls: AtomicUsize,
}

impl StubAdapter {
    /// Creates a stub listing the given items.
    pub fn listing(kind: PlatformKind, items: Vec<NativeItem>) -> Self {
        Self {
            kind,
            items: Mutex::new(Ok(items)),
            list_calls: AtomicUsize::new(0),
        }
    }

    /// Creates a stub whose listing fails.
    pub fn failing(kind: PlatformKind, error: AdapterError) -> Self {
        Self {
            kind,
            items: Mutex::new(Err(error)),
            list_calls: AtomicUsize::new(0),
        }
    }

    /// Returns how many times the listing was invoked.
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PlatformAdapter for StubAdapter {
    fn kind(&self) -> PlatformKind {
        self.kind
    }

    async fn list_items(&self) -> AdapterResult<Vec<NativeItem>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.items
            .lock()
            .map_err(|err| AdapterError::malformed("stub", err.to_string()))?
            .clone()
    }

    async fn move_item(
        &self,
        _item_id: &str,
        _target: CanonicalStatus,
        _context: &MoveContext,
    ) -> AdapterResult<()> {
        Ok(())
    }

    async fn create_item(
        &self,
        _location: &CreateLocation,
        _spec: &NewItemSpec,
    ) -> AdapterResult<()> {
        Ok(())
    }

    async fn list_children(
        &self,
        _parent: Option<&ResourceNode>,
    ) -> AdapterResult<Vec<ResourceNode>> {
        Ok(Vec::new())
    }
}
