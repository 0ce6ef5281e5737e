//! Tagged adapter dispatch keyed on platform kind.

use crate::platform::domain::PlatformKind;
use crate::platform::ports::PlatformAdapter;
use std::collections::HashMap;
use std::sync::Arc;

/// Fixed set of platform adapters, one per connected platform kind.
///
/// Dispatch over platforms is a single keyed lookup here; call sites never
/// compare platform strings.
#[derive(Default)]
pub struct AdapterRegistry {
    adapters: HashMap<PlatformKind, Arc<dyn PlatformAdapter>>,
}

impl AdapterRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an adapter under the kind it reports.
    ///
    /// A later registration for the same kind replaces the earlier one.
    #[must_use]
    pub fn with_adapter(mut self, adapter: Arc<dyn PlatformAdapter>) -> Self {
        self.adapters.insert(adapter.kind(), adapter);
        self
    }

    /// Returns the adapter owning the given platform kind.
    #[must_use]
    pub fn get(&self, kind: PlatformKind) -> Option<Arc<dyn PlatformAdapter>> {
        self.adapters.get(&kind).cloned()
    }

    /// Returns the registered platform kinds in presentation order.
    #[must_use]
    pub fn kinds(&self) -> Vec<PlatformKind> {
        PlatformKind::ALL
            .into_iter()
            .filter(|kind| self.adapters.contains_key(kind))
            .collect()
    }
}
