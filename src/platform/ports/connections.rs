//! Connection registry port reporting platform credential state.

use crate::platform::domain::PlatformKind;
use async_trait::async_trait;

/// Reports which platforms currently hold valid credentials.
///
/// The report gates the aggregation fan-out: adapters for platforms not
/// listed here are never invoked. Credential management itself is an
/// external collaborator concern; this port only reads its current state,
/// so it has no failure mode: a platform whose credentials cannot be
/// verified is simply not reported as connected.
#[async_trait]
pub trait ConnectionRegistry: Send + Sync {
    /// Returns the currently connected platforms.
    async fn connected_platforms(&self) -> Vec<PlatformKind>;
}
