//! Platform integration context.
//!
//! Everything that faces a single project-management platform: the domain
//! vocabulary shared across platforms (kinds, canonical statuses and the
//! status normalizer, raw items, location hierarchies, the canonical
//! remote-call envelope), the ports the board depends on, and one adapter
//! per platform. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
