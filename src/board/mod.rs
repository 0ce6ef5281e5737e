//! Unified board context.
//!
//! Aggregates the connected platforms' work items into one four-column
//! collection, applies optimistic moves with rollback, and resolves the
//! cascading location hierarchies task creation needs. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Orchestration services in [`services`]
//!
//! The platform-facing ports and adapters this context drives live in
//! [`crate::platform`].

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
