//! Crossboard: one board over many task platforms.
//!
//! This crate aggregates work items from four independent project-management
//! platforms (a ticket tracker, a card board, a hierarchical task tool, and
//! a flat task list) into a single four-column view, and translates unified
//! actions (drag a task between columns, create a task) into each platform's
//! native remote operations.
//!
//! # Architecture
//!
//! Crossboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (one per platform)
//!
//! All remote I/O funnels through one port, the tool executor, implemented
//! once per platform by an external collaborator.
//!
//! # Modules
//!
//! - [`platform`]: Per-platform translation: adapters, native payloads,
//!   the canonical status vocabulary and its normalizer
//! - [`board`]: The unified collection: aggregation, optimistic moves,
//!   filtering, and creation-target resolution

pub mod board;
pub mod platform;
