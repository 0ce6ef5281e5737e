//! In-memory adapter implementations for tests.

mod executor;

pub use executor::{ScriptedToolExecutor, StaticConnections};
