//! Port contracts for platform integration.

mod adapter;
mod connections;
mod executor;

pub use adapter::{AdapterError, AdapterResult, MoveContext, NewItemSpec, PlatformAdapter};
pub use connections::ConnectionRegistry;
pub use executor::{ExecutorError, ExecutorResult, ToolExecutor};
