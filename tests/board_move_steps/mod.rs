//! Step definitions for board move behaviour scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
