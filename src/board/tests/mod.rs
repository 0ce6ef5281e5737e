//! Unit tests for the board context.

mod support;
