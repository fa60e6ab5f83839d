//! CLI command implementations.

pub mod indicator;
pub mod list;
pub mod signal;
