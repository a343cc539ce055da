//! CLI command implementations.

pub mod flags;
pub mod get;
pub mod list;
