//! Value and provenance types for resolved configuration.
//!
//! Responsibilities:
//! - Define `TypedValue` and the type inference rules (see `value`).
//! - Define `Source` and `Param` for provenance reporting (see `source`).
//!
//! Does NOT handle:
//! - Reading files or the environment (see `loader` module).
//! - Holding resolved sections (see `configuration` module).

mod source;
mod value;

pub use source::{Param, Source};
pub use value::{TypedValue, ValueKind, parse_bool};
