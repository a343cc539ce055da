//! Typed configuration values.
//!
//! Responsibilities:
//! - Define `TypedValue`, the explicit tagged representation of a resolved value.
//! - Infer a value's type from its final string form.
//! - Parse flag input using the type implied by an existing value.
//!
//! Invariants:
//! - Inference order is Integer, Float, Boolean, String; `"1"`/`"0"` are integers.
//! - Numeric parsing ignores surrounding whitespace, so padded numbers never become booleans.
//! - A key named `date` (any case) always yields a String.
//! - The boolean vocabulary is shared by inference and flag parsing.

use std::fmt;

use serde::Serialize;

use crate::constants::DATE_KEY;
use crate::loader::ConfigError;

const TRUE_WORDS: [&str; 4] = ["yes", "true", "on", "1"];
const FALSE_WORDS: [&str; 4] = ["no", "false", "off", "0"];

/// Parse the boolean vocabulary (`yes/true/on/1`, `no/false/off/0`), ignoring case
/// and surrounding whitespace.
pub fn parse_bool(raw: &str) -> Option<bool> {
    let word = raw.trim().to_lowercase();
    if TRUE_WORDS.contains(&word.as_str()) {
        Some(true)
    } else if FALSE_WORDS.contains(&word.as_str()) {
        Some(false)
    } else {
        None
    }
}

/// The tag of a `TypedValue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Integer,
    Float,
    Boolean,
    String,
}

impl ValueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::Boolean => "boolean",
            ValueKind::String => "string",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved configuration value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TypedValue {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    String(String),
}

impl TypedValue {
    /// Classify the final string value of `key`.
    pub fn infer(key: &str, raw: &str) -> Self {
        if key.eq_ignore_ascii_case(DATE_KEY) {
            return TypedValue::String(raw.to_string());
        }
        let trimmed = raw.trim();
        if let Ok(i) = trimmed.parse::<i64>() {
            return TypedValue::Integer(i);
        }
        if is_integer_literal(trimmed) {
            // Out of i64 range.
            return TypedValue::String(raw.to_string());
        }
        if let Ok(f) = trimmed.parse::<f64>() {
            return TypedValue::Float(f);
        }
        if let Some(b) = parse_bool(raw) {
            return TypedValue::Boolean(b);
        }
        TypedValue::String(raw.to_string())
    }

    /// Parse `raw` as the same kind as `self`.
    ///
    /// `flag` is only used in the error message.
    pub fn parse_as(&self, flag: &str, raw: &str) -> Result<TypedValue, ConfigError> {
        let malformed = || ConfigError::MalformedFlagValue {
            flag: flag.to_string(),
            value: raw.to_string(),
            expected: self.kind().as_str(),
        };
        match self {
            TypedValue::Integer(_) => raw
                .trim()
                .parse()
                .map(TypedValue::Integer)
                .map_err(|_| malformed()),
            TypedValue::Float(_) => raw
                .trim()
                .parse()
                .map(TypedValue::Float)
                .map_err(|_| malformed()),
            TypedValue::Boolean(_) => parse_bool(raw)
                .map(TypedValue::Boolean)
                .ok_or_else(malformed),
            TypedValue::String(_) => Ok(TypedValue::String(raw.to_string())),
        }
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            TypedValue::Integer(_) => ValueKind::Integer,
            TypedValue::Float(_) => ValueKind::Float,
            TypedValue::Boolean(_) => ValueKind::Boolean,
            TypedValue::String(_) => ValueKind::String,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            TypedValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            TypedValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            TypedValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            TypedValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedValue::Integer(i) => write!(f, "{i}"),
            TypedValue::Float(x) => write!(f, "{x:?}"),
            TypedValue::Boolean(b) => write!(f, "{b}"),
            TypedValue::String(s) => f.write_str(s),
        }
    }
}

fn is_integer_literal(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

impl From<i64> for TypedValue {
    fn from(value: i64) -> Self {
        TypedValue::Integer(value)
    }
}

impl From<f64> for TypedValue {
    fn from(value: f64) -> Self {
        TypedValue::Float(value)
    }
}

impl From<bool> for TypedValue {
    fn from(value: bool) -> Self {
        TypedValue::Boolean(value)
    }
}

impl From<&str> for TypedValue {
    fn from(value: &str) -> Self {
        TypedValue::String(value.to_string())
    }
}
