//! Provenance of resolved values.
//!
//! Responsibilities:
//! - Define `Source`, the layer that supplied a key's final value.
//! - Define `Param`, one row of the flattened parameter listing.

use std::fmt;

use serde::Serialize;

use super::value::TypedValue;

/// The layer that supplied a key's final value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Base file (including extended interpolation and DEFAULT inheritance).
    Default,
    /// Override file.
    Override,
    /// `MLP_<SECTION>_<KEY>` environment variable.
    Env,
}

impl Source {
    pub fn as_str(self) -> &'static str {
        match self {
            Source::Default => "default",
            Source::Override => "override",
            Source::Env => "env",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved parameter: one entry of `Configuration::params`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Param {
    pub section: String,
    pub key: String,
    pub value: TypedValue,
    pub source: Source,
}

impl Param {
    /// The composite `section.key` identifier.
    pub fn id(&self) -> String {
        format!("{}.{}", self.section, self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_names() {
        assert_eq!(Source::Default.to_string(), "default");
        assert_eq!(Source::Override.to_string(), "override");
        assert_eq!(Source::Env.to_string(), "env");
        assert_eq!(serde_json::to_string(&Source::Env).unwrap(), r#""env""#);
    }

    #[test]
    fn test_param_serializes_flat() {
        let param = Param {
            section: "train".to_string(),
            key: "epochs".to_string(),
            value: TypedValue::Integer(10),
            source: Source::Override,
        };
        assert_eq!(param.id(), "train.epochs");
        assert_eq!(
            serde_json::to_value(&param).unwrap(),
            serde_json::json!({
                "section": "train",
                "key": "epochs",
                "value": 10,
                "source": "override"
            })
        );
    }
}
