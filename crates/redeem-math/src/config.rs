use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Result;

/// Options controlling the textual vector encoding.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(default)]
pub struct CodecOptions {
    /// Emit indented JSON instead of a single line.
    pub pretty: bool,

    /// Write label bindings alongside the values. Bindings are dropped
    /// otherwise, so a decoded vector starts without any.
    pub include_bindings: bool,
}

impl CodecOptions {
    pub fn new(pretty: bool, include_bindings: bool) -> Self {
        Self {
            pretty,
            include_bindings,
        }
    }

    /// Load options from a JSON document. Missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Concrete storage strategy behind a vector.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum VectorKind {
    Dense,
    View,
}

impl fmt::Display for VectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorKind::Dense => write!(f, "dense"),
            VectorKind::View => write!(f, "view"),
        }
    }
}

impl FromStr for VectorKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dense" => Ok(VectorKind::Dense),
            "view" => Ok(VectorKind::View),
            _ => Err(format!(
                "Unknown vector kind: {}. Expected one of: dense, view",
                s
            )),
        }
    }
}
