//! Conversion settings.

use crate::graphql::Scalar;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Settings that control how JSON Schema properties become GraphQL fields.
///
/// Deserializable from the same camelCase keys the CLI `--config` file uses:
///
/// ```json
/// { "fallbackTypes": { "collections[]": "string" }, "arraysNullable": true }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ConvertOptions {
    /// Scalar to use for a field path whose JSON Schema type has no direct
    /// GraphQL mapping. Array item paths carry a `[]` suffix (`tags[]`).
    pub fallback_types: IndexMap<String, FallbackType>,

    /// Leave list items nullable (`[String]`) instead of `[String!]`.
    pub arrays_nullable: bool,

    /// Render JSON Schema `description`s as GraphQL descriptions.
    pub descriptions: bool,
}

impl ConvertOptions {
    pub fn with_fallback(mut self, path: impl Into<String>, fallback: FallbackType) -> Self {
        self.fallback_types.insert(path.into(), fallback);
        self
    }

    pub fn with_arrays_nullable(mut self, arrays_nullable: bool) -> Self {
        self.arrays_nullable = arrays_nullable;
        self
    }

    pub fn with_descriptions(mut self, descriptions: bool) -> Self {
        self.descriptions = descriptions;
        self
    }

    pub(crate) fn fallback_for(&self, path: &str) -> Option<FallbackType> {
        self.fallback_types.get(path).copied()
    }
}

/// JSON Schema type names a fallback may resolve to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FallbackType {
    Boolean,
    Integer,
    Number,
    String,
}

impl FallbackType {
    pub fn scalar(self) -> Scalar {
        match self {
            FallbackType::Boolean => Scalar::Boolean,
            FallbackType::Integer | FallbackType::Number => Scalar::Int,
            FallbackType::String => Scalar::String,
        }
    }
}

impl fmt::Display for FallbackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FallbackType::Boolean => "boolean",
            FallbackType::Integer => "integer",
            FallbackType::Number => "number",
            FallbackType::String => "string",
        })
    }
}

impl FromStr for FallbackType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "boolean" => Ok(FallbackType::Boolean),
            "integer" => Ok(FallbackType::Integer),
            "number" => Ok(FallbackType::Number),
            "string" => Ok(FallbackType::String),
            other => Err(format!(
                "unsupported fallback type `{other}` (expected boolean, integer, number or string)"
            )),
        }
    }
}
