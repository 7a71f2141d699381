use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum JsonSchema {
    Boolean(bool),
    Object(Box<SchemaObject>),
}

impl JsonSchema {
    pub fn as_object(&self) -> Option<&SchemaObject> {
        match self {
            JsonSchema::Object(obj) => Some(&**obj),
            JsonSchema::Boolean(_) => None,
        }
    }
}

/// The subset of a JSON Schema node the converter reads. Unknown keywords
/// (`additionalProperties`, constraints, ...) are accepted and ignored.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SchemaObject {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "$schema")]
    pub schema: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "$id")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type")]
    pub type_: Option<SchemaType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, JsonSchema>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Items>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "$ref")]
    pub ref_: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(alias = "$defs")]
    pub definitions: Option<IndexMap<String, JsonSchema>>,
}

impl SchemaObject {
    pub fn is_required(&self, property: &str) -> bool {
        self.required
            .as_ref()
            .is_some_and(|required| required.iter().any(|name| name == property))
    }

    pub fn is_object(&self) -> bool {
        matches!(self.type_, Some(SchemaType::Single(SingleType::Object)))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Items {
    Single(Box<JsonSchema>),
    Tuple(Vec<JsonSchema>),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SchemaType {
    Single(SingleType),
    Multiple(Vec<SingleType>),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SingleType {
    Null,
    Boolean,
    Object,
    Array,
    Number,
    String,
    Integer,
    Any,
}

impl SingleType {
    pub fn as_str(self) -> &'static str {
        match self {
            SingleType::Null => "null",
            SingleType::Boolean => "boolean",
            SingleType::Object => "object",
            SingleType::Array => "array",
            SingleType::Number => "number",
            SingleType::String => "string",
            SingleType::Integer => "integer",
            SingleType::Any => "any",
        }
    }
}

impl fmt::Display for SingleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
