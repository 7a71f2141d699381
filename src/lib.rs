pub mod converter;
pub mod diagnostics;
pub mod error;
pub mod graphql;
pub mod options;
pub mod schema;

pub use converter::SchemaConverter;
pub use diagnostics::{Diagnostics, Warning, WarningKind};
pub use error::{ConversionError, Result};
pub use options::{ConvertOptions, FallbackType};
pub use schema::JsonSchema;

fn parse_schema(json_schema: &str) -> Result<JsonSchema> {
    serde_json::from_str(json_schema).map_err(|e| ConversionError::ParseError(e.to_string()))
}

/// Convert a JSON Schema string to a GraphQL type definition
pub fn convert_schema(json_schema: &str) -> Result<String> {
    convert_schema_with_options(json_schema, &ConvertOptions::default())
}

/// Convert a JSON Schema string to a GraphQL type definition using `options`
pub fn convert_schema_with_options(json_schema: &str, options: &ConvertOptions) -> Result<String> {
    let schema = parse_schema(json_schema)?;

    let converter = SchemaConverter::new(options.clone());
    converter.convert(&schema)
}

/// Convert a JSON Schema string to a GraphQL type definition with a custom type name
pub fn convert_schema_with_name(json_schema: &str, type_name: &str) -> Result<String> {
    let schema = parse_schema(json_schema)?;

    let converter = SchemaConverter::default();
    converter.convert_with_name(&schema, type_name)
}
