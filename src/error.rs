use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConversionError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Failed to parse JSON Schema: {0}")]
    ParseError(String),

    #[error("This version only supports $ref JSON Schema document (root `type` must be absent)")]
    UnsupportedRootType,

    #[error("This version only supports $ref JSON Schema document (root `$ref` is missing)")]
    MissingRootRef,

    #[error("This version only supports 1 definition, found {0}")]
    MultipleDefinitions(usize),

    #[error("Provided \"{0}\" definition should be an object")]
    RootNotObject(String),
}
