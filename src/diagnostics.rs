//! Per-field warnings for properties that were left out of the output.

use crate::schema::SingleType;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarningKind {
    /// The property declares several types.
    UnionType(Vec<SingleType>),
    /// The property has no `type` and no `$ref`.
    MissingType,
    /// The property only points at another schema. References are never followed.
    UnsupportedReference(String),
    /// The JSON Schema type has no GraphQL scalar and no fallback was configured.
    UnsupportedType(SingleType),
    /// Another flattened property already produced a field with this name.
    DuplicateField(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub path: String,
    pub kind: WarningKind,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = &self.path;
        match &self.kind {
            WarningKind::UnionType(types) => {
                let names: Vec<_> = types.iter().map(|t| t.as_str()).collect();
                write!(
                    f,
                    "skipping prop \"{path}\", union types are not supported ({})",
                    names.join(" | ")
                )
            }
            WarningKind::MissingType => write!(f, "skipping prop \"{path}\", type is missing"),
            WarningKind::UnsupportedReference(reference) => write!(
                f,
                "skipping prop \"{path}\", $ref \"{reference}\" is not supported"
            ),
            WarningKind::UnsupportedType(type_) => write!(
                f,
                "skipping prop \"{path}\", {type_} is not supported in GraphQL (provide a fallback type to avoid skipping)"
            ),
            WarningKind::DuplicateField(name) => write!(
                f,
                "skipping prop \"{path}\", field \"{name}\" is already defined"
            ),
        }
    }
}

/// Collects the warnings raised during one conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warn(&mut self, path: impl Into<String>, kind: WarningKind) {
        let warning = Warning {
            path: path.into(),
            kind,
        };
        tracing::warn!(path = %warning.path, "{warning}");
        self.warnings.push(warning);
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    pub fn skipped_paths(&self) -> impl Iterator<Item = &str> {
        self.warnings.iter().map(|warning| warning.path.as_str())
    }
}
