use crate::diagnostics::{Diagnostics, WarningKind};
use crate::error::{ConversionError, Result};
use crate::graphql::{Field, GraphQLType, ObjectType, Scalar};
use crate::options::ConvertOptions;
use crate::schema::{Items, JsonSchema, SchemaObject, SchemaType, SingleType};
use convert_case::{Case, Casing};

/// How a single JSON Schema type name maps onto GraphQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TypeMapping {
    Scalar(Scalar),
    Array,
    Unsupported,
}

impl TypeMapping {
    fn of(type_: SingleType) -> Self {
        match type_ {
            SingleType::Boolean => TypeMapping::Scalar(Scalar::Boolean),
            // GraphQL output has no float scalar here; numbers collapse to Int.
            SingleType::Integer | SingleType::Number => TypeMapping::Scalar(Scalar::Int),
            SingleType::String => TypeMapping::Scalar(Scalar::String),
            SingleType::Array => TypeMapping::Array,
            SingleType::Null | SingleType::Any | SingleType::Object => TypeMapping::Unsupported,
        }
    }
}

/// Converts a `$ref`-rooted JSON Schema document holding one object
/// definition into a GraphQL object type.
#[derive(Debug, Clone, Default)]
pub struct SchemaConverter {
    options: ConvertOptions,
}

impl SchemaConverter {
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert a string to PascalCase
    fn to_pascal_case(s: &str) -> String {
        s.to_case(Case::Pascal)
    }

    pub fn convert(&self, schema: &JsonSchema) -> Result<String> {
        let mut diagnostics = Diagnostics::new();
        self.convert_with_diagnostics(schema, &mut diagnostics)
    }

    pub fn convert_with_name(&self, schema: &JsonSchema, type_name: &str) -> Result<String> {
        let mut diagnostics = Diagnostics::new();
        let mut object = self.build(schema, &mut diagnostics)?;
        object.name = Self::to_pascal_case(type_name);
        Ok(object.to_string())
    }

    /// Like [`convert`](Self::convert), recording every skipped property in
    /// `diagnostics`.
    pub fn convert_with_diagnostics(
        &self,
        schema: &JsonSchema,
        diagnostics: &mut Diagnostics,
    ) -> Result<String> {
        Ok(self.build(schema, diagnostics)?.to_string())
    }

    /// Validates the document and assembles the object type without rendering it.
    pub fn build(&self, schema: &JsonSchema, diagnostics: &mut Diagnostics) -> Result<ObjectType> {
        let (name, definition) = Self::root_definition(schema)?;
        tracing::debug!(type_name = name, "converting definition");

        let mut object = ObjectType::new(name);
        if self.options.descriptions {
            object.description = definition.description.clone();
        }

        self.visit_properties(definition, None, &mut object, diagnostics);

        tracing::debug!(
            type_name = name,
            fields = object.fields.len(),
            skipped = diagnostics.len(),
            "converted definition"
        );
        Ok(object)
    }

    fn root_definition(schema: &JsonSchema) -> Result<(&str, &SchemaObject)> {
        let JsonSchema::Object(root) = schema else {
            return Err(ConversionError::MissingRootRef);
        };

        if root.type_.is_some() {
            return Err(ConversionError::UnsupportedRootType);
        }
        if root.ref_.is_none() {
            return Err(ConversionError::MissingRootRef);
        }

        let definitions = root.definitions.as_ref();
        let count = definitions.map_or(0, |defs| defs.len());
        let Some((name, definition)) = definitions
            .filter(|_| count == 1)
            .and_then(|defs| defs.first())
        else {
            return Err(ConversionError::MultipleDefinitions(count));
        };

        match definition.as_object() {
            Some(obj) if obj.is_object() => Ok((name.as_str(), obj)),
            _ => Err(ConversionError::RootNotObject(name.clone())),
        }
    }

    /// Walks `parent.properties` in declaration order. Nested objects are
    /// flattened into dot-joined paths; everything else becomes a field.
    fn visit_properties(
        &self,
        parent: &SchemaObject,
        namespace: Option<&str>,
        object: &mut ObjectType,
        diagnostics: &mut Diagnostics,
    ) {
        let Some(properties) = &parent.properties else {
            return;
        };

        for (key, property) in properties {
            let path = match namespace {
                Some(namespace) => format!("{namespace}.{key}"),
                None => key.clone(),
            };

            match property.as_object() {
                Some(node) if node.is_object() => {
                    self.visit_properties(node, Some(&path), object, diagnostics)
                }
                _ => self.add_field(
                    key,
                    &path,
                    property,
                    parent.is_required(key),
                    object,
                    diagnostics,
                ),
            }
        }
    }

    fn add_field(
        &self,
        name: &str,
        path: &str,
        property: &JsonSchema,
        required: bool,
        object: &mut ObjectType,
        diagnostics: &mut Diagnostics,
    ) {
        let Some(type_) = self.property_type(property, path, diagnostics) else {
            return;
        };

        if object.contains_field(name) {
            diagnostics.warn(path, WarningKind::DuplicateField(name.to_string()));
            return;
        }

        let type_ = if required { type_.non_null() } else { type_ };
        let description = property
            .as_object()
            .filter(|_| self.options.descriptions)
            .and_then(|node| node.description.clone());

        tracing::trace!(path, %type_, "mapped property");
        object.push_field(name, Field { type_, description });
    }

    fn property_type(
        &self,
        property: &JsonSchema,
        path: &str,
        diagnostics: &mut Diagnostics,
    ) -> Option<GraphQLType> {
        match property.as_object() {
            Some(node) => self.node_type(node, path, diagnostics),
            None => {
                diagnostics.warn(path, WarningKind::MissingType);
                None
            }
        }
    }

    fn node_type(
        &self,
        node: &SchemaObject,
        path: &str,
        diagnostics: &mut Diagnostics,
    ) -> Option<GraphQLType> {
        if let Some(reference) = &node.ref_ {
            diagnostics.warn(path, WarningKind::UnsupportedReference(reference.clone()));
            return None;
        }

        match &node.type_ {
            None => {
                diagnostics.warn(path, WarningKind::MissingType);
                None
            }
            Some(SchemaType::Single(single)) => {
                self.resolve_single(*single, node.items.as_ref(), path, diagnostics)
            }
            Some(SchemaType::Multiple(types)) if types.is_empty() => {
                diagnostics.warn(path, WarningKind::MissingType);
                None
            }
            // Any type list is a union, even with a single entry.
            Some(SchemaType::Multiple(types)) => {
                diagnostics.warn(path, WarningKind::UnionType(types.clone()));
                None
            }
        }
    }

    fn resolve_single(
        &self,
        type_: SingleType,
        items: Option<&Items>,
        path: &str,
        diagnostics: &mut Diagnostics,
    ) -> Option<GraphQLType> {
        match TypeMapping::of(type_) {
            TypeMapping::Scalar(scalar) => Some(scalar.into()),
            TypeMapping::Array => self.array_type(items, path, diagnostics),
            TypeMapping::Unsupported => match self.options.fallback_for(path) {
                Some(fallback) => Some(fallback.scalar().into()),
                None => {
                    diagnostics.warn(path, WarningKind::UnsupportedType(type_));
                    None
                }
            },
        }
    }

    fn array_type(
        &self,
        items: Option<&Items>,
        path: &str,
        diagnostics: &mut Diagnostics,
    ) -> Option<GraphQLType> {
        let item_path = format!("{path}[]");

        let item = match items {
            None => {
                diagnostics.warn(item_path, WarningKind::MissingType);
                return None;
            }
            Some(Items::Single(item)) => self.property_type(item, &item_path, diagnostics)?,
            Some(Items::Tuple(items)) => {
                // The tuple collapses into the list of its entries' type names
                // (untyped entries dropped), which is always a union.
                let types: Vec<SingleType> = items
                    .iter()
                    .filter_map(JsonSchema::as_object)
                    .flat_map(|item| match &item.type_ {
                        Some(SchemaType::Single(single)) => vec![*single],
                        Some(SchemaType::Multiple(types)) => types.clone(),
                        None => Vec::new(),
                    })
                    .collect();
                diagnostics.warn(item_path, WarningKind::UnionType(types));
                return None;
            }
        };

        let item = if self.options.arrays_nullable {
            item
        } else {
            item.non_null()
        };
        Some(GraphQLType::list(item))
    }
}
