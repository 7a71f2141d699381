//! GraphQL output types and SDL rendering.

use indexmap::IndexMap;
use std::fmt;

const INDENT: &str = "  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scalar {
    Boolean,
    Int,
    String,
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Scalar::Boolean => "Boolean",
            Scalar::Int => "Int",
            Scalar::String => "String",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphQLType {
    Named(Scalar),
    List(Box<GraphQLType>),
    NonNull(Box<GraphQLType>),
}

impl GraphQLType {
    pub fn list(item: GraphQLType) -> Self {
        GraphQLType::List(Box::new(item))
    }

    /// Wraps in non-null. Already non-null types are returned as is.
    pub fn non_null(self) -> Self {
        match self {
            GraphQLType::NonNull(_) => self,
            other => GraphQLType::NonNull(Box::new(other)),
        }
    }
}

impl From<Scalar> for GraphQLType {
    fn from(scalar: Scalar) -> Self {
        GraphQLType::Named(scalar)
    }
}

impl fmt::Display for GraphQLType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphQLType::Named(scalar) => write!(f, "{scalar}"),
            GraphQLType::List(item) => write!(f, "[{item}]"),
            GraphQLType::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub type_: GraphQLType,
    pub description: Option<String>,
}

/// A GraphQL object type. Fields render in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectType {
    pub name: String,
    pub description: Option<String>,
    pub fields: IndexMap<String, Field>,
}

impl ObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: IndexMap::new(),
        }
    }

    pub fn contains_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn push_field(&mut self, name: impl Into<String>, field: Field) {
        self.fields.insert(name.into(), field);
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(description) = &self.description {
            write_description(f, description, "")?;
        }
        write!(f, "type {}", self.name)?;

        if self.fields.is_empty() {
            return Ok(());
        }

        f.write_str(" {\n")?;
        for (name, field) in &self.fields {
            if let Some(description) = &field.description {
                write_description(f, description, INDENT)?;
            }
            writeln!(f, "{INDENT}{name}: {}", field.type_)?;
        }
        f.write_str("}")
    }
}

fn write_description(f: &mut fmt::Formatter<'_>, description: &str, indent: &str) -> fmt::Result {
    let escaped = description.replace("\"\"\"", "\\\"\"\"");

    // A trailing quote or backslash would merge with the closing `"""`.
    let single_line = !escaped.contains('\n') && !escaped.ends_with(['"', '\\']);
    if single_line {
        return writeln!(f, "{indent}\"\"\"{escaped}\"\"\"");
    }

    writeln!(f, "{indent}\"\"\"")?;
    for line in escaped.lines() {
        if line.is_empty() {
            writeln!(f)?;
        } else {
            writeln!(f, "{indent}{line}")?;
        }
    }
    writeln!(f, "{indent}\"\"\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(type_: GraphQLType) -> Field {
        Field {
            type_,
            description: None,
        }
    }

    #[test]
    fn test_type_wrappers() {
        let list = GraphQLType::list(GraphQLType::from(Scalar::String).non_null()).non_null();
        assert_eq!(list.to_string(), "[String!]!");

        let nullable_items = GraphQLType::list(Scalar::Int.into());
        assert_eq!(nullable_items.to_string(), "[Int]");

        let once = GraphQLType::from(Scalar::Boolean).non_null().non_null();
        assert_eq!(once.to_string(), "Boolean!");
    }

    #[test]
    fn test_render_object_type() {
        let mut object = ObjectType::new("Product");
        object.push_field("title", field(GraphQLType::from(Scalar::String).non_null()));
        object.push_field("shipping", field(Scalar::String.into()));

        assert_eq!(
            object.to_string(),
            "type Product {\n  title: String!\n  shipping: String\n}"
        );
    }

    #[test]
    fn test_render_without_fields() {
        assert_eq!(ObjectType::new("Empty").to_string(), "type Empty");
    }

    #[test]
    fn test_description_ending_in_quote_uses_block_form() {
        let mut object = ObjectType::new("Greeting");
        object.push_field(
            "a",
            Field {
                type_: Scalar::String.into(),
                description: Some("Say \"hi\"".to_string()),
            },
        );
        object.push_field(
            "b",
            Field {
                type_: Scalar::String.into(),
                description: Some("C:\\".to_string()),
            },
        );

        assert_eq!(
            object.to_string(),
            "type Greeting {\n  \"\"\"\n  Say \"hi\"\n  \"\"\"\n  a: String\n  \"\"\"\n  C:\\\n  \"\"\"\n  b: String\n}"
        );
    }

    #[test]
    fn test_render_descriptions() {
        let mut object = ObjectType::new("Product");
        object.description = Some("A sellable item".to_string());
        object.push_field(
            "title",
            Field {
                type_: Scalar::String.into(),
                description: Some("Display name\nshown in listings".to_string()),
            },
        );

        assert_eq!(
            object.to_string(),
            "\"\"\"A sellable item\"\"\"\ntype Product {\n  \"\"\"\n  Display name\n  shown in listings\n  \"\"\"\n  title: String\n}"
        );
    }
}
