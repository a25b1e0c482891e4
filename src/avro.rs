use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use crate::error::SchemaError;

/// Root of an AVPR document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Protocol {
    #[serde(rename = "protocol")]
    pub name: String,
    #[serde(default)]
    pub doc: Option<String>,
    pub types: Vec<TypeDefinition>,
}

impl FromStr for Protocol {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

/// One named type declared in the protocol's `types` list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawTypeDefinition")]
pub struct TypeDefinition {
    pub name: String,
    pub doc: Option<String>,
    pub kind: TypeKind,
}

/// Kind-specific payload of a [`TypeDefinition`].
#[derive(Debug, Clone, PartialEq)]
pub enum TypeKind {
    Record(Vec<Field>),
    Enum(Vec<String>),
    Fixed(u64),
    /// Any other tag (`error`, primitives, ...). Rendered without a body.
    Other(String),
}

impl TypeKind {
    /// The literal Avro `type` tag.
    pub fn tag(&self) -> &str {
        match self {
            TypeKind::Record(_) => "record",
            TypeKind::Enum(_) => "enum",
            TypeKind::Fixed(_) => "fixed",
            TypeKind::Other(tag) => tag,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: TypeExpr,
    #[serde(default)]
    pub doc: Option<String>,
}

/// An Avro type expression as used in field declarations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Value")]
pub enum TypeExpr {
    /// Primitive name or reference to a named type.
    Named(String),
    Array(Box<TypeExpr>),
    Map(Box<TypeExpr>),
    Union(Vec<TypeExpr>),
}

impl TypeExpr {
    /// Decode a type expression from its JSON shape.
    pub fn from_json(value: &Value) -> Result<Self, SchemaError> {
        match value {
            Value::String(name) => Ok(TypeExpr::Named(name.clone())),
            Value::Array(members) => members
                .iter()
                .map(TypeExpr::from_json)
                .collect::<Result<Vec<_>, _>>()
                .map(TypeExpr::Union),
            Value::Object(obj) => match obj.get("type") {
                Some(Value::String(tag)) => match tag.as_str() {
                    "array" => Ok(TypeExpr::Array(Box::new(nested(obj, "array", "items")?))),
                    "map" => Ok(TypeExpr::Map(Box::new(nested(obj, "map", "values")?))),
                    other => Err(SchemaError::UnsupportedType(other.to_string())),
                },
                _ => Err(SchemaError::InvalidTypeExpression(format!(
                    "object without a string `type`: {value}"
                ))),
            },
            other => Err(SchemaError::InvalidTypeExpression(other.to_string())),
        }
    }
}

fn nested(obj: &Map<String, Value>, tag: &str, key: &str) -> Result<TypeExpr, SchemaError> {
    let inner = obj.get(key).ok_or_else(|| {
        SchemaError::InvalidTypeExpression(format!("`{tag}` without `{key}`"))
    })?;
    TypeExpr::from_json(inner)
}

impl TryFrom<Value> for TypeExpr {
    type Error = SchemaError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        TypeExpr::from_json(&value)
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::converter::types::render_type(self))
    }
}

// Kind-specific attributes stay raw so that tags we do not render
// (e.g. `error`) are never rejected for their contents.
#[derive(Deserialize)]
struct RawTypeDefinition {
    #[serde(rename = "type")]
    tag: String,
    name: String,
    #[serde(default)]
    doc: Option<String>,
    #[serde(default)]
    fields: Option<Value>,
    #[serde(default)]
    symbols: Option<Value>,
    #[serde(default)]
    size: Option<Value>,
}

impl TryFrom<RawTypeDefinition> for TypeDefinition {
    type Error = SchemaError;

    fn try_from(raw: RawTypeDefinition) -> Result<Self, Self::Error> {
        let kind = match raw.tag.as_str() {
            "record" => TypeKind::Record(attribute(&raw.name, "record", "fields", raw.fields)?),
            "enum" => TypeKind::Enum(attribute(&raw.name, "enum", "symbols", raw.symbols)?),
            "fixed" => TypeKind::Fixed(attribute(&raw.name, "fixed", "size", raw.size)?),
            _ => TypeKind::Other(raw.tag),
        };
        Ok(TypeDefinition {
            name: raw.name,
            doc: raw.doc,
            kind,
        })
    }
}

fn attribute<T: serde::de::DeserializeOwned>(
    name: &str,
    kind: &'static str,
    key: &'static str,
    value: Option<Value>,
) -> Result<T, SchemaError> {
    let value = value.ok_or_else(|| SchemaError::MissingAttribute {
        kind,
        name: name.to_string(),
        attribute: key,
    })?;
    serde_json::from_value(value).map_err(|e| SchemaError::InvalidAttribute {
        kind,
        name: name.to_string(),
        attribute: key,
        reason: e.to_string(),
    })
}
