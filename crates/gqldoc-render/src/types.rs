//! Schema model for the `types` list of an introspection result.
//!
//! Introspection describes every type with the same flat record and a `kind`
//! tag. Here each kind is its own variant and only carries the children that
//! kind can have.

use serde::Deserialize;
use serde_with::{DefaultOnError, DefaultOnNull, serde_as};

/// One named type of a schema.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeDescriptor {
    Scalar(ScalarType),
    Object(ObjectType),
    InputObject(InputObjectType),
    Interface(InterfaceType),
    Union(UnionType),
    Enum(EnumType),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScalarType {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ObjectType {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputObjectType {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub input_fields: Vec<FieldDescriptor>,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InterfaceType {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnionType {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub possible_types: Vec<PossibleType>,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumType {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub enum_values: Vec<EnumValueDescriptor>,
}

/// A field of an object or interface, or an input field of an input object.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// A reference that fails to decode is kept as absent.
    #[serde_as(as = "DefaultOnError")]
    #[serde(rename = "type", default)]
    pub ty: Option<TypeRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EnumValueDescriptor {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A union member, referenced by name only.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PossibleType {
    pub name: String,
}

/// A possibly wrapped reference to a named type.
///
/// `NON_NULL` and `LIST` layers have no `name` and point at the wrapped
/// reference through `ofType`. The innermost layer carries the name.
/// `kind` is informational; resolution only follows `name` and `ofType`.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeRef {
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub of_type: Option<Box<TypeRef>>,
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            kind: None,
            name: Some(name.into()),
            of_type: None,
        }
    }

    /// A nameless layer of unknown kind around `inner`.
    pub fn wrapping(inner: TypeRef) -> Self {
        Self {
            kind: None,
            name: None,
            of_type: Some(Box::new(inner)),
        }
    }

    pub fn non_null(inner: TypeRef) -> Self {
        Self {
            kind: Some("NON_NULL".to_string()),
            ..Self::wrapping(inner)
        }
    }

    pub fn list(inner: TypeRef) -> Self {
        Self {
            kind: Some("LIST".to_string()),
            ..Self::wrapping(inner)
        }
    }
}

/// The structural category of a [`TypeDescriptor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TypeKind {
    Object,
    InputObject,
    Interface,
    Union,
    Enum,
    Scalar,
}

impl TypeKind {
    pub const ALL: [TypeKind; 6] = [
        TypeKind::Object,
        TypeKind::InputObject,
        TypeKind::Interface,
        TypeKind::Union,
        TypeKind::Enum,
        TypeKind::Scalar,
    ];

    pub const fn label(&self) -> &'static str {
        match self {
            TypeKind::Object => "OBJECT",
            TypeKind::InputObject => "INPUT_OBJECT",
            TypeKind::Interface => "INTERFACE",
            TypeKind::Union => "UNION",
            TypeKind::Enum => "ENUM",
            TypeKind::Scalar => "SCALAR",
        }
    }
}

impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl TypeDescriptor {
    pub fn name(&self) -> &str {
        match self {
            TypeDescriptor::Scalar(t) => &t.name,
            TypeDescriptor::Object(t) => &t.name,
            TypeDescriptor::InputObject(t) => &t.name,
            TypeDescriptor::Interface(t) => &t.name,
            TypeDescriptor::Union(t) => &t.name,
            TypeDescriptor::Enum(t) => &t.name,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            TypeDescriptor::Scalar(t) => t.description.as_deref(),
            TypeDescriptor::Object(t) => t.description.as_deref(),
            TypeDescriptor::InputObject(t) => t.description.as_deref(),
            TypeDescriptor::Interface(t) => t.description.as_deref(),
            TypeDescriptor::Union(t) => t.description.as_deref(),
            TypeDescriptor::Enum(t) => t.description.as_deref(),
        }
    }

    pub const fn kind(&self) -> TypeKind {
        match self {
            TypeDescriptor::Scalar(_) => TypeKind::Scalar,
            TypeDescriptor::Object(_) => TypeKind::Object,
            TypeDescriptor::InputObject(_) => TypeKind::InputObject,
            TypeDescriptor::Interface(_) => TypeKind::Interface,
            TypeDescriptor::Union(_) => TypeKind::Union,
            TypeDescriptor::Enum(_) => TypeKind::Enum,
        }
    }
}
