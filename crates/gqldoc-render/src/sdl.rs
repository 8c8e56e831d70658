//! Building the schema model from SDL.

use apollo_compiler::{
    Schema, ast,
    schema::{ExtendedType, FieldDefinition, InputValueDefinition},
};

use crate::{
    error::SchemaError,
    types::{
        EnumType, EnumValueDescriptor, FieldDescriptor, InputObjectType, InterfaceType,
        ObjectType, PossibleType, ScalarType, TypeDescriptor, TypeRef, UnionType,
    },
};

/// Parse SDL into the same list of types an introspection query returns,
/// built-in scalars and introspection types included.
///
/// A schema with parse errors still yields its readable definitions; the
/// errors are logged. It is only an error when nothing but built-ins remain.
pub fn parse_types(sdl: &str, path: &str) -> Result<Vec<TypeDescriptor>, SchemaError> {
    let schema = match Schema::parse(sdl, path) {
        Ok(schema) => schema,
        Err(with_errors) => {
            tracing::warn!(path, errors = %with_errors.errors, "schema has errors");
            if with_errors
                .partial
                .types
                .values()
                .all(ExtendedType::is_built_in)
            {
                return Err(SchemaError::ParseError(with_errors.errors.to_string()));
            }
            with_errors.partial
        }
    };

    Ok(schema.types.values().map(descriptor).collect())
}

fn descriptor(ty: &ExtendedType) -> TypeDescriptor {
    match ty {
        ExtendedType::Scalar(scalar) => TypeDescriptor::Scalar(ScalarType {
            name: scalar.name.to_string(),
            description: description(&scalar.description),
        }),
        ExtendedType::Object(object) => TypeDescriptor::Object(ObjectType {
            name: object.name.to_string(),
            description: description(&object.description),
            fields: object.fields.values().map(|f| field(f)).collect(),
        }),
        ExtendedType::Interface(interface) => TypeDescriptor::Interface(InterfaceType {
            name: interface.name.to_string(),
            description: description(&interface.description),
            fields: interface.fields.values().map(|f| field(f)).collect(),
        }),
        ExtendedType::Union(union) => TypeDescriptor::Union(UnionType {
            name: union.name.to_string(),
            description: description(&union.description),
            possible_types: union
                .members
                .iter()
                .map(|member| PossibleType {
                    name: member.to_string(),
                })
                .collect(),
        }),
        ExtendedType::Enum(enum_type) => TypeDescriptor::Enum(EnumType {
            name: enum_type.name.to_string(),
            description: description(&enum_type.description),
            enum_values: enum_type
                .values
                .iter()
                .map(|(name, value)| EnumValueDescriptor {
                    name: name.to_string(),
                    description: description(&value.description),
                })
                .collect(),
        }),
        ExtendedType::InputObject(input) => TypeDescriptor::InputObject(InputObjectType {
            name: input.name.to_string(),
            description: description(&input.description),
            input_fields: input.fields.values().map(|f| input_field(f)).collect(),
        }),
    }
}

fn description(text: &Option<apollo_compiler::Node<str>>) -> Option<String> {
    text.as_ref().map(|d| d.to_string())
}

fn field(field: &FieldDefinition) -> FieldDescriptor {
    FieldDescriptor {
        name: field.name.to_string(),
        description: description(&field.description),
        ty: Some(type_ref(&field.ty)),
    }
}

fn input_field(field: &InputValueDefinition) -> FieldDescriptor {
    FieldDescriptor {
        name: field.name.to_string(),
        description: description(&field.description),
        ty: Some(type_ref(&field.ty)),
    }
}

/// Rebuild the introspection shape of a reference: one nameless `NON_NULL`
/// layer for each `!` and one `LIST` layer for each `[...]`.
fn type_ref(ty: &ast::Type) -> TypeRef {
    match ty {
        ast::Type::Named(name) => TypeRef::named(name.as_str()),
        ast::Type::NonNullNamed(name) => TypeRef::non_null(TypeRef::named(name.as_str())),
        ast::Type::List(inner) => TypeRef::list(type_ref(inner)),
        ast::Type::NonNullList(inner) => TypeRef::non_null(TypeRef::list(type_ref(inner))),
    }
}
