//! Loading schema types from an introspection result.

use serde_json::Value;

use crate::{error::SchemaError, types::TypeDescriptor};

/// Read the `types` list of an introspection result.
///
/// Accepts a whole GraphQL response (`{"data": {"__schema": ...}}`), the
/// `__schema` object with or without its wrapper, or the bare array of types.
/// Entries that don't describe a known kind of named type are skipped.
pub fn parse_types(json: &str) -> Result<Vec<TypeDescriptor>, SchemaError> {
    let document: Value = serde_json::from_str(json)?;
    let entries = types_array(document)?;

    let mut types = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<TypeDescriptor>(entry) {
            Ok(ty) => types.push(ty),
            Err(error) => tracing::warn!(index, %error, "skipping introspection type"),
        }
    }
    tracing::debug!(count = types.len(), "loaded introspection types");
    Ok(types)
}

fn types_array(mut document: Value) -> Result<Vec<Value>, SchemaError> {
    if let Some(messages) = response_errors(&document) {
        return Err(SchemaError::InvalidIntrospection(format!(
            "the introspection query failed: {messages}"
        )));
    }

    for key in ["data", "__schema", "types"] {
        if let Some(inner) = document.get_mut(key).map(Value::take) {
            document = inner;
        }
    }

    match document {
        Value::Array(entries) => Ok(entries),
        other => Err(SchemaError::InvalidIntrospection(format!(
            "expected a list of types, found {}",
            json_kind(&other)
        ))),
    }
}

/// Messages of a GraphQL response that carries errors and no data.
fn response_errors(document: &Value) -> Option<String> {
    let errors = document.get("errors")?.as_array()?;
    if errors.is_empty() || document.get("data").is_some_and(|data| !data.is_null()) {
        return None;
    }
    let messages: Vec<&str> = errors
        .iter()
        .filter_map(|error| error.get("message")?.as_str())
        .collect();
    Some(if messages.is_empty() {
        "no error message given".to_string()
    } else {
        messages.join("; ")
    })
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
