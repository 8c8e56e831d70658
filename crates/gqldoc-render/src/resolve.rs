use crate::types::TypeRef;

/// Find the named type a reference points at, peeling `NON_NULL` and `LIST`
/// layers until one exposes a name.
///
/// For example: `[String!]!` → `String`, `Post` → `Post`.
///
/// Returns `None` when the chain of layers ends without a name.
pub fn resolve_named_type(reference: &TypeRef) -> Option<&str> {
    let mut current = reference;
    loop {
        if let Some(name) = current.name.as_deref().filter(|name| !name.is_empty()) {
            return Some(name);
        }
        current = current.of_type.as_deref()?;
    }
}
