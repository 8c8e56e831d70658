use std::collections::BTreeMap;

use crate::types::{TypeDescriptor, TypeKind};

const BUILTIN_SCALARS: [&str; 5] = ["String", "Int", "Float", "Boolean", "ID"];

/// Type names of a schema grouped by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaOverview {
    by_kind: BTreeMap<TypeKind, Vec<String>>,
}

impl SchemaOverview {
    /// Group the names of `types`, sorted within each kind.
    ///
    /// Introspection types (`__Schema`, `__Type`, ...) and the built-in
    /// scalars are left out unless `include_builtins` is set.
    pub fn new(types: &[TypeDescriptor], include_builtins: bool) -> Self {
        let mut by_kind: BTreeMap<TypeKind, Vec<String>> = BTreeMap::new();
        for ty in types {
            let name = ty.name();
            if !include_builtins && is_builtin(name) {
                continue;
            }
            by_kind.entry(ty.kind()).or_default().push(name.to_string());
        }
        for names in by_kind.values_mut() {
            names.sort();
        }
        Self { by_kind }
    }

    /// Names of the given kind, empty when the schema has none.
    pub fn names(&self, kind: TypeKind) -> &[String] {
        self.by_kind.get(&kind).map(Vec::as_slice).unwrap_or_default()
    }

    /// Every non-empty group, in [`TypeKind::ALL`] order.
    pub fn groups(&self) -> impl Iterator<Item = (TypeKind, &[String])> {
        TypeKind::ALL
            .into_iter()
            .map(|kind| (kind, self.names(kind)))
            .filter(|(_, names)| !names.is_empty())
    }

    pub fn total(&self) -> usize {
        self.by_kind.values().map(Vec::len).sum()
    }
}

fn is_builtin(name: &str) -> bool {
    name.starts_with("__") || BUILTIN_SCALARS.contains(&name)
}
