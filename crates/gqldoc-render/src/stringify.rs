//! Markdown tables for the members of a type.

use std::fmt::{self, Display};

use itertools::Itertools;

use crate::{
    link::{PageBase, build_type_link},
    resolve::resolve_named_type,
    types::{EnumValueDescriptor, FieldDescriptor, TypeDescriptor},
};

const INDENT: &str = "&nbsp; &nbsp; ";

/// The keyword shown in front of the name of a type that owns fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOwner {
    Type,
    Interface,
}

impl FieldOwner {
    pub const fn label(&self) -> &'static str {
        match self {
            FieldOwner::Type => "type",
            FieldOwner::Interface => "interface",
        }
    }
}

impl Display for FieldOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Render `fields` as a table headed by the owning type.
///
/// Every field type is linked to its own page. Rows are ordered by their
/// rendered text, which is not always the order of the field names: `id2`
/// sorts before `id` because its row continues with `2` where the other
/// continues with `:`.
pub fn stringify_fields(
    fields: &[FieldDescriptor],
    all_types: &[TypeDescriptor],
    parent_name: &str,
    parent_kind: FieldOwner,
    show_descriptions: bool,
    page_base: &PageBase,
) -> String {
    let parent = build_type_link(parent_name, all_types, page_base);
    let mut out = if show_descriptions {
        format!("| **`{parent_kind}`** {parent} `{{` | |\n|-|-|\n")
    } else {
        format!("| **`{parent_kind}`** {parent} `{{` |\n|-|\n")
    };

    let rows = fields
        .iter()
        .map(|field| {
            let type_name = field
                .ty
                .as_ref()
                .and_then(resolve_named_type)
                .unwrap_or_else(|| {
                    tracing::debug!(parent_name, field = %field.name, "field type has no name");
                    ""
                });
            let ty = build_type_link(type_name, all_types, page_base);
            if show_descriptions {
                format!(
                    "| {INDENT}`{}:` {ty} | {} |\n",
                    field.name,
                    table_cell(field.description.as_deref())
                )
            } else {
                format!("| {INDENT}`{}:` {ty} |\n", field.name)
            }
        })
        .sorted();
    out.extend(rows);

    out.push_str(closing_row(show_descriptions));
    out
}

/// Render enum values as table rows, in declaration order.
///
/// The opening row naming the enum belongs to the caller. The returned text
/// starts at the delimiter row and ends with the closing brace row.
pub fn stringify_values(enum_values: &[EnumValueDescriptor], show_descriptions: bool) -> String {
    let mut out = String::from(if show_descriptions { "|-|-|\n" } else { "|-|\n" });
    for value in enum_values {
        if show_descriptions {
            out.push_str(&format!(
                "| {INDENT}`{}` | {} |\n",
                value.name,
                table_cell(value.description.as_deref())
            ));
        } else {
            out.push_str(&format!("| {INDENT}`{}` |\n", value.name));
        }
    }
    out.push_str(closing_row(show_descriptions));
    out
}

const fn closing_row(show_descriptions: bool) -> &'static str {
    if show_descriptions {
        "| `}` | |\n"
    } else {
        "| `}` |\n"
    }
}

/// Keep description text on one table row.
fn table_cell(description: Option<&str>) -> String {
    single_line(description.unwrap_or_default()).replace('|', "\\|")
}

/// Replace line breaks with spaces so `text` stays inside one markdown block.
pub(crate) fn single_line(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\r', '\n'], " ")
}
