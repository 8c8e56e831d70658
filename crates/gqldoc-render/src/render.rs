use bon::Builder;
use itertools::Itertools;

use crate::{
    error::SchemaError,
    link::PageBase,
    stringify::{FieldOwner, single_line, stringify_fields, stringify_values},
    types::TypeDescriptor,
};

/// What to include when rendering a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder)]
pub struct RenderOptions {
    /// Start with the type's name and description.
    #[builder(default = true)]
    pub show_header: bool,
    /// Add a description column to field and enum value tables.
    #[builder(default = true)]
    pub show_descriptions: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_header: true,
            show_descriptions: true,
        }
    }
}

/// Render the type named `type_name` as markdown.
///
/// Returns an empty string when no type has that name; see
/// [`try_render_type`] to tell that apart from a rendered type.
pub fn render_type(
    type_name: &str,
    options: RenderOptions,
    all_types: &[TypeDescriptor],
    page_base: &PageBase,
) -> String {
    try_render_type(type_name, options, all_types, page_base).unwrap_or_else(|error| {
        tracing::debug!(%error, "rendering nothing");
        String::new()
    })
}

/// Render the type named `type_name` as markdown, or fail with
/// [`SchemaError::TypeNotFound`].
///
/// Names are expected to be unique. If several types share the name, each is
/// rendered and the blocks are joined in sorted order.
pub fn try_render_type(
    type_name: &str,
    options: RenderOptions,
    all_types: &[TypeDescriptor],
    page_base: &PageBase,
) -> Result<String, SchemaError> {
    let blocks: Vec<String> = all_types
        .iter()
        .filter(|ty| ty.name() == type_name)
        .map(|ty| render_block(ty, options, all_types, page_base))
        .sorted()
        .collect();

    if blocks.is_empty() {
        return Err(SchemaError::TypeNotFound(type_name.to_string()));
    }
    Ok(blocks.concat())
}

/// The bold name line opening a rendered type: `**Name**: *description*`.
///
/// Scalars put their description in the body instead, so their header is the
/// name alone. So is the header of a type without a description. Line
/// breaks in the description become spaces so the header stays one paragraph.
pub fn header_line(ty: &TypeDescriptor) -> String {
    match (ty, non_empty(ty.description())) {
        (TypeDescriptor::Scalar(_), _) | (_, None) => format!("**{}**", ty.name()),
        (_, Some(description)) => {
            format!("**{}**: *{}*", ty.name(), single_line(description))
        }
    }
}

fn render_block(
    ty: &TypeDescriptor,
    options: RenderOptions,
    all_types: &[TypeDescriptor],
    page_base: &PageBase,
) -> String {
    let show_descriptions = options.show_descriptions;
    let body = match ty {
        TypeDescriptor::Enum(enum_type) => {
            let second_cell = if show_descriptions { " |" } else { "" };
            format!(
                "| **`enum`** `{}` `{{` |{second_cell}\n{}",
                enum_type.name,
                stringify_values(&enum_type.enum_values, show_descriptions)
            )
        }
        TypeDescriptor::Object(object) => stringify_fields(
            &object.fields,
            all_types,
            &object.name,
            FieldOwner::Type,
            show_descriptions,
            page_base,
        ),
        TypeDescriptor::InputObject(input) => stringify_fields(
            &input.input_fields,
            all_types,
            &input.name,
            FieldOwner::Type,
            show_descriptions,
            page_base,
        ),
        TypeDescriptor::Interface(interface) => stringify_fields(
            &interface.fields,
            all_types,
            &interface.name,
            FieldOwner::Interface,
            show_descriptions,
            page_base,
        ),
        TypeDescriptor::Union(union) => {
            if union.possible_types.is_empty() {
                format!("**`union`** `{}`\n", union.name)
            } else {
                let members = union
                    .possible_types
                    .iter()
                    .map(|member| format!("`{}`", member.name))
                    .join(" | ");
                format!("**`union`** `{}` = {members}\n", union.name)
            }
        }
        TypeDescriptor::Scalar(scalar) => match non_empty(scalar.description.as_deref()) {
            Some(description) => format!("`{}`: {description}\n", scalar.name),
            None => format!("`{}`\n", scalar.name),
        },
    };

    if options.show_header {
        format!("{}\n\n{body}", header_line(ty))
    } else {
        body
    }
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|text| !text.trim().is_empty())
}
