//! Renders the types of a GraphQL schema as markdown, with every referenced
//! type linked to its own documentation page.
//!
//! ## Example
//! ```rust
//! use gqldoc_render::{PageBase, RenderOptions, introspection, render_type};
//!
//! let types = introspection::parse_types(
//!     r#"[{"kind": "ENUM", "name": "Color", "enumValues": [{"name": "RED"}]}]"#,
//! )
//! .unwrap();
//! let page_base = PageBase::parse("http://localhost:3000").unwrap();
//! let options = RenderOptions::builder().show_descriptions(false).build();
//!
//! let markdown = render_type("Color", options, &types, &page_base);
//! assert!(markdown.contains("`RED`"));
//! ```

pub mod error;
pub mod introspection;
pub mod link;
pub mod overview;
pub mod render;
pub mod resolve;
pub mod sdl;
pub mod stringify;
pub mod types;

// Re-export main public types
pub use error::SchemaError;
pub use link::{PageBase, TypeLink, build_type_link};
pub use overview::SchemaOverview;
pub use render::{RenderOptions, render_type, try_render_type};
pub use resolve::resolve_named_type;
pub use stringify::{FieldOwner, stringify_fields, stringify_values};
pub use types::{TypeDescriptor, TypeKind, TypeRef};
