mod output;
mod render;
mod schema;

pub use output::{OutputFormat, OutputOpts};
pub use render::RenderOpts;
pub use schema::SchemaOpt;
