use clap::Parser;
use gqldoc_render::{SchemaError, TypeDescriptor, try_render_type};

use crate::options::{RenderOpts, SchemaOpt};
use crate::{GqldocError, GqldocOutput, GqldocResult, Suggestion};

/// Names scoring below this are too far off to suggest.
const CLOSEST_NAME_THRESHOLD: f64 = 0.8;

#[derive(Debug, Parser)]
pub struct Print {
    /// Name of the type to document, as spelled in the schema
    #[arg(value_name = "TYPE")]
    type_name: String,

    #[command(flatten)]
    schema: SchemaOpt,

    #[command(flatten)]
    render: RenderOpts,
}

impl Print {
    pub fn run(&self) -> GqldocResult<GqldocOutput> {
        let types = self.schema.load()?;
        tracing::debug!(type_name = %self.type_name, base_url = %self.render.base_url, "rendering type");

        match try_render_type(
            &self.type_name,
            self.render.options(),
            &types,
            &self.render.base_url,
        ) {
            Ok(markdown) => Ok(GqldocOutput::Markdown {
                type_name: self.type_name.clone(),
                markdown,
            }),
            Err(error @ SchemaError::TypeNotFound(_)) => {
                Err(GqldocError::new(error).with_suggestion(Suggestion::ListTypes {
                    schema: self.schema.schema.to_string(),
                    closest: closest_name(&self.type_name, &types).map(str::to_string),
                }))
            }
            Err(error) => Err(error.into()),
        }
    }
}

/// The type name most similar to `wanted`, compared without case.
fn closest_name<'a>(wanted: &str, types: &'a [TypeDescriptor]) -> Option<&'a str> {
    let wanted = wanted.to_lowercase();
    types
        .iter()
        .map(TypeDescriptor::name)
        .filter(|name| !name.starts_with("__"))
        .map(|name| (name, strsim::jaro_winkler(&wanted, &name.to_lowercase())))
        .filter(|(_, score)| *score >= CLOSEST_NAME_THRESHOLD)
        .max_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(name, _)| name)
}
