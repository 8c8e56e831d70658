use clap::Parser;
use gqldoc_render::SchemaOverview;

use crate::options::SchemaOpt;
use crate::{GqldocOutput, GqldocResult};

#[derive(Debug, Parser)]
pub struct List {
    #[command(flatten)]
    schema: SchemaOpt,

    /// Also list the built-in scalars and the introspection types
    #[arg(long = "include-builtins")]
    include_builtins: bool,
}

impl List {
    pub fn run(&self) -> GqldocResult<GqldocOutput> {
        let types = self.schema.load()?;
        let overview = SchemaOverview::new(&types, self.include_builtins);
        tracing::debug!(total = overview.total(), "listing types");
        Ok(GqldocOutput::TypeList(overview))
    }
}
