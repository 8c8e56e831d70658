use std::{fs, io::Read};

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use gqldoc_render::{TypeDescriptor, introspection, sdl};

use crate::GqldocResult;

#[derive(Debug, Parser)]
pub struct SchemaOpt {
    /// The schema to document: the JSON result of an introspection query, or
    /// SDL in a `.graphql`, `.graphqls`, `.gql` or `.sdl` file.
    /// Pass `-` to read introspection JSON from stdin.
    #[arg(long = "schema", short = 's', value_name = "PATH", env = "GQLDOC_SCHEMA")]
    pub schema: Utf8PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SchemaFormat {
    Introspection,
    Sdl,
}

impl SchemaFormat {
    fn from_path(path: &Utf8Path) -> Self {
        match path.extension().map(str::to_ascii_lowercase).as_deref() {
            Some("graphql" | "graphqls" | "gql" | "sdl") => SchemaFormat::Sdl,
            _ => SchemaFormat::Introspection,
        }
    }
}

impl SchemaOpt {
    pub fn load(&self) -> GqldocResult<Vec<TypeDescriptor>> {
        let source = self.read()?;
        let format = SchemaFormat::from_path(&self.schema);
        tracing::debug!(schema = %self.schema, ?format, "parsing schema");

        let types = match format {
            SchemaFormat::Sdl => sdl::parse_types(&source, self.schema.as_str())?,
            SchemaFormat::Introspection => introspection::parse_types(&source)?,
        };
        tracing::info!(schema = %self.schema, types = types.len(), "loaded schema");
        Ok(types)
    }

    fn read(&self) -> GqldocResult<String> {
        if self.is_stdin() {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("Could not read the schema from stdin")?;
            return Ok(source);
        }
        let source = fs::read_to_string(&self.schema)
            .with_context(|| format!("Could not read schema file {}", self.schema))?;
        Ok(source)
    }

    fn is_stdin(&self) -> bool {
        self.schema.as_str() == "-"
    }
}
