use clap::{
    Parser,
    builder::{PossibleValuesParser, TypedValueParser},
};
use timber::{LEVELS, Level};

use crate::command::{self, GqldocOutput};
use crate::options::{OutputFormat, OutputOpts};
use crate::GqldocResult;

#[derive(Debug, Parser)]
#[command(
    name = "gqldoc",
    version,
    about = "
gqldoc - markdown documentation for GraphQL schemas

Print one type of a schema as markdown, with every type it references linked
to that type's own page:

    $ gqldoc print User --schema introspection.json

See which types a schema defines:

    $ gqldoc list --schema schema.graphql
"
)]
pub struct Gqldoc {
    #[command(subcommand)]
    pub command: Command,

    /// Specify gqldoc's log level
    #[arg(
        long = "log",
        short = 'l',
        global = true,
        env = "GQLDOC_LOG_LEVEL",
        ignore_case = true,
        value_parser = PossibleValuesParser::new(LEVELS).try_map(|level| level.parse::<Level>())
    )]
    pub log_level: Option<Level>,

    #[command(flatten)]
    output_opts: OutputOpts,
}

#[derive(Debug, Parser)]
pub enum Command {
    /// Print the markdown documentation of one type
    Print(command::Print),

    /// List the types a schema defines, grouped by kind
    List(command::List),
}

impl Gqldoc {
    pub fn run(&self) -> GqldocResult<GqldocOutput> {
        match &self.command {
            Command::Print(command) => command.run(),
            Command::List(command) => command.run(),
        }
    }

    pub const fn format(&self) -> OutputFormat {
        self.output_opts.format
    }
}
