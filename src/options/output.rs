use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Markdown or plain text meant for people and other tools
    #[default]
    Plain,
    /// A JSON document with the result or the error
    Json,
}

#[derive(Debug, Parser)]
pub struct OutputOpts {
    /// Specify gqldoc's output format
    #[arg(long = "format", global = true, value_enum, default_value_t)]
    pub format: OutputFormat,
}
