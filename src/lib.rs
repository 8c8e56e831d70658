pub mod cli;
pub mod command;
mod error;
pub mod options;
mod style;

pub use command::output::GqldocOutput;
pub use error::{GqldocError, GqldocResult, Suggestion};

pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
