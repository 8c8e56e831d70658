mod suggestion;

pub use suggestion::Suggestion;

pub type GqldocResult<T> = std::result::Result<T, GqldocError>;

use calm_io::stderr;
use gqldoc_render::SchemaError;
use serde_json::{Value, json};

use std::fmt::{self, Debug, Display};
use std::io;

use crate::style::Style;

/// A specialized `Error` type for gqldoc that wraps `anyhow`
/// and carries an optional hint on how to get past it.
#[derive(Debug)]
pub struct GqldocError {
    error: anyhow::Error,
    suggestion: Option<Suggestion>,
}

impl GqldocError {
    pub fn new<E>(error: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        let error = error.into();
        let suggestion = suggestion_for(&error);
        Self { error, suggestion }
    }

    pub fn set_suggestion(&mut self, suggestion: Suggestion) {
        self.suggestion = Some(suggestion);
    }

    pub fn with_suggestion(mut self, suggestion: Suggestion) -> Self {
        self.set_suggestion(suggestion);
        self
    }

    pub const fn suggestion(&self) -> Option<&Suggestion> {
        self.suggestion.as_ref()
    }

    pub fn message(&self) -> String {
        format!("{:#}", self.error)
    }

    pub fn print(&self) -> io::Result<()> {
        stderr!("{}", self)?;
        Ok(())
    }

    pub fn get_json(&self) -> Value {
        json!({
            "message": self.message(),
            "suggestion": self.suggestion.as_ref().map(ToString::to_string),
        })
    }
}

fn suggestion_for(error: &anyhow::Error) -> Option<Suggestion> {
    match error.downcast_ref::<SchemaError>()? {
        SchemaError::InvalidIntrospection(_) | SchemaError::Json(_) => {
            Some(Suggestion::CheckIntrospectionResult)
        }
        SchemaError::ParseError(_) => Some(Suggestion::FixSchemaSyntax),
        SchemaError::TypeNotFound(_) | SchemaError::InvalidBaseUrl { .. } => None,
    }
}

impl Display for GqldocError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let error_descriptor = Style::ErrorPrefix.paint("error:");
        writeln!(formatter, "{} {:#}", error_descriptor, &self.error)?;

        if let Some(suggestion) = &self.suggestion {
            writeln!(formatter, "        {} {}", Style::HintPrefix.paint("HINT:"), suggestion)?;
        }
        Ok(())
    }
}

impl<E: Into<anyhow::Error>> From<E> for GqldocError {
    fn from(error: E) -> Self {
        Self::new(error)
    }
}
