use std::fmt::{self, Display};

use crate::style::Style;

/// A hint printed under an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suggestion {
    /// The requested type isn't in the schema.
    ListTypes {
        schema: String,
        closest: Option<String>,
    },
    CheckIntrospectionResult,
    FixSchemaSyntax,
}

impl Display for Suggestion {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suggestion = match self {
            Suggestion::ListTypes { schema, closest } => {
                let list = Style::Command.paint(format!("gqldoc list --schema {schema}"));
                match closest {
                    Some(name) => format!(
                        "Did you mean {}? Run {list} to see every type.",
                        Style::Command.paint(name)
                    ),
                    None => format!("Run {list} to see every type."),
                }
            }
            Suggestion::CheckIntrospectionResult => format!(
                "Make sure the file holds the JSON result of an introspection query, shaped like {}.",
                Style::Command.paint(r#"{"data": {"__schema": {"types": [...]}}}"#)
            ),
            Suggestion::FixSchemaSyntax => {
                "Fix the syntax errors in the schema, or pass an introspection result instead."
                    .to_string()
            }
        };
        write!(formatter, "{}", &suggestion)
    }
}
