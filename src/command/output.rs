use std::fmt::Write;
use std::io;

use calm_io::stdoutln;
use gqldoc_render::SchemaOverview;
use serde_json::{Map, Value, json};

use crate::{GqldocError, options::OutputFormat, style::Style};

/// Version of the JSON documents printed with `--format json`.
pub const JSON_VERSION: &str = "1";

/// GqldocOutput defines all of the different types of data that are printed
/// to `stdout`. Every command returns `GqldocResult<GqldocOutput>`, and the
/// printing of each kind of data lives here.
#[derive(Clone, PartialEq, Debug)]
pub enum GqldocOutput {
    Markdown { type_name: String, markdown: String },
    TypeList(SchemaOverview),
}

impl GqldocOutput {
    pub fn get_stdout(&self) -> String {
        match self {
            GqldocOutput::Markdown { markdown, .. } => markdown.clone(),
            GqldocOutput::TypeList(overview) => {
                let mut out = String::new();
                for (kind, names) in overview.groups() {
                    if !out.is_empty() {
                        out.push('\n');
                    }
                    let _ = writeln!(out, "{}", Style::Heading.paint(kind.to_string()));
                    for name in names {
                        let _ = writeln!(out, "  {name}");
                    }
                }
                out
            }
        }
    }

    pub fn get_json(&self) -> Value {
        match self {
            GqldocOutput::Markdown {
                type_name,
                markdown,
            } => json!({ "type_name": type_name, "markdown": markdown }),
            GqldocOutput::TypeList(overview) => {
                let types: Map<String, Value> = overview
                    .groups()
                    .map(|(kind, names)| (kind.to_string(), json!(names)))
                    .collect();
                json!({ "types": types, "total": overview.total() })
            }
        }
    }

    pub fn print(&self, format: OutputFormat) -> io::Result<()> {
        match format {
            OutputFormat::Plain => {
                let stdout = self.get_stdout();
                stdoutln!("{}", stdout.trim_end())
            }
            OutputFormat::Json => print_json(&JsonOutput::success(self.get_json())),
        }
    }
}

/// Prints `error` to stderr, or as a JSON document to stdout.
pub fn print_error(error: &GqldocError, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Plain => error.print(),
        OutputFormat::Json => print_json(&JsonOutput::failure(error.get_json())),
    }
}

struct JsonOutput {
    data: Value,
    error: Value,
}

impl JsonOutput {
    fn success(data: Value) -> Self {
        let mut data = data;
        if let Value::Object(fields) = &mut data {
            fields.insert("success".to_string(), Value::Bool(true));
        }
        Self {
            data,
            error: Value::Null,
        }
    }

    fn failure(error: Value) -> Self {
        Self {
            data: json!({ "success": false }),
            error,
        }
    }

    fn to_value(&self) -> Value {
        json!({
            "json_version": JSON_VERSION,
            "data": self.data,
            "error": self.error,
        })
    }
}

fn print_json(output: &JsonOutput) -> io::Result<()> {
    stdoutln!("{}", output.to_value())
}

#[cfg(test)]
mod tests {
    use gqldoc_render::{TypeDescriptor, introspection};
    use pretty_assertions::assert_eq;

    use super::*;

    fn overview() -> SchemaOverview {
        let types: Vec<TypeDescriptor> = introspection::parse_types(
            r#"[
                {"kind": "OBJECT", "name": "User", "fields": []},
                {"kind": "OBJECT", "name": "Post", "fields": []},
                {"kind": "ENUM", "name": "Role", "enumValues": []},
                {"kind": "SCALAR", "name": "String"}
            ]"#,
        )
        .unwrap();
        SchemaOverview::new(&types, false)
    }

    #[test]
    fn type_list_json_groups_names_by_kind() {
        let json = GqldocOutput::TypeList(overview()).get_json();
        assert_eq!(
            json,
            json!({
                "types": { "OBJECT": ["Post", "User"], "ENUM": ["Role"] },
                "total": 3
            })
        );
    }

    #[test]
    fn markdown_json_names_the_type() {
        let output = GqldocOutput::Markdown {
            type_name: "Role".to_string(),
            markdown: "**Role**\n".to_string(),
        };
        assert_eq!(
            output.get_json(),
            json!({ "type_name": "Role", "markdown": "**Role**\n" })
        );
        assert_eq!(output.get_stdout(), "**Role**\n");
    }

    #[test]
    fn json_envelope_marks_success() {
        let output = JsonOutput::success(json!({ "total": 0 }));
        assert_eq!(
            output.to_value(),
            json!({
                "json_version": "1",
                "data": { "total": 0, "success": true },
                "error": null
            })
        );
    }

    #[test]
    fn json_envelope_marks_failure() {
        let output = JsonOutput::failure(json!({ "message": "boom" }));
        assert_eq!(
            output.to_value(),
            json!({
                "json_version": "1",
                "data": { "success": false },
                "error": { "message": "boom" }
            })
        );
    }
}
