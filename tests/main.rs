mod cli;

use assert_cmd::Command;
use predicates::prelude::*;

pub(crate) const INTROSPECTION: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/crates/gqldoc-render/src/test_fixtures/introspection.json"
);
pub(crate) const SDL: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/crates/gqldoc-render/src/test_fixtures/test_schema.graphql"
);

/// The binary with a predictable environment: no colors, no inherited settings.
pub(crate) fn gqldoc() -> Command {
    let mut cmd = Command::cargo_bin("gqldoc").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("GQLDOC_SCHEMA")
        .env_remove("GQLDOC_BASE_URL")
        .env_remove("GQLDOC_LOG")
        .env_remove("GQLDOC_LOG_LEVEL");
    cmd
}

#[test]
fn its_executable() {
    // running the CLI with no command prints usage to stderr
    gqldoc()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn it_reports_unreadable_schema_files() {
    gqldoc()
        .args(["list", "--schema", "does/not/exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not read schema file does/not/exist.json"));
}

#[test]
fn it_hints_at_the_expected_introspection_shape() {
    gqldoc()
        .args(["list", "--schema", "-"])
        .write_stdin(r#"{"data": {"__schema": {"types": 7}}}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid introspection result"))
        .stderr(predicate::str::contains("HINT:"));
}

#[test]
fn it_logs_at_the_requested_level() {
    gqldoc()
        .args(["list", "--schema", INTROSPECTION, "--log", "debug"])
        .assert()
        .success()
        .stderr(predicate::str::contains("loaded introspection types"));
}
