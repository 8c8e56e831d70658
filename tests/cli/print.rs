use indoc::indoc;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{INTROSPECTION, SDL, gqldoc};

#[test]
fn it_prints_an_enum_with_its_header() {
    let output = gqldoc()
        .args(["print", "Role", "--schema", INTROSPECTION])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        indoc! {"
            **Role**

            | **`enum`** `Role` `{` | |
            |-|-|
            | &nbsp; &nbsp; `ADMIN` |  |
            | &nbsp; &nbsp; `EDITOR` | Can change posts they did not write |
            | &nbsp; &nbsp; `VIEWER` |  |
            | `}` | |
        "}
    );
}

#[test]
fn it_links_fields_to_the_base_url() {
    gqldoc()
        .args(["print", "User", "--schema", SDL, "--no-header", "--no-descriptions"])
        .args(["--base-url", "https://docs.example.com/"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "| **`type`** [`User`](https://docs.example.com/?page=printType:User) `{` |",
        ))
        .stdout(predicate::str::contains(
            "| &nbsp; &nbsp; `posts:` [`Post`](https://docs.example.com/?page=printType:Post) |",
        ))
        .stdout(predicate::str::contains("A registered user").not());
}

#[test]
fn it_reads_the_base_url_from_the_environment() {
    gqldoc()
        .args(["print", "Node", "--schema", INTROSPECTION])
        .env("GQLDOC_BASE_URL", "http://graph.internal:4000")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[`Node`](http://graph.internal:4000/?page=printType:Node)",
        ));
}

#[test]
fn it_reads_introspection_from_stdin() {
    gqldoc()
        .args(["print", "SearchResult", "--schema", "-", "--no-header"])
        .write_stdin(include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/crates/gqldoc-render/src/test_fixtures/introspection.json"
        )))
        .assert()
        .success()
        .stdout("**`union`** `SearchResult` = `User` | `Post`\n");
}

#[test]
fn it_suggests_a_close_type_name() {
    gqldoc()
        .args(["print", "Usr", "--schema", INTROSPECTION])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("error: Type not found: Usr"))
        .stderr(predicate::str::contains("HINT: Did you mean User?"))
        .stderr(predicate::str::contains("gqldoc list --schema"));
}

#[test]
fn it_prints_json_on_request() {
    let output = gqldoc()
        .args(["print", "DateTime", "--schema", SDL, "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["json_version"], "1");
    assert_eq!(json["data"]["success"], true);
    assert_eq!(json["data"]["type_name"], "DateTime");
    assert_eq!(
        json["data"]["markdown"],
        "**DateTime**\n\n`DateTime`: An ISO-8601 timestamp\n"
    );
    assert_eq!(json["error"], Value::Null);
}

#[test]
fn it_prints_json_errors_to_stdout() {
    let output = gqldoc()
        .args(["--format", "json", "print", "Ghost", "--schema", INTROSPECTION])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["data"]["success"], false);
    assert_eq!(json["error"]["message"], "Type not found: Ghost");
    assert!(json["error"]["suggestion"].is_string());
}
