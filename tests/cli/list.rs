use indoc::indoc;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{INTROSPECTION, SDL, gqldoc};

#[test]
fn it_lists_types_by_kind() {
    let output = gqldoc()
        .args(["list", "--schema", INTROSPECTION])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        indoc! {"
            OBJECT
              Post
              Query
              User

            INPUT_OBJECT
              CreatePostInput

            INTERFACE
              Node

            UNION
              SearchResult

            ENUM
              Role

            SCALAR
              DateTime
        "}
    );
}

#[test]
fn it_includes_builtins_on_request() {
    gqldoc()
        .args(["list", "--schema", SDL, "--include-builtins"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  __Schema\n"))
        .stdout(predicate::str::contains("  Boolean\n"));
}

#[test]
fn it_lists_sdl_types_as_json() {
    let output = gqldoc()
        .args(["list", "--schema", SDL, "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json["data"]["types"],
        json!({
            "OBJECT": ["Mutation", "Post", "Query", "User"],
            "INPUT_OBJECT": ["CreatePostInput"],
            "INTERFACE": ["Node"],
            "UNION": ["SearchResult"],
            "ENUM": ["Role"],
            "SCALAR": ["DateTime"]
        })
    );
    assert_eq!(json["data"]["total"], 9);
}
