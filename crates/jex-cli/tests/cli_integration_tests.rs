// Dweve JEX - Streaming JSON Projection
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Integration tests for the jex binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::{tempdir, TempDir};

/// Test helper to create a jex command
fn jex_cmd() -> Command {
    Command::cargo_bin("jex").expect("Failed to find jex binary")
}

const SCHEMA: &str = r#"{
    "id": ".[].ID",
    "name": ".[].NAME",
    "token": ".[].TOKENS[]"
}"#;

const INPUT: &str = r#"[
    {"ID": "1", "NAME": "a", "TOKENS": ["x", "y"]},
    {"ID": "2", "NAME": "b", "TOKENS": ["u"]}
]"#;

/// Write schema and input files into a fresh temp directory.
fn write_fixture(schema: &str, input: &str) -> (TempDir, String, String) {
    let dir = tempdir().expect("Failed to create temp dir");
    let schema_path = dir.path().join("schema.json");
    let input_path = dir.path().join("input.json");
    fs::write(&schema_path, schema).expect("Failed to write schema");
    fs::write(&input_path, input).expect("Failed to write input");
    (
        dir,
        input_path.to_str().unwrap().to_string(),
        schema_path.to_str().unwrap().to_string(),
    )
}

// ==================== Extract ====================

#[test]
fn test_extract_streams_records() {
    let (_dir, input, schema) = write_fixture(SCHEMA, INPUT);

    let assert = jex_cmd()
        .args(["extract", &input, "--schema", &schema])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], r#"{"id":"1","name":"a","token":"x"}"#);
    assert_eq!(lines[1], r#"{"id":"1","name":"a","token":"y"}"#);
    assert_eq!(lines[2], r#"{"id":"2","name":"b","token":"u"}"#);
}

#[test]
fn test_extract_from_stdin() {
    let (_dir, _input, schema) = write_fixture(SCHEMA, INPUT);

    jex_cmd()
        .args(["extract", "-", "--schema", &schema])
        .write_stdin(INPUT)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""token":"u""#));
}

#[test]
fn test_extract_to_output_file() {
    let (dir, input, schema) = write_fixture(SCHEMA, INPUT);
    let out = dir.path().join("records.jsonl");

    jex_cmd()
        .args([
            "extract",
            &input,
            "--schema",
            &schema,
            "--output",
            out.to_str().unwrap(),
        ])
        .assert()
        .success();

    let written = fs::read_to_string(&out).unwrap();
    assert_eq!(written.lines().count(), 3);
}

// ==================== Exit codes ====================

#[test]
fn test_missing_input_exits_1() {
    let (dir, _input, schema) = write_fixture(SCHEMA, INPUT);
    let missing = dir.path().join("missing.json");

    jex_cmd()
        .args(["extract", missing.to_str().unwrap(), "--schema", &schema])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("I/O error"));
}

#[test]
fn test_bad_schema_exits_1() {
    let (_dir, input, schema) = write_fixture(r#"{"id": "no-dot"}"#, INPUT);

    jex_cmd()
        .args(["extract", &input, "--schema", &schema])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Schema error"));
}

#[test]
fn test_incomplete_record_exits_3() {
    // NAME is required by the schema but missing from the input object.
    let input = r#"[{"ID": "1", "TOKENS": ["x"]}]"#;
    let (_dir, input, schema) = write_fixture(SCHEMA, input);

    jex_cmd()
        .args(["extract", &input, "--schema", &schema])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Incomplete record"));
}

#[test]
fn test_malformed_json_exits_3() {
    let (_dir, input, schema) = write_fixture(SCHEMA, "[{");

    jex_cmd()
        .args(["extract", &input, "--schema", &schema])
        .assert()
        .code(3);
}

// ==================== Check ====================

#[test]
fn test_check_displays_schema() {
    let (_dir, _input, schema) = write_fixture(SCHEMA, INPUT);

    jex_cmd()
        .args(["check", &schema])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entries: 3"))
        .stdout(predicate::str::contains("Boundary depth: 2"))
        .stdout(predicate::str::contains("(multi)"));
}

#[test]
fn test_check_rejects_invalid_pattern() {
    let (_dir, _input, schema) = write_fixture(r#"{"id": "ID", "x": ".[].A"}"#, INPUT);

    jex_cmd().args(["check", &schema]).assert().code(1);
}

// ==================== Completion ====================

#[test]
fn test_completion_bash() {
    jex_cmd()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("jex"));
}

#[test]
fn test_completion_unsupported_shell() {
    jex_cmd().args(["completion", "tcsh"]).assert().code(1);
}
