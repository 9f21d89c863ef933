//! # CLI Integration Tests
//!
//! These tests drive the built `staffquery` binary end to end: `init-db`
//! provisioning a fresh database file, and `ask` answering a question with
//! the Gemini endpoint stubbed by a local mock server.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use serde_json::json;
use std::process::Command;
use tempfile::tempdir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GENERATE_PATH: &str = "/v1/models/gemini-pro:generateContent";

/// Runs `staffquery init-db --db-path <path>` and asserts it succeeded.
fn run_init_db(db_path: &std::path::Path) {
    let mut cmd = Command::cargo_bin("staffquery").unwrap();
    cmd.arg("init-db")
        .arg("--db-path")
        .arg(db_path.to_str().unwrap());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Database created successfully at:"))
        .stdout(predicate::str::contains("Sample data has been inserted."));
}

#[test]
fn init_db_creates_and_seeds_a_fresh_file() {
    // Arrange: point at a nested path so the data directory has to be
    // created as well.
    let temp_dir = tempdir().unwrap();
    let db_path = temp_dir.path().join("data").join("employee.db");

    // Act & Assert
    run_init_db(&db_path);

    assert!(db_path.exists());
}

#[test]
fn init_db_can_be_rerun_over_an_existing_file() {
    let temp_dir = tempdir().unwrap();
    let db_path = temp_dir.path().join("employee.db");

    run_init_db(&db_path);
    // A second run drops the existing file and rebuilds it from scratch.
    run_init_db(&db_path);

    assert!(db_path.exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn ask_answers_a_question_against_a_seeded_db() {
    // Arrange: a seeded database plus a stand-in for the Gemini endpoint.
    let temp_dir = tempdir().unwrap();
    let db_path = temp_dir.path().join("data").join("employee.db");
    run_init_db(&db_path);

    let mock_ai = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {"parts": [{
                    "text": "```sql\nSELECT COUNT(*) AS total FROM employees\n```"
                }]}
            }]
        })))
        .expect(1)
        .mount(&mock_ai)
        .await;

    // Act: the subprocess blocks its thread, so it runs on the blocking
    // pool while the mock server keeps serving from the runtime workers.
    let mut cmd = Command::cargo_bin("staffquery").unwrap();
    cmd.arg("ask")
        .arg("How many employees are there?")
        .arg("--db-path")
        .arg(db_path.to_str().unwrap())
        .env("AI_PROVIDER", "gemini")
        .env("AI_API_URL", format!("{}{GENERATE_PATH}", mock_ai.uri()))
        .env("AI_API_KEY", "test-key");
    let assertion = tokio::task::spawn_blocking(move || cmd.assert())
        .await
        .unwrap();

    // Assert
    assertion
        .success()
        .stdout(predicate::str::contains("Query: How many employees are there?"))
        .stdout(predicate::str::contains("The result is: 12.00"));
}

#[test]
fn ask_without_a_credential_fails_before_any_request() {
    let temp_dir = tempdir().unwrap();
    let db_path = temp_dir.path().join("employee.db");

    let mut cmd = Command::cargo_bin("staffquery").unwrap();
    cmd.arg("ask")
        .arg("How many employees are there?")
        .arg("--db-path")
        .arg(db_path.to_str().unwrap())
        .env("AI_PROVIDER", "gemini")
        .env("AI_API_KEY", "");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("API key is missing"));
}
