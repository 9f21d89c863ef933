//! # SQLite Provider Tests
//!
//! These tests verify the provider's core behavior: executing queries,
//! returning columns and rows, surfacing storage errors as values, and
//! creating/seeding the employee schema.
//!
//! Each test uses an in-memory database so they are fast and isolated,
//! with no file system cleanup.

mod common;

use common::{seeded_provider, setup_tracing};
use serde_json::json;
use staffquery::providers::db::sqlite::sql::SEEDED_EMPLOYEE_COUNT;
use staffquery::providers::db::{sqlite::SqliteProvider, storage::Storage};
use staffquery::PromptError;

#[tokio::test]
async fn basic_query_returns_columns_and_rows() {
    setup_tracing();

    let provider = SqliteProvider::new(":memory:")
        .await
        .expect("Failed to create SqliteProvider");

    let setup_sql = "
        CREATE TABLE offices (id INTEGER PRIMARY KEY, city TEXT NOT NULL);
        INSERT INTO offices (id, city) VALUES (1, 'Berlin');
        INSERT INTO offices (id, city) VALUES (2, 'Osaka');
    ";
    provider
        .initialize_with_data(setup_sql)
        .await
        .expect("Failed to load fixture data");

    let output = provider
        .execute_query("SELECT id, city FROM offices ORDER BY id ASC")
        .await
        .expect("Failed to execute query");

    assert_eq!(output.columns, vec!["id".to_string(), "city".to_string()]);
    assert_eq!(
        output.rows,
        vec![
            vec![json!(1), json!("Berlin")],
            vec![json!(2), json!("Osaka")],
        ]
    );
}

#[tokio::test]
async fn in_memory_databases_are_isolated() {
    setup_tracing();

    let first = SqliteProvider::new(":memory:")
        .await
        .expect("Failed to create first provider");
    first
        .initialize_with_data("CREATE TABLE scratch (n INTEGER); INSERT INTO scratch (n) VALUES (7);")
        .await
        .expect("Failed to populate first provider");

    let second = SqliteProvider::new(":memory:")
        .await
        .expect("Failed to create second provider");

    // The second provider must not see the first one's table.
    let result = second.execute_query("SELECT n FROM scratch").await;
    assert!(result.is_err());
}

#[tokio::test]
async fn invalid_sql_is_an_error_value_and_leaks_nothing() {
    setup_tracing();

    let provider = seeded_provider().await;

    // Repeated failures must not exhaust connections; every call gets a
    // fresh one that is dropped on the error path.
    for _ in 0..25 {
        let err = provider
            .execute_query("SELEC first_name FROM employees")
            .await
            .unwrap_err();
        assert!(matches!(err, PromptError::StorageOperationFailed(_)));
    }

    // The provider still works afterwards.
    let output = provider
        .execute_query("SELECT COUNT(*) FROM employees")
        .await
        .expect("Provider should survive repeated failures");
    assert_eq!(output.rows[0][0], json!(SEEDED_EMPLOYEE_COUNT));
}

#[tokio::test]
async fn schema_initialization_is_idempotent() {
    setup_tracing();

    let provider = SqliteProvider::new(":memory:")
        .await
        .expect("Failed to create SqliteProvider");

    provider.initialize_schema().await.expect("First init failed");
    provider.initialize_schema().await.expect("Second init failed");

    let output = provider
        .execute_query(
            "SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )
        .await
        .expect("Failed to list tables");

    let tables: Vec<_> = output.rows.iter().map(|r| r[0].clone()).collect();
    assert_eq!(
        tables,
        vec![
            json!("departments"),
            json!("dept_emp"),
            json!("dept_manager"),
            json!("employees"),
            json!("salaries"),
            json!("titles"),
        ]
    );
}

#[tokio::test]
async fn seeding_runs_once_and_counts_match() {
    setup_tracing();

    let provider = SqliteProvider::new(":memory:")
        .await
        .expect("Failed to create SqliteProvider");
    provider.initialize_schema().await.expect("Init failed");

    assert!(provider.seed_if_empty().await.expect("First seed failed"));
    assert!(!provider.seed_if_empty().await.expect("Second seed failed"));

    let output = provider
        .execute_query("SELECT COUNT(*) FROM employees")
        .await
        .expect("Count query failed");
    assert_eq!(output.rows, vec![vec![json!(SEEDED_EMPLOYEE_COUNT)]]);
}

#[tokio::test]
async fn seed_rows_honor_the_open_period_sentinel() {
    setup_tracing();

    let provider = seeded_provider().await;

    // Every employee has exactly one open salary period.
    let output = provider
        .execute_query("SELECT COUNT(*) FROM salaries WHERE to_date = '9999-01-01'")
        .await
        .expect("Open-period query failed");
    assert_eq!(output.rows, vec![vec![json!(SEEDED_EMPLOYEE_COUNT)]]);

    // Every department assignment references a department that exists.
    let output = provider
        .execute_query(
            "SELECT COUNT(*) FROM dept_emp de LEFT JOIN departments d ON de.dept_no = d.dept_no WHERE d.dept_no IS NULL",
        )
        .await
        .expect("Referential check failed");
    assert_eq!(output.rows, vec![vec![json!(0)]]);
}

#[tokio::test]
async fn null_values_map_to_json_null() {
    setup_tracing();

    let provider = SqliteProvider::new(":memory:")
        .await
        .expect("Failed to create SqliteProvider");
    provider
        .initialize_with_data(
            "CREATE TABLE notes (id INTEGER, body TEXT); INSERT INTO notes (id, body) VALUES (1, NULL);",
        )
        .await
        .expect("Failed to initialize");

    let output = provider
        .execute_query("SELECT id, body FROM notes")
        .await
        .expect("Query failed");
    assert_eq!(output.rows, vec![vec![json!(1), serde_json::Value::Null]]);
}
