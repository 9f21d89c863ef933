use crate::{errors::PromptError, providers::db::storage::Storage, types::QueryOutput};
use async_trait::async_trait;
use serde_json::Value;
use std::fmt::{self, Debug};
use tracing::{debug, info};
use turso::{Connection, Database, Value as TursoValue};

pub mod sql;

fn conn_err<E: fmt::Display>(e: E) -> PromptError {
    PromptError::StorageConnection(e.to_string())
}

fn op_err<E: fmt::Display>(e: E) -> PromptError {
    PromptError::StorageOperationFailed(e.to_string())
}

/// A provider for a local SQLite database, backed by Turso.
///
/// The provider holds a `Database` instance. Every operation opens its own
/// connection and drops it before returning, so repeated failures never
/// leak a handle and clones can serve independent callers. Cloning shares
/// the same underlying database.
#[derive(Clone)]
pub struct SqliteProvider {
    db: Database,
}

impl SqliteProvider {
    /// Opens (or creates) the database at `db_path`.
    ///
    /// Pass ":memory:" for a unique, isolated in-memory database. To share
    /// an in-memory database across instances (e.g., in tests), create one
    /// provider and `.clone()` it.
    pub async fn new(db_path: &str) -> Result<Self, PromptError> {
        let db = turso::Builder::new_local(db_path)
            .build()
            .await
            .map_err(conn_err)?;
        let provider = Self { db };

        // WAL helps concurrent readers of a file-backed database and is a
        // no-op in memory. PRAGMA returns a row, so it goes through `query`.
        let conn = provider.connection()?;
        conn.query("PRAGMA journal_mode=WAL;", ())
            .await
            .map_err(conn_err)?;

        Ok(provider)
    }

    fn connection(&self) -> Result<Connection, PromptError> {
        self.db.connect().map_err(conn_err)
    }

    /// Ensures the six employee tables exist.
    ///
    /// Idempotent and safe to call on every application startup.
    pub async fn initialize_schema(&self) -> Result<(), PromptError> {
        let conn = self.connection()?;
        for statement in sql::TABLE_CREATION_SQL {
            conn.execute(statement, ()).await.map_err(op_err)?;
        }
        Ok(())
    }

    /// Inserts the demo rows when the `employees` table is empty.
    ///
    /// Returns whether any seeding happened, so callers can log it.
    pub async fn seed_if_empty(&self) -> Result<bool, PromptError> {
        let conn = self.connection()?;

        let mut rows = conn
            .query("SELECT COUNT(*) FROM employees;", ())
            .await
            .map_err(op_err)?;
        let count = match rows.next().await.map_err(op_err)? {
            Some(row) => match row.get_value(0).map_err(op_err)? {
                TursoValue::Integer(n) => n,
                _ => 0,
            },
            None => 0,
        };

        if count > 0 {
            debug!("employees already holds {count} rows, skipping seed");
            return Ok(false);
        }

        run_batch(&conn, sql::SEED_DATA_SQL).await?;
        info!("Seeded the demo employee rows.");
        Ok(true)
    }

    /// A helper for tests to pre-populate data from a multi-statement
    /// SQL script.
    pub async fn initialize_with_data(&self, init_sql: &str) -> Result<(), PromptError> {
        let conn = self.connection()?;
        run_batch(&conn, init_sql).await
    }
}

/// Executes every statement in a `;`-separated script.
async fn run_batch(conn: &Connection, script: &str) -> Result<(), PromptError> {
    for statement in script.split(';').filter(|s| !s.trim().is_empty()) {
        conn.execute(statement, ()).await.map_err(op_err)?;
    }
    Ok(())
}

impl Debug for SqliteProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqliteProvider").finish_non_exhaustive()
    }
}

/// Converts a Turso value to a `serde_json::Value`.
fn json_value(v: TursoValue) -> Value {
    match v {
        TursoValue::Null => Value::Null,
        TursoValue::Integer(i) => Value::Number(i.into()),
        TursoValue::Real(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        TursoValue::Text(s) => Value::String(s),
        TursoValue::Blob(_) => Value::String("<blob>".to_string()),
    }
}

#[async_trait]
impl Storage for SqliteProvider {
    fn name(&self) -> &str {
        "SQLite"
    }

    fn language(&self) -> &str {
        "SQL"
    }

    /// Executes a query and returns the column names plus all rows.
    ///
    /// The connection lives only for the duration of this call and is
    /// dropped on every path, including errors.
    async fn execute_query(&self, query: &str) -> Result<QueryOutput, PromptError> {
        debug!(query = %query, "--> Executing SQLite query");

        let conn = self.connection()?;
        let mut stmt = conn.prepare(query).await.map_err(op_err)?;

        let columns: Vec<String> = stmt
            .columns()
            .iter()
            .map(|c| c.name().to_string())
            .collect();

        let mut rows = stmt.query(()).await.map_err(op_err)?;
        let mut collected: Vec<Vec<Value>> = Vec::new();

        while let Some(row) = rows.next().await.map_err(op_err)? {
            let mut values = Vec::with_capacity(columns.len());
            for idx in 0..columns.len() {
                let value = row.get_value(idx).map_err(op_err)?;
                values.push(json_value(value));
            }
            collected.push(values);
        }

        Ok(QueryOutput {
            columns,
            rows: collected,
        })
    }
}
