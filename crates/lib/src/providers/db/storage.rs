use crate::{errors::PromptError, types::QueryOutput};
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// The execution seam: a SQL string in, tabular results out.
///
/// `name` and `language` feed the prompt templates, so the translator can
/// tell the model which dialect it is writing for.
#[async_trait]
pub trait Storage: Send + Sync + DynClone + Debug {
    /// The display name of the store (e.g., "SQLite").
    fn name(&self) -> &str;

    /// The query language the store speaks (e.g., "SQL").
    fn language(&self) -> &str;

    /// Runs one statement and returns the column names and all rows.
    async fn execute_query(&self, query: &str) -> Result<QueryOutput, PromptError>;
}

dyn_clone::clone_trait_object!(Storage);
