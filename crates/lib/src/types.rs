use crate::{
    errors::PromptError,
    providers::{ai::AiProvider, db::storage::Storage},
};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Tabular output of a storage query: the column-name sequence plus the
/// row values in column order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryOutput {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

/// The outcome of a full pipeline run.
///
/// Carries the original question, the SQL the model produced (absent when
/// the model's output was rejected by the read-only guard), and the prose
/// answer shown to the user.
#[derive(Debug, Clone, Serialize)]
pub struct PromptResult {
    pub natural_query: String,
    pub sql_query: Option<String>,
    pub answer: String,
}

/// A client chaining an AI translator and a storage executor.
///
/// Each call runs the stages in sequence and retains no state in between,
/// so a single client can serve any number of independent questions.
pub struct PromptClient {
    pub(crate) ai_provider: Box<dyn AiProvider>,
    pub(crate) storage_provider: Box<dyn Storage>,
}

impl fmt::Debug for PromptClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PromptClient")
            .field("storage", &self.storage_provider.name())
            .finish_non_exhaustive()
    }
}

/// A builder for creating `PromptClient` instances.
#[derive(Default)]
pub struct PromptClientBuilder {
    ai_provider: Option<Box<dyn AiProvider>>,
    storage_provider: Option<Box<dyn Storage>>,
}

impl PromptClientBuilder {
    /// Creates a new `PromptClientBuilder`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the AI provider used to translate questions into SQL.
    pub fn ai_provider(mut self, provider: Box<dyn AiProvider>) -> Self {
        self.ai_provider = Some(provider);
        self
    }

    /// Sets the storage provider the generated SQL runs against.
    pub fn storage_provider(mut self, provider: Box<dyn Storage>) -> Self {
        self.storage_provider = Some(provider);
        self
    }

    /// Builds the `PromptClient`, failing when a provider is missing.
    pub fn build(self) -> Result<PromptClient, PromptError> {
        Ok(PromptClient {
            ai_provider: self.ai_provider.ok_or(PromptError::MissingAiProvider)?,
            storage_provider: self
                .storage_provider
                .ok_or(PromptError::MissingStorageProvider)?,
        })
    }
}
