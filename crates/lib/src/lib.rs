//! # Natural Language to SQL for the Employee Database
//!
//! This crate provides a client that converts natural-language questions
//! into SQL using a configurable AI provider, executes the statement against
//! a local SQLite database, and renders the result rows as English prose.

pub mod constants;
pub mod errors;
pub mod format;
pub mod prompts;
pub mod providers;
pub mod types;

pub use errors::PromptError;
pub use types::{PromptClient, PromptClientBuilder, PromptResult, QueryOutput};

use regex::Regex;
use tracing::{debug, error, info};

impl PromptClient {
    /// Runs the full question → SQL → rows → prose pipeline.
    ///
    /// Data flows strictly one way and no state is kept between calls.
    /// Failures at any stage surface as a `PromptError` value; a model
    /// response that is not a read-only query short-circuits with a fixed
    /// sentence and is never executed.
    pub async fn answer(&self, question: &str) -> Result<PromptResult, PromptError> {
        info!("[answer] received question: {question:?}");

        let query = self.query_from_question(question).await?;

        if query.is_empty() {
            return Ok(PromptResult {
                natural_query: question.to_string(),
                sql_query: None,
                answer: "The prompt did not result in a valid query.".to_string(),
            });
        }

        let output = match self.storage_provider.execute_query(&query).await {
            Ok(output) => output,
            Err(e) => {
                error!("[answer] query execution failed: {e:?}");
                return Err(e);
            }
        };

        let answer = format::format_results(&output, question);

        Ok(PromptResult {
            natural_query: question.to_string(),
            sql_query: Some(query),
            answer,
        })
    }

    /// Converts a question to a SQL statement using the AI provider.
    ///
    /// Returns an empty string when the model's output fails the read-only
    /// guard.
    async fn query_from_question(&self, question: &str) -> Result<String, PromptError> {
        let language = self.storage_provider.language();

        let system_prompt = prompts::QUERY_SYSTEM_PROMPT
            .replace("{language}", language)
            .replace("{db_name}", self.storage_provider.name());
        let user_prompt = prompts::build_user_prompt(language, question);

        debug!(system_prompt = %system_prompt, user_prompt = %user_prompt, "--> Sending prompts to AI provider");

        let raw_response = self
            .ai_provider
            .generate(&system_prompt, &user_prompt)
            .await?;

        debug!("<-- Query from AI: {}", &raw_response);

        // The model often wraps the statement in markdown code fences.
        let fence = Regex::new(r"```(?:sql)?\n?([\s\S]*?)```")?;
        let query = match fence.captures(&raw_response) {
            Some(caps) => caps[1].trim().to_string(),
            None => raw_response.trim().to_string(),
        };

        // Readonly guard: anything other than a SELECT (or a CTE) is
        // discarded rather than executed.
        let upper = query.to_uppercase();
        if !upper.starts_with("SELECT") && !upper.starts_with("WITH") {
            return Ok(String::new());
        }

        Ok(query)
    }
}
