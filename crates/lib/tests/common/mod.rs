#![allow(dead_code)]
//! # Common Test Utilities
//!
//! Shared helpers for the integration tests: tracing setup, a scripted
//! mock AI provider, and a seeded in-memory database.

use async_trait::async_trait;
use dotenvy::dotenv;
use staffquery::providers::{ai::AiProvider, db::sqlite::SqliteProvider};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, Once};

static INIT: Once = Once::new();

/// Initializes the tracing subscriber and loads .env for tests.
pub fn setup_tracing() {
    INIT.call_once(|| {
        dotenv().ok();
        tracing_subscriber::fmt::init();
    });
}

/// An AI provider that replays a fixed script of responses.
///
/// Every prompt pair it receives is recorded in `call_history`, so tests
/// can assert on what the pipeline actually sent.
#[derive(Clone, Debug)]
pub struct MockAiProvider {
    pub call_history: Arc<Mutex<Vec<(String, String)>>>,
    responses: Arc<Mutex<VecDeque<String>>>,
}

impl MockAiProvider {
    pub fn new(responses: Vec<String>) -> Self {
        Self {
            call_history: Arc::new(Mutex::new(Vec::new())),
            responses: Arc::new(Mutex::new(responses.into())),
        }
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, staffquery::PromptError> {
        self.call_history
            .lock()
            .unwrap()
            .push((system_prompt.to_string(), user_prompt.to_string()));

        let next = self.responses.lock().unwrap().pop_front();
        Ok(next.unwrap_or_else(|| "-- no scripted response left".to_string()))
    }
}

/// Creates an in-memory provider with the employee schema and seed rows.
pub async fn seeded_provider() -> SqliteProvider {
    let provider = SqliteProvider::new(":memory:")
        .await
        .expect("Failed to create SqliteProvider");
    provider
        .initialize_schema()
        .await
        .expect("Failed to create employee tables");
    provider
        .seed_if_empty()
        .await
        .expect("Failed to seed employee data");
    provider
}
