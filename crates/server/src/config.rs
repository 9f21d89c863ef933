//! # Server Configuration
//!
//! All configuration is environment-sourced and read once at startup.
//! `dotenvy` loads a `.env` file before this runs, so the credential can
//! live there during development.

use staffquery::constants::DEFAULT_GEMINI_API_URL;
use std::env;
use std::fmt;

/// Runtime configuration for the server binary.
#[derive(Clone)]
pub struct Config {
    /// Port to listen on. `PORT`, default 9090.
    pub port: u16,
    /// Path to the SQLite database file. `DB_URL`, default `data/employee.db`.
    pub db_url: String,
    /// Which AI provider to use: "gemini" or "local". `AI_PROVIDER`.
    pub ai_provider: String,
    /// Endpoint of the AI provider. `AI_API_URL`.
    pub ai_api_url: String,
    /// Credential for the AI provider. `AI_API_KEY`.
    pub ai_api_key: Option<String>,
    /// Model name for OpenAI-compatible providers. `AI_MODEL`.
    pub ai_model: Option<String>,
}

// The credential must never appear in logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("db_url", &self.db_url)
            .field("ai_provider", &self.ai_provider)
            .field("ai_api_url", &self.ai_api_url)
            .field("ai_api_key", &self.ai_api_key.as_ref().map(|_| "<redacted>"))
            .field("ai_model", &self.ai_model)
            .finish()
    }
}

/// Loads the configuration from environment variables.
pub fn get_config() -> anyhow::Result<Config> {
    let port = match env::var("PORT") {
        Ok(p) => p.parse()?,
        Err(_) => 9090,
    };

    Ok(Config {
        port,
        db_url: env::var("DB_URL").unwrap_or_else(|_| "data/employee.db".to_string()),
        ai_provider: env::var("AI_PROVIDER").unwrap_or_else(|_| "gemini".to_string()),
        ai_api_url: env::var("AI_API_URL")
            .unwrap_or_else(|_| DEFAULT_GEMINI_API_URL.to_string()),
        ai_api_key: env::var("AI_API_KEY").ok().filter(|k| !k.is_empty()),
        ai_model: env::var("AI_MODEL").ok(),
    })
}
