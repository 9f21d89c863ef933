//! # staffquery: a CLI for the employee database assistant
//!
//! This is the command-line entry point: it rebuilds the demo database
//! from scratch and answers ad-hoc questions without going through the
//! HTTP server.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use staffquery::constants::DEFAULT_GEMINI_API_URL;
use staffquery::providers::{
    ai::{gemini::GeminiProvider, local::LocalAiProvider, AiProvider},
    db::sqlite::SqliteProvider,
};
use staffquery::PromptClientBuilder;
use std::env;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_DB_PATH: &str = "data/employee.db";

// --- CLI Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Drop and recreate the employee database with the demo seed rows
    InitDb(InitDbArgs),
    /// Ask the employee database a natural-language question
    Ask(AskArgs),
}

#[derive(Parser, Debug)]
struct InitDbArgs {
    /// Path of the SQLite database file to (re)create
    #[arg(long, default_value = DEFAULT_DB_PATH)]
    db_path: String,
}

#[derive(Parser, Debug)]
struct AskArgs {
    /// The natural-language question
    question: String,
    /// Path of the SQLite database file to query
    #[arg(long, default_value = DEFAULT_DB_PATH)]
    db_path: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .compact()
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::InitDb(args) => init_db(&args.db_path).await,
        Commands::Ask(args) => ask(&args.question, &args.db_path).await,
    }
}

/// Recreates the database file from scratch and seeds it.
async fn init_db(db_path: &str) -> Result<()> {
    let path = Path::new(db_path);
    if path.exists() {
        std::fs::remove_file(path)?;
        info!("Removed existing database file: {db_path}");
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let provider = SqliteProvider::new(db_path).await?;
    provider.initialize_schema().await?;
    provider.seed_if_empty().await?;

    println!(
        "Database created successfully at: {}",
        std::fs::canonicalize(path)?.display()
    );
    println!("Sample data has been inserted.");
    Ok(())
}

/// Runs one question through the pipeline and prints the answer.
async fn ask(question: &str, db_path: &str) -> Result<()> {
    let provider_name = env::var("AI_PROVIDER").unwrap_or_else(|_| "gemini".to_string());
    let api_url =
        env::var("AI_API_URL").unwrap_or_else(|_| DEFAULT_GEMINI_API_URL.to_string());
    let api_key = env::var("AI_API_KEY").ok();
    let model = env::var("AI_MODEL").ok();

    let ai_provider: Box<dyn AiProvider> = match provider_name.as_str() {
        "gemini" => Box::new(GeminiProvider::new(api_url, api_key.unwrap_or_default())?),
        "local" => Box::new(LocalAiProvider::new(api_url, api_key, model)?),
        other => bail!("Unsupported AI provider: {other}"),
    };

    // The data directory is created on every invocation, not just when the
    // database is (re)built.
    if let Some(parent) = Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let storage = SqliteProvider::new(db_path).await?;
    let client = PromptClientBuilder::new()
        .ai_provider(ai_provider)
        .storage_provider(Box::new(storage))
        .build()?;

    let result = client.answer(question).await?;
    if let Some(sql) = &result.sql_query {
        info!("Generated SQL: {sql}");
    }
    println!("Query: {}\n\n{}", result.natural_query, result.answer);
    Ok(())
}
