pub mod config;
mod errors;

use self::{
    config::{get_config, Config},
    errors::AppError,
};
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use staffquery::{
    providers::{
        ai::{gemini::GeminiProvider, local::LocalAiProvider, AiProvider},
        db::sqlite::SqliteProvider,
    },
    PromptClient, PromptClientBuilder, PromptResult,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// The shared application state.
///
/// One `PromptClient` serves every request; it keeps no state between
/// calls, so no further synchronization is needed.
#[derive(Clone)]
pub struct AppState {
    pub prompt_client: Arc<PromptClient>,
}

/// Instantiates the AI provider named in the configuration.
fn select_ai_provider(config: &Config) -> anyhow::Result<Box<dyn AiProvider>> {
    let provider: Box<dyn AiProvider> = match config.ai_provider.as_str() {
        "gemini" => {
            let api_key = config.ai_api_key.clone().unwrap_or_default();
            Box::new(GeminiProvider::new(config.ai_api_url.clone(), api_key)?)
        }
        "local" => Box::new(LocalAiProvider::new(
            config.ai_api_url.clone(),
            config.ai_api_key.clone(),
            config.ai_model.clone(),
        )?),
        other => anyhow::bail!("Unsupported AI provider: {other}"),
    };
    Ok(provider)
}

/// Builds the shared application state from the configuration.
///
/// Opens the SQLite provider and provisions the demo database on startup:
/// the schema is created idempotently and the seed rows are inserted only
/// into an empty database.
pub async fn build_app_state(config: Config) -> anyhow::Result<AppState> {
    let ai_provider = select_ai_provider(&config)?;

    if config.db_url != ":memory:" {
        if let Some(parent) = std::path::Path::new(&config.db_url).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
    }

    let sqlite_provider = SqliteProvider::new(&config.db_url).await?;
    sqlite_provider.initialize_schema().await?;
    if sqlite_provider.seed_if_empty().await? {
        info!("Seeded demo employee data into '{}'.", config.db_url);
    }

    let prompt_client = PromptClientBuilder::new()
        .ai_provider(ai_provider)
        .storage_provider(Box::new(sqlite_provider))
        .build()?;

    Ok(AppState {
        prompt_client: Arc::new(prompt_client),
    })
}

/// Creates the Axum router with all the application routes.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/query", post(query_handler))
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}

async fn root() -> &'static str {
    "staffquery server is running."
}

async fn health_check() -> &'static str {
    "OK"
}

/// The request body for the `/query` endpoint.
#[derive(Deserialize)]
struct QueryRequest {
    query: String,
}

/// The handler for the `/query` endpoint.
///
/// This is the single text-in contract the web front end binds to: one
/// natural-language question in, the question/SQL/answer triple out.
async fn query_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<QueryRequest>,
) -> Result<Json<PromptResult>, AppError> {
    info!("Received question: '{}'", payload.query);

    let result = app_state.prompt_client.answer(&payload.query).await?;

    Ok(Json(result))
}

/// Runs the server on an already-bound listener.
pub async fn run(listener: tokio::net::TcpListener, config: Config) -> anyhow::Result<()> {
    debug!(?config, "Server configuration loaded");

    let app_state = build_app_state(config).await?;
    let app = create_router(app_state);

    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}

#[tokio::main]
#[cfg_attr(test, allow(dead_code))]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .compact()
        .init();

    let config = get_config()?;
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on {}", addr);
    run(listener, config).await
}
