use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use staffquery::PromptError;
use tracing::error;

/// Errors surfaced by the HTTP layer.
///
/// Pipeline failures and internal faults both land here so every handler
/// returns the same JSON error body, only the status code and message
/// text differ.
pub enum AppError {
    /// Errors originating from the `staffquery` pipeline.
    Prompt(PromptError),
    /// Generic internal server errors.
    Internal(anyhow::Error),
}

impl From<PromptError> for AppError {
    fn from(err: PromptError) -> Self {
        AppError::Prompt(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

/// Chooses the status code and client-visible message for a pipeline error.
///
/// Configuration problems are the server's fault (500), unreachable or
/// misbehaving AI endpoints are upstream faults (502), and a statement the
/// store rejected traces back to the request (400).
fn prompt_error_parts(err: PromptError) -> (StatusCode, String) {
    use PromptError::*;
    match err {
        MissingApiKey | MissingAiProvider | MissingStorageProvider => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Server is not configured correctly.".to_string(),
        ),
        AiRequest(e) => (
            StatusCode::BAD_GATEWAY,
            format!("Request to AI provider failed: {e}"),
        ),
        AiDeserialization(e) => (
            StatusCode::BAD_GATEWAY,
            format!("Failed to deserialize AI provider response: {e}"),
        ),
        AiApi(e) => (StatusCode::BAD_GATEWAY, format!("AI provider error: {e}")),
        AiNoContent => (
            StatusCode::BAD_GATEWAY,
            "AI provider returned no usable SQL.".to_string(),
        ),
        StorageConnection(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Storage provider connection error: {e}"),
        ),
        StorageOperationFailed(e) => (
            StatusCode::BAD_REQUEST,
            format!("Storage query execution failed: {e}"),
        ),
        Regex(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Internal regex error: {e}"),
        ),
        ReqwestClientBuild(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to build HTTP client: {e}"),
        ),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Prompt(err) => {
                error!("PromptError: {err:?}");
                prompt_error_parts(err)
            }
            AppError::Internal(err) => {
                error!("Internal server error: {err:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred.".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
