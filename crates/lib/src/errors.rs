use thiserror::Error;

/// Custom error types for the query pipeline.
///
/// Every stage failure is represented as a value here; nothing in the
/// library panics on a bad credential, a failed request, or a rejected
/// SQL statement.
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Failed to send request to the AI provider: {0}")]
    AiRequest(reqwest::Error),
    #[error("Failed to deserialize the AI provider response: {0}")]
    AiDeserialization(reqwest::Error),
    #[error("AI provider returned an error: {0}")]
    AiApi(String),
    #[error("AI response contained no candidate text")]
    AiNoContent,
    #[error("API key is missing")]
    MissingApiKey,
    #[error("AI provider is missing")]
    MissingAiProvider,
    #[error("Storage provider is missing")]
    MissingStorageProvider,
    #[error("Storage connection error: {0}")]
    StorageConnection(String),
    #[error("Storage operation failed: {0}")]
    StorageOperationFailed(String),
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}
