pub mod gemini;
pub mod local;

use crate::errors::PromptError;
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// The translation seam: natural language in, raw model text out.
///
/// Implementations wrap one text-generation service each (Gemini, a local
/// OpenAI-compatible server). Fence stripping and the read-only guard live
/// in the caller, not here.
#[async_trait]
pub trait AiProvider: Send + Sync + Debug + DynClone {
    /// Sends the prompt pair to the service and returns its raw output.
    async fn generate(&self, system_prompt: &str, user_prompt: &str)
        -> Result<String, PromptError>;
}

dyn_clone::clone_trait_object!(AiProvider);
