//! # Shared Constants
//!
//! Centralizes values both binaries need, so the CLI and the server
//! cannot drift apart on them.

/// Default public endpoint for the Gemini `generateContent` API.
pub const DEFAULT_GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1/models/gemini-pro:generateContent";
