//! Error types for the extraction engine
//!
//! Not-found is never an error here: extraction paths degrade to `None`.
//! `EngineError` covers infrastructure faults and malformed inputs only.

use thiserror::Error;

/// Errors that can occur inside the engine
#[derive(Error, Debug)]
pub enum EngineError {
    /// LLM provider error
    #[error("LLM error: {0}")]
    Llm(String),

    /// Invalid reply format from the language-model service
    #[error("Invalid reply format: {0}")]
    InvalidFormat(String),

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for EngineError {
    fn from(e: serde_json::Error) -> Self {
        EngineError::JsonParse(e.to_string())
    }
}
