//! Prospectus LLM Provider Layer
//!
//! Pluggable LLM provider implementations behind the `LlmProvider` trait
//! from `prospectus-domain`. Providers take an extraction or query-parse
//! prompt and hand back the raw reply; decoding the JSON contract is the
//! engine's job.
//!
//! # Providers
//!
//! - `MockProvider`: canned replies for deterministic tests
//! - `OpenAiProvider`: OpenAI-compatible chat-completions API
//!
//! # Examples
//!
//! ```
//! use prospectus_llm::MockProvider;
//! use prospectus_domain::traits::LlmProvider;
//!
//! let provider = MockProvider::new(r#"{"value": "1.19%", "location": "fee table"}"#);
//! let reply = provider.generate("Extract the NET_EXPENSES for Class A.").unwrap();
//! assert!(reply.contains("1.19%"));
//! ```

#![warn(missing_docs)]

pub mod openai;

use prospectus_domain::traits::LlmProvider as LlmProviderTrait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use openai::OpenAiProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// The completion service answered with an unusable body
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded past the retry budget
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// The configured model is unknown to the service
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// Canned-reply provider for deterministic testing
///
/// Returns pre-configured replies without any network calls. Unmatched
/// prompts get the default reply, which starts out as the wire-contract
/// not-found object.
///
/// # Examples
///
/// ```
/// use prospectus_llm::MockProvider;
/// use prospectus_domain::traits::LlmProvider;
///
/// let mut provider = MockProvider::default();
/// provider.add_response("cdsc prompt", r#"{"value": "6 year, 5% then 4%"}"#);
/// assert!(provider.generate("cdsc prompt").unwrap().contains("6 year"));
/// assert_eq!(provider.generate("anything else").unwrap(), r#"{"value": "0"}"#);
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, String>>>,
    call_count: Arc<Mutex<usize>>,
}

/// Marker value that makes `generate` fail for a prompt
const ERROR_MARKER: &str = "ERROR";

impl MockProvider {
    /// Create a provider answering every prompt with the same reply
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Pin a reply to one exact prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(prompt.into(), response.into());
    }

    /// Make `generate` return an error for one exact prompt
    pub fn add_error(&mut self, prompt: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(prompt.into(), ERROR_MARKER.to_string());
    }

    /// Number of times `generate` was called, shared across clones
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockProvider {
    /// A provider that reports every datapoint as not found
    fn default() -> Self {
        Self::new(r#"{"value": "0"}"#)
    }
}

impl LlmProviderTrait for MockProvider {
    type Error = LlmError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        *self.call_count.lock().unwrap() += 1;

        let responses = self.responses.lock().unwrap();
        if let Some(response) = responses.get(prompt) {
            if response == ERROR_MARKER {
                return Err(LlmError::Other("Mock error".to_string()));
            }
            return Ok(response.clone());
        }

        Ok(self.default_response.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_reply_for_all_prompts() {
        let provider = MockProvider::new(r#"{"value": "$2,500"}"#);
        assert_eq!(
            provider.generate("initial investment prompt").unwrap(),
            r#"{"value": "$2,500"}"#
        );
        assert_eq!(
            provider.generate("a different prompt").unwrap(),
            r#"{"value": "$2,500"}"#
        );
    }

    #[test]
    fn test_pinned_reply_beats_default() {
        let mut provider = MockProvider::default();
        provider.add_response("net expenses prompt", r#"{"value": "0.74%"}"#);

        assert_eq!(
            provider.generate("net expenses prompt").unwrap(),
            r#"{"value": "0.74%"}"#
        );
        // Unpinned prompts fall back to the not-found reply
        assert_eq!(provider.generate("cdsc prompt").unwrap(), r#"{"value": "0"}"#);
    }

    #[test]
    fn test_call_count() {
        let provider = MockProvider::default();
        assert_eq!(provider.call_count(), 0);

        provider.generate("first").unwrap();
        provider.generate("second").unwrap();
        assert_eq!(provider.call_count(), 2);
    }

    #[test]
    fn test_error_injection() {
        let mut provider = MockProvider::default();
        provider.add_error("unreachable prompt");

        let result = provider.generate("unreachable prompt");
        assert!(matches!(result.unwrap_err(), LlmError::Other(_)));
    }

    #[test]
    fn test_clones_share_call_count() {
        let provider = MockProvider::default();
        let observer = provider.clone();

        provider.generate("prompt").unwrap();
        assert_eq!(observer.call_count(), 1);
    }
}
