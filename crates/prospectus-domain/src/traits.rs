//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and
//! infrastructure. Implementations live in other crates.

/// Trait for LLM provider operations
///
/// Implemented by the infrastructure layer (prospectus-llm). `generate` is
/// a blocking round-trip; callers that need a bound on it wrap the call in
/// their own timeout.
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error;

    /// Generate a completion for the given prompt
    fn generate(&self, prompt: &str) -> Result<String, Self::Error>;
}
