//! Configuration for the extraction engine

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tunable limits for extraction and location resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum document characters included in an extraction prompt
    pub text_budget: usize,

    /// Maximum tables rendered into an extraction prompt
    pub max_tables: usize,

    /// Maximum rows rendered per table
    pub max_table_rows: usize,

    /// Minimum context-keyword hits for a page or anchor to be cited
    pub location_threshold: usize,

    /// Maximum time for a single LLM round-trip (seconds)
    pub llm_timeout_secs: u64,
}

impl EngineConfig {
    /// Get the LLM timeout as a Duration
    pub fn llm_timeout(&self) -> Duration {
        Duration::from_secs(self.llm_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.text_budget == 0 {
            return Err("text_budget must be greater than 0".to_string());
        }
        if self.location_threshold == 0 {
            return Err("location_threshold must be greater than 0".to_string());
        }
        if self.llm_timeout_secs == 0 {
            return Err("llm_timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            text_budget: 8_000,
            max_tables: 5,
            max_table_rows: 10,
            location_threshold: 2,
            llm_timeout_secs: 120,
        }
    }
}
