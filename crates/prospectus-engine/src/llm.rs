//! LLM-backed extraction
//!
//! Every failure mode here degrades to "not found": timeouts, transport
//! errors, contract violations, and explicit not-found replies all come
//! back as `None`, with the cause logged. Callers never see an error for
//! a single document.

use crate::config::EngineConfig;
use crate::locate;
use crate::parser::{parse_extraction_reply, parse_query_reply};
use crate::prompt::{query_prompt, PromptBuilder};
use prospectus_domain::{
    traits::LlmProvider, Catalog, DatapointId, Document, Extraction, OutputRule, QueryResolution,
    ShareClass,
};
use std::fmt::Display;
use std::str::FromStr;
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, warn};

/// Extracts datapoints from a single document through an LLM provider.
pub struct LlmExtractor<L> {
    provider: Arc<L>,
    config: EngineConfig,
}

impl<L> LlmExtractor<L>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: Display,
{
    /// Create an extractor over a shared provider.
    pub fn new(provider: Arc<L>, config: EngineConfig) -> Self {
        Self { provider, config }
    }

    /// The extractor's configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Extract one datapoint for one class from one document.
    ///
    /// Returns `None` when the value is absent or anything goes wrong on
    /// the way to it.
    pub async fn extract(
        &self,
        datapoint: DatapointId,
        class: &ShareClass,
        document: &Document,
        output_rule: OutputRule,
    ) -> Option<Extraction> {
        let text = document.full_text();
        let prompt = PromptBuilder::new(
            datapoint,
            class.canonical(),
            &text,
            document.tables(),
            output_rule,
        )
        .with_limits(
            self.config.text_budget,
            self.config.max_tables,
            self.config.max_table_rows,
        )
        .build();

        let raw = self.call(prompt, document).await?;

        let reply = match parse_extraction_reply(&raw) {
            Ok(reply) => reply,
            Err(e) => {
                warn!(document = %document.name, %datapoint, "discarding LLM reply: {}", e);
                return None;
            }
        };
        if !reply.is_found() {
            debug!(document = %document.name, %datapoint, "LLM reported value not present");
            return None;
        }

        let page = reply
            .context
            .as_deref()
            .or(reply.location.as_deref())
            .zip(document.pages())
            .and_then(|(evidence, pages)| {
                locate::resolve_page(
                    &locate::context_words(evidence),
                    pages,
                    self.config.location_threshold,
                )
            });

        Some(Extraction {
            value: reply.value.trim().to_string(),
            location: reply.location,
            page,
        })
    }

    /// Resolve a free-form question into a datapoint and class.
    ///
    /// `None` means the round-trip itself failed and the caller should
    /// fall back to deterministic parsing. A `Some` carrying null fields
    /// is a definitive "the model could not tell" and is used as-is.
    pub async fn parse_query(&self, query: &str, catalog: &Catalog) -> Option<QueryResolution> {
        let ids = catalog.datapoint_ids();
        let available = if ids.is_empty() {
            DatapointId::ALL.to_vec()
        } else {
            ids
        };
        let prompt = query_prompt(query, &available);

        let raw = self.call_raw(prompt).await?;
        let reply = match parse_query_reply(&raw) {
            Ok(reply) => reply,
            Err(e) => {
                warn!("discarding query-parse reply: {}", e);
                return None;
            }
        };

        let datapoint = match reply.datapoint.as_deref() {
            Some(name) => match DatapointId::from_str(name) {
                Ok(id) => Some(id),
                Err(_) => {
                    warn!(name, "query-parse reply named an unknown datapoint");
                    return None;
                }
            },
            None => None,
        };

        Some(QueryResolution {
            datapoint,
            class: reply.class,
        })
    }

    async fn call(&self, prompt: String, document: &Document) -> Option<String> {
        let name = document.name.clone();
        match self.call_raw(prompt).await {
            Some(raw) => Some(raw),
            None => {
                debug!(document = %name, "LLM call yielded nothing");
                None
            }
        }
    }

    /// One round-trip, bounded by the configured timeout. The provider
    /// trait is blocking, so the call runs on the blocking pool.
    async fn call_raw(&self, prompt: String) -> Option<String> {
        let provider = Arc::clone(&self.provider);
        let call = tokio::task::spawn_blocking(move || {
            provider.generate(&prompt).map_err(|e| e.to_string())
        });

        match timeout(self.config.llm_timeout(), call).await {
            Ok(Ok(Ok(raw))) => Some(raw),
            Ok(Ok(Err(e))) => {
                warn!("LLM provider error: {}", e);
                None
            }
            Ok(Err(e)) => {
                warn!("LLM task failed: {}", e);
                None
            }
            Err(_) => {
                warn!(
                    timeout_secs = self.config.llm_timeout_secs,
                    "LLM call timed out"
                );
                None
            }
        }
    }
}
