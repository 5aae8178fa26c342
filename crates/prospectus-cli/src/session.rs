//! Shared session state for one-shot commands and the REPL.

use crate::config::Config;
use crate::error::Result;
use crate::loader;
use prospectus_domain::{Catalog, DatapointId, QueryResolution, ShareClass};
use prospectus_engine::{Aggregator, DocumentStore, LlmExtractor, QueryParser};
use prospectus_llm::OpenAiProvider;
use std::sync::Arc;
use tracing::debug;

/// Loaded documents, catalog, and the optional LLM extractor.
pub struct Session {
    /// Documents available for extraction
    pub store: DocumentStore,

    /// Datapoint catalog
    pub catalog: Catalog,

    /// CLI configuration
    pub config: Config,

    extractor: Option<LlmExtractor<OpenAiProvider>>,
}

impl Session {
    /// Build a session from configuration; LLM extraction is enabled when
    /// a key is available and `rules_only` is not set.
    pub fn new(config: Config, api_key: Option<String>, rules_only: bool) -> Self {
        let key = api_key.or_else(|| config.llm.api_key.clone());
        let extractor = match (rules_only, key) {
            (false, Some(key)) => {
                let endpoint = config
                    .llm
                    .endpoint
                    .clone()
                    .unwrap_or_else(|| prospectus_llm::openai::DEFAULT_ENDPOINT.to_string());
                let provider = OpenAiProvider::new(endpoint, key, config.llm.model.clone());
                Some(LlmExtractor::new(Arc::new(provider), config.engine.clone()))
            }
            _ => None,
        };
        debug!(llm = extractor.is_some(), "session created");

        Self {
            store: DocumentStore::new(),
            catalog: Catalog::default(),
            config,
            extractor,
        }
    }

    /// Whether questions will go through the LLM.
    pub fn llm_enabled(&self) -> bool {
        self.extractor.is_some()
    }

    /// Load document files into the store.
    pub fn load_documents(&mut self, paths: &[String]) -> Result<usize> {
        let mut loaded = 0;
        for path in paths {
            for document in loader::load_documents(path)? {
                self.store.insert(document);
                loaded += 1;
            }
        }
        Ok(loaded)
    }

    /// Load the catalog from a CSV file.
    pub fn load_catalog(&mut self, path: &str) -> Result<usize> {
        self.catalog = loader::load_catalog(path)?;
        Ok(self.catalog.specs().len())
    }

    /// Resolve a question into a datapoint and class, preferring the LLM
    /// and falling back to the deterministic parser when it fails.
    pub async fn resolve(&self, question: &str) -> QueryResolution {
        if let Some(extractor) = &self.extractor {
            if let Some(resolution) = extractor.parse_query(question, &self.catalog).await {
                return self.fill_default_class(resolution);
            }
        }
        let resolution = QueryParser::new(&self.catalog).resolve(question);
        self.fill_default_class(resolution)
    }

    /// Answer a resolved question across every loaded document.
    pub async fn answer(
        &self,
        datapoint: DatapointId,
        class: &ShareClass,
    ) -> Vec<prospectus_domain::DocumentAnswer> {
        let aggregator = Aggregator::new(&self.catalog, &self.config.engine);
        match &self.extractor {
            Some(extractor) => {
                aggregator
                    .answer_with_llm(&self.store, extractor, datapoint, class)
                    .await
            }
            None => aggregator.answer_rule_based(&self.store, datapoint, class),
        }
    }

    /// When the question named no class, use the catalog's default for the
    /// resolved datapoint.
    fn fill_default_class(&self, mut resolution: QueryResolution) -> QueryResolution {
        if resolution.class.is_none() {
            if let Some(datapoint) = resolution.datapoint {
                resolution.class = self
                    .catalog
                    .specs()
                    .iter()
                    .find(|spec| spec.datapoint == datapoint)
                    .map(|spec| spec.default_class.clone());
            }
        }
        resolution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prospectus_domain::{DatapointSpec, OutputRule};

    fn session_with_catalog() -> Session {
        let mut session = Session::new(Config::default(), None, true);
        session.catalog = Catalog::new(vec![DatapointSpec {
            datapoint: DatapointId::Cdsc,
            default_class: "Class C".to_string(),
            instruction: "what is the cdsc for {class}".to_string(),
            output_rule: OutputRule::CdscSpecial,
        }]);
        session
    }

    #[test]
    fn test_rules_only_session_has_no_llm() {
        let session = Session::new(Config::default(), Some("sk-test".to_string()), true);
        assert!(!session.llm_enabled());
    }

    #[test]
    fn test_key_enables_llm() {
        let session = Session::new(Config::default(), Some("sk-test".to_string()), false);
        assert!(session.llm_enabled());
    }

    #[tokio::test]
    async fn test_resolve_fills_catalog_default_class() {
        let session = session_with_catalog();
        let resolution = session.resolve("what is the cdsc for this fund").await;
        assert_eq!(resolution.datapoint, Some(DatapointId::Cdsc));
        assert_eq!(resolution.class.as_deref(), Some("Class C"));
    }

    #[tokio::test]
    async fn test_explicit_class_survives_resolution() {
        let session = session_with_catalog();
        let resolution = session.resolve("what is the cdsc for Class B").await;
        assert_eq!(resolution.class.as_deref(), Some("Class B"));
    }
}
