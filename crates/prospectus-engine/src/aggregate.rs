//! Multi-document answer assembly
//!
//! One question fans out across every document in the store; each document
//! contributes at most one answer, and documents where the value is absent
//! are silently skipped. An empty result means no document had the value,
//! which is an answer in itself, not an error.

use crate::config::EngineConfig;
use crate::llm::LlmExtractor;
use crate::locate;
use crate::rules::extract_rule_based;
use crate::store::DocumentStore;
use prospectus_domain::{
    traits::LlmProvider, Catalog, Citation, DatapointId, Document, DocumentAnswer, Extraction,
    ShareClass,
};
use std::fmt::Display;
use tracing::info;

/// Assembles per-document answers for a resolved question.
pub struct Aggregator<'a> {
    catalog: &'a Catalog,
    config: &'a EngineConfig,
}

impl<'a> Aggregator<'a> {
    /// Create an aggregator over a catalog and engine configuration.
    pub fn new(catalog: &'a Catalog, config: &'a EngineConfig) -> Self {
        Self { catalog, config }
    }

    /// Answer from every document using the deterministic extractors.
    pub fn answer_rule_based(
        &self,
        store: &DocumentStore,
        datapoint: DatapointId,
        class: &ShareClass,
    ) -> Vec<DocumentAnswer> {
        let variants = class.variants();
        let mut answers = Vec::new();
        for document in store.documents() {
            let text = document.full_text();
            if let Some(extraction) =
                extract_rule_based(datapoint, &text, document.tables(), &variants)
            {
                answers.push(self.to_answer(document, extraction));
            }
        }
        info!(
            %datapoint,
            class = %class,
            documents = store.len(),
            found = answers.len(),
            "rule-based extraction complete"
        );
        answers
    }

    /// Answer from every document through the LLM extractor.
    pub async fn answer_with_llm<L>(
        &self,
        store: &DocumentStore,
        extractor: &LlmExtractor<L>,
        datapoint: DatapointId,
        class: &ShareClass,
    ) -> Vec<DocumentAnswer>
    where
        L: LlmProvider + Send + Sync + 'static,
        L::Error: Display,
    {
        let output_rule = self.catalog.output_rule(datapoint);
        let mut answers = Vec::new();
        for document in store.documents() {
            if let Some(extraction) = extractor
                .extract(datapoint, class, document, output_rule)
                .await
            {
                answers.push(self.to_answer(document, extraction));
            }
        }
        info!(
            %datapoint,
            class = %class,
            documents = store.len(),
            found = answers.len(),
            "LLM extraction complete"
        );
        answers
    }

    /// Attach the finest citation the evidence supports.
    fn to_answer(&self, document: &Document, extraction: Extraction) -> DocumentAnswer {
        let citation = self.cite(document, &extraction);
        DocumentAnswer {
            document: document.name.clone(),
            value: extraction.value,
            citation,
            location: extraction.location,
        }
    }

    fn cite(&self, document: &Document, extraction: &Extraction) -> Citation {
        if let Some(page) = extraction.page {
            return Citation::Page(page);
        }
        let Some(location) = extraction.location.as_deref() else {
            return Citation::Document;
        };
        let keywords = locate::context_words(location);

        if let Some(pages) = document.pages() {
            if let Some(page) =
                locate::resolve_page(&keywords, pages, self.config.location_threshold)
            {
                return Citation::Page(page);
            }
        }
        if let Some(anchors) = document.anchors() {
            if let Some(anchor) =
                locate::resolve_anchor(&keywords, anchors, self.config.location_threshold)
            {
                return Citation::Anchor(anchor);
            }
        }
        Citation::Document
    }
}
