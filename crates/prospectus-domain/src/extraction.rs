//! Extraction results and aggregated answers
//!
//! The legacy `"0"` string sentinel for "not found" is not modeled here:
//! extractors return `Option<Extraction>`, and only the LLM wire contract
//! still speaks `"0"` (the reply parser maps it to `None`).

use crate::datapoint::DatapointId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A successfully extracted value with its location evidence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    /// The normalized value, formatted per the datapoint's output rule
    pub value: String,

    /// Free-text description of where the value was found
    pub location: Option<String>,

    /// 1-based page number when resolved against per-page text
    pub page: Option<u32>,
}

impl Extraction {
    /// A found value with a location description and no page yet.
    pub fn new(value: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            location: Some(location.into()),
            page: None,
        }
    }

    /// Attach a resolved page number.
    pub fn with_page(mut self, page: Option<u32>) -> Self {
        self.page = page;
        self
    }
}

/// Outcome of resolving a user question into engine terms.
///
/// Both fields `None` is a valid terminal state: the query was
/// uninterpretable and the caller should surface guidance instead of
/// running extraction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryResolution {
    /// The datapoint the user asked about, when recognized
    pub datapoint: Option<DatapointId>,

    /// The share class in canonical `"Class X"` form, when named
    pub class: Option<String>,
}

/// Where an answer was found within a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Citation {
    /// 1-based page number (PDF origin)
    Page(u32),
    /// Element id (HTML origin)
    Anchor(String),
    /// No finer location resolved; see the document
    Document,
}

impl fmt::Display for Citation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Citation::Page(n) => write!(f, "page {}", n),
            Citation::Anchor(id) => write!(f, "section #{}", id),
            Citation::Document => write!(f, "see document"),
        }
    }
}

/// One document's contribution to a multi-document answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentAnswer {
    /// Name of the source document
    pub document: String,

    /// Extracted value
    pub value: String,

    /// Resolved citation
    pub citation: Citation,

    /// Free-text location description, when available
    pub location: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_builder() {
        let extraction = Extraction::new("1.19%", "expenses table").with_page(Some(3));
        assert_eq!(extraction.value, "1.19%");
        assert_eq!(extraction.location.as_deref(), Some("expenses table"));
        assert_eq!(extraction.page, Some(3));
    }

    #[test]
    fn test_default_resolution_is_unresolved() {
        let resolution = QueryResolution::default();
        assert!(resolution.datapoint.is_none());
        assert!(resolution.class.is_none());
    }

    #[test]
    fn test_citation_display() {
        assert_eq!(Citation::Page(7).to_string(), "page 7");
        assert_eq!(Citation::Anchor("fees".to_string()).to_string(), "section #fees");
        assert_eq!(Citation::Document.to_string(), "see document");
    }
}
