//! Parsed document model
//!
//! Documents are produced by the ingestion collaborator (PDF/HTML decoding
//! is out of scope here) and arrive pre-parsed: page-indexed text and raw
//! tables for PDFs, flat text and an id-to-text anchor map for HTML.
//! A document is immutable once produced.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A raw extracted table: ordered rows of cell strings.
///
/// There is no header or type metadata; headers must be discovered by
/// content matching against share-class surface forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table(pub Vec<Vec<String>>);

impl Table {
    /// The table's rows, top to bottom.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.0
    }
}

/// A parsed document, keyed by file name in the document store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Source file name; also the store key and citation label.
    pub name: String,

    /// Origin-specific content.
    #[serde(flatten)]
    pub body: DocumentBody,
}

/// Origin-specific document content.
///
/// Exactly one shape is populated per document; the `type` tag in the
/// interchange JSON disambiguates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DocumentBody {
    /// PDF origin: 1-based page number to page text, plus extracted tables.
    Pdf {
        /// Page text keyed by 1-based page number, in page order. JSON
        /// object keys are strings, so page numbers convert at the wire.
        #[serde(with = "page_keys")]
        pages: BTreeMap<u32, String>,
        /// Tables in document order.
        tables: Vec<Table>,
    },
    /// HTML origin: flat text plus an element-id to element-text map.
    Html {
        /// Whitespace-joined text of the whole document.
        text: String,
        /// Element id to element text, for anchor citations.
        anchors: BTreeMap<String, String>,
    },
}

impl Document {
    /// Full searchable text: pages joined with newlines, or the flat text.
    pub fn full_text(&self) -> String {
        match &self.body {
            DocumentBody::Pdf { pages, .. } => {
                pages.values().cloned().collect::<Vec<_>>().join("\n")
            }
            DocumentBody::Html { text, .. } => text.clone(),
        }
    }

    /// Extracted tables, empty for HTML documents.
    pub fn tables(&self) -> &[Table] {
        match &self.body {
            DocumentBody::Pdf { tables, .. } => tables,
            DocumentBody::Html { .. } => &[],
        }
    }

    /// Per-page text for PDF documents.
    pub fn pages(&self) -> Option<&BTreeMap<u32, String>> {
        match &self.body {
            DocumentBody::Pdf { pages, .. } => Some(pages),
            DocumentBody::Html { .. } => None,
        }
    }

    /// Anchor map for HTML documents.
    pub fn anchors(&self) -> Option<&BTreeMap<String, String>> {
        match &self.body {
            DocumentBody::Html { anchors, .. } => Some(anchors),
            DocumentBody::Pdf { .. } => None,
        }
    }
}

mod page_keys {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::collections::BTreeMap;

    pub fn serialize<S>(pages: &BTreeMap<u32, String>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(pages.iter().map(|(page, text)| (page.to_string(), text)))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BTreeMap<u32, String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, String>::deserialize(deserializer)?;
        raw.into_iter()
            .map(|(page, text)| {
                page.trim()
                    .parse::<u32>()
                    .map(|page| (page, text))
                    .map_err(|_| D::Error::custom(format!("invalid page number '{}'", page)))
            })
            .collect()
    }
}
