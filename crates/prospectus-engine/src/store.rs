//! In-memory document store
//!
//! Parsed documents keyed by file name, owned by the caller and handed to
//! the engine by reference. Iteration order is name order, which fixes the
//! order of multi-document answers.

use prospectus_domain::Document;
use std::collections::BTreeMap;
use tracing::debug;

/// Documents available for extraction, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    documents: BTreeMap<String, Document>,
}

impl DocumentStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a document, replacing any previous one of the same name.
    pub fn insert(&mut self, document: Document) {
        self.documents.insert(document.name.clone(), document);
    }

    /// Remove a document by name.
    pub fn remove(&mut self, name: &str) -> Option<Document> {
        self.documents.remove(name)
    }

    /// Look up a document by name.
    pub fn get(&self, name: &str) -> Option<&Document> {
        self.documents.get(name)
    }

    /// All documents, in name order.
    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.documents.values()
    }

    /// Number of documents held.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the store holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Drop every document whose name is not in `active`. Used when the
    /// caller's file selection changes between questions.
    pub fn retain_named(&mut self, active: &[String]) {
        let before = self.documents.len();
        self.documents.retain(|name, _| active.contains(name));
        let evicted = before - self.documents.len();
        if evicted > 0 {
            debug!(evicted, "dropped deselected documents");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prospectus_domain::DocumentBody;
    use std::collections::BTreeMap;

    fn doc(name: &str) -> Document {
        Document {
            name: name.to_string(),
            body: DocumentBody::Html {
                text: String::new(),
                anchors: BTreeMap::new(),
            },
        }
    }

    #[test]
    fn test_insert_replaces_same_name() {
        let mut store = DocumentStore::new();
        store.insert(doc("fund.pdf"));
        store.insert(doc("fund.pdf"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_iteration_is_name_ordered() {
        let mut store = DocumentStore::new();
        store.insert(doc("b.pdf"));
        store.insert(doc("a.pdf"));
        let names: Vec<&str> = store.documents().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["a.pdf", "b.pdf"]);
    }

    #[test]
    fn test_retain_named_evicts_deselected() {
        let mut store = DocumentStore::new();
        store.insert(doc("a.pdf"));
        store.insert(doc("b.pdf"));
        store.retain_named(&["b.pdf".to_string()]);
        assert!(store.get("a.pdf").is_none());
        assert!(store.get("b.pdf").is_some());
    }
}
