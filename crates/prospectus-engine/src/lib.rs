//! Prospectus Extraction Engine
//!
//! Answers questions about financial datapoints in fund prospectuses.
//! A question is resolved into a `(datapoint, class)` pair, fanned out
//! across every document in the store, and answered per document with a
//! citation. Extraction runs either through deterministic rule matchers
//! or through a pluggable LLM provider; both paths treat "not found" as
//! a normal outcome, never an error.
//!
//! # Examples
//!
//! ```
//! use prospectus_engine::{Aggregator, DocumentStore, EngineConfig, QueryParser};
//! use prospectus_domain::{Catalog, ShareClass};
//!
//! let catalog = Catalog::default();
//! let config = EngineConfig::default();
//! let store = DocumentStore::new();
//!
//! let resolution = QueryParser::new(&catalog).resolve("CDSC for Class C shares?");
//! if let Some(datapoint) = resolution.datapoint {
//!     let class = ShareClass::new(resolution.class.as_deref().unwrap_or("Class A"));
//!     let answers = Aggregator::new(&catalog, &config)
//!         .answer_rule_based(&store, datapoint, &class);
//!     assert!(answers.is_empty());
//! }
//! ```

#![warn(missing_docs)]

pub mod aggregate;
pub mod config;
pub mod error;
pub mod llm;
pub mod locate;
pub mod parser;
pub mod prompt;
pub mod query;
pub mod rules;
pub mod store;

pub use aggregate::Aggregator;
pub use config::EngineConfig;
pub use error::EngineError;
pub use llm::LlmExtractor;
pub use query::QueryParser;
pub use store::DocumentStore;
