//! Prospectus Domain Layer
//!
//! Core data model for the datapoint extraction engine: parsed documents,
//! the datapoint catalog, share classes and their surface variants,
//! extraction results, and the trait seam to the LLM infrastructure.
//!
//! ## Key Concepts
//!
//! - **Document**: page-indexed PDF text plus tables, or flat HTML text
//!   plus anchors, produced by the ingestion collaborator
//! - **Datapoint**: a named financial fact (e.g. `NET_EXPENSES`) with an
//!   output-format rule from the catalog
//! - **Share class**: a fund's distribution channel variant; matching is
//!   done over an ordered set of surface forms
//! - **Extraction**: a found value with optional location evidence;
//!   "not found" is `Option::None`, never a sentinel value
//!
//! ## Architecture
//!
//! Infrastructure implementations (HTTP LLM providers, stores, CLI) live
//! in other crates; this crate defines the types and trait boundaries
//! they share.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod class;
pub mod datapoint;
pub mod document;
pub mod extraction;
pub mod traits;

// Re-exports for convenience
pub use class::ShareClass;
pub use datapoint::{Catalog, CatalogError, DatapointId, DatapointSpec, OutputRule};
pub use document::{Document, DocumentBody, Table};
pub use extraction::{Citation, DocumentAnswer, Extraction, QueryResolution};
