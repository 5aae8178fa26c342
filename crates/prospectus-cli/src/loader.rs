//! Loading of parsed documents and the datapoint catalog.
//!
//! Documents arrive as interchange JSON produced by the ingestion step,
//! either a single document object or an array of them. The catalog is a
//! CSV with a `Datapoint,Class,Instruction,OutputRule` header.

use crate::error::{CliError, Result};
use prospectus_domain::{Catalog, DatapointSpec, Document};
use std::fs;
use std::path::Path;
use tracing::info;

/// Load one document file, which may hold one document or an array.
pub fn load_documents(path: impl AsRef<Path>) -> Result<Vec<Document>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let documents = match serde_json::from_str::<Vec<Document>>(&contents) {
        Ok(documents) => documents,
        Err(_) => vec![serde_json::from_str::<Document>(&contents)?],
    };
    info!(path = %path.display(), count = documents.len(), "loaded documents");
    Ok(documents)
}

/// Load the datapoint catalog from a CSV file.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?.clone();
    let expected = ["Datapoint", "Class", "Instruction", "OutputRule"];
    for name in expected {
        if !headers.iter().any(|h| h.eq_ignore_ascii_case(name)) {
            return Err(CliError::Catalog(format!(
                "catalog is missing the '{}' column",
                name
            )));
        }
    }
    let index_of = |name: &str| {
        headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .unwrap_or(0)
    };
    let (dp_col, class_col, instr_col, rule_col) = (
        index_of("Datapoint"),
        index_of("Class"),
        index_of("Instruction"),
        index_of("OutputRule"),
    );

    let mut specs = Vec::new();
    for record in reader.records() {
        let record = record?;
        let field = |i: usize| record.get(i).unwrap_or("").trim();

        specs.push(DatapointSpec {
            datapoint: field(dp_col).parse()?,
            default_class: field(class_col).to_string(),
            instruction: field(instr_col).to_string(),
            output_rule: field(rule_col).parse()?,
        });
    }
    info!(path = %path.display(), rows = specs.len(), "loaded catalog");
    Ok(Catalog::new(specs))
}
