//! The ask command: resolve a question and answer it per document.

use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::session::Session;
use prospectus_domain::{DatapointId, ShareClass};

/// Execute the ask command.
pub async fn execute_ask(question: &str, session: &Session, formatter: &Formatter) -> Result<()> {
    if question.trim().is_empty() {
        return Err(CliError::InvalidInput("Empty question".to_string()));
    }
    if session.store.is_empty() {
        return Err(CliError::NoDocuments);
    }

    let resolution = session.resolve(question).await;

    let Some(datapoint) = resolution.datapoint else {
        let available = available_datapoints(session);
        println!("{}", formatter.guidance_unknown_datapoint(&available));
        return Ok(());
    };
    let Some(class) = resolution.class else {
        println!("{}", formatter.guidance_missing_class());
        return Ok(());
    };

    let answers = session.answer(datapoint, &ShareClass::new(class)).await;
    println!("{}", formatter.format_answers(&answers)?);
    Ok(())
}

/// Datapoints worth suggesting: the catalog's, or all known ones when no
/// catalog is loaded.
pub fn available_datapoints(session: &Session) -> Vec<DatapointId> {
    let ids = session.catalog.datapoint_ids();
    if ids.is_empty() {
        DatapointId::ALL.to_vec()
    } else {
        ids
    }
}
