//! The datapoints command: list what the catalog can answer.

use crate::error::Result;
use crate::output::Formatter;
use crate::session::Session;

/// Execute the datapoints command.
pub fn execute_datapoints(session: &Session, formatter: &Formatter) -> Result<()> {
    if session.catalog.specs().is_empty() {
        println!(
            "{}",
            formatter.info("No catalog loaded; built-in datapoints:")
        );
        for id in prospectus_domain::DatapointId::ALL {
            println!("  {}", id);
        }
        return Ok(());
    }

    for spec in session.catalog.specs() {
        println!(
            "  {}  (default {}, {})",
            spec.datapoint, spec.default_class, spec.output_rule
        );
    }
    Ok(())
}
