//! Deterministic rule-based extractors
//!
//! One matcher per datapoint kind. Each is a pure function over
//! `(text, tables, class variants)`: identical inputs always yield the
//! identical result, and `None` means the datapoint was not found.

mod cdsc;
mod expenses;
mod investment;
mod redemption;
mod table;

pub use cdsc::extract_cdsc;
pub use expenses::{extract_annual_expenses, extract_net_expenses};
pub use investment::{extract_initial_investment, extract_minimum_subsequent_aip};
pub use redemption::extract_redemption_fee;

use prospectus_domain::{DatapointId, Extraction, Table};

/// Run the matcher for `datapoint` over a document's text and tables.
pub fn extract_rule_based(
    datapoint: DatapointId,
    text: &str,
    tables: &[Table],
    variants: &[String],
) -> Option<Extraction> {
    match datapoint {
        DatapointId::TotalAnnualFundOperatingExpenses => {
            extract_annual_expenses(text, tables, variants)
        }
        DatapointId::NetExpenses => extract_net_expenses(text, tables, variants),
        DatapointId::MinimumSubsequentInvestmentAip => {
            extract_minimum_subsequent_aip(text, variants)
        }
        DatapointId::InitialInvestment => extract_initial_investment(text, variants),
        DatapointId::Cdsc => extract_cdsc(text, variants),
        DatapointId::RedemptionFee => extract_redemption_fee(text, variants),
    }
}
