//! Datapoint identifiers and the externally loaded catalog
//!
//! The catalog is tabular (`Datapoint,Class,Instruction,OutputRule`) and
//! consumed read-only: the query parser matches instruction templates
//! against user questions, and extraction uses the output rule to describe
//! the expected value format.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while interpreting catalog rows.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Datapoint column held an unknown identifier
    #[error("Unknown datapoint: {0}")]
    UnknownDatapoint(String),

    /// OutputRule column held an unknown rule name
    #[error("Unknown output rule: {0}")]
    UnknownOutputRule(String),
}

/// A named financial fact the engine can be asked to locate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DatapointId {
    /// Total annual fund operating expenses percentage
    TotalAnnualFundOperatingExpenses,
    /// Net expenses after fee waivers/reimbursements
    NetExpenses,
    /// Minimum subsequent investment under an Automatic Investment Plan
    MinimumSubsequentInvestmentAip,
    /// Required initial investment amount
    InitialInvestment,
    /// Contingent Deferred Sales Charge schedule
    Cdsc,
    /// Redemption fee terms
    RedemptionFee,
}

impl DatapointId {
    /// All known datapoints, in catalog order.
    pub const ALL: [DatapointId; 6] = [
        DatapointId::TotalAnnualFundOperatingExpenses,
        DatapointId::NetExpenses,
        DatapointId::MinimumSubsequentInvestmentAip,
        DatapointId::InitialInvestment,
        DatapointId::Cdsc,
        DatapointId::RedemptionFee,
    ];

    /// The catalog identifier for this datapoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            DatapointId::TotalAnnualFundOperatingExpenses => {
                "TOTAL_ANNUAL_FUND_OPERATING_EXPENSES"
            }
            DatapointId::NetExpenses => "NET_EXPENSES",
            DatapointId::MinimumSubsequentInvestmentAip => {
                "MINIMUM_SUBSEQUENT_INVESTMENT_AIP"
            }
            DatapointId::InitialInvestment => "INITIAL_INVESTMENT",
            DatapointId::Cdsc => "CDSC",
            DatapointId::RedemptionFee => "REDEMPTION_FEE",
        }
    }
}

impl fmt::Display for DatapointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DatapointId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| CatalogError::UnknownDatapoint(s.to_string()))
    }
}

/// The rendering/format contract an extracted value must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputRule {
    /// `"X.XX%"`
    Percentage,
    /// `"$X"` or `"$X,XXX"`
    Currency,
    /// Dollar amount or text such as `"No minimum"`
    CurrencyOrText,
    /// Free descriptive text
    Text,
    /// `"X year, Y% then Z%"`
    CdscSpecial,
}

impl OutputRule {
    /// The catalog name of this rule.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputRule::Percentage => "percentage",
            OutputRule::Currency => "currency",
            OutputRule::CurrencyOrText => "currency_or_text",
            OutputRule::Text => "text",
            OutputRule::CdscSpecial => "cdsc_special",
        }
    }
}

impl fmt::Display for OutputRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OutputRule {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "percentage" => Ok(OutputRule::Percentage),
            "currency" => Ok(OutputRule::Currency),
            "currency_or_text" => Ok(OutputRule::CurrencyOrText),
            "text" => Ok(OutputRule::Text),
            "cdsc_special" => Ok(OutputRule::CdscSpecial),
            other => Err(CatalogError::UnknownOutputRule(other.to_string())),
        }
    }
}

/// One catalog row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatapointSpec {
    /// Which datapoint this row describes
    pub datapoint: DatapointId,

    /// Default share class when the query names none
    pub default_class: String,

    /// Instruction template containing a literal `{class}` placeholder
    pub instruction: String,

    /// Format contract for extracted values
    pub output_rule: OutputRule,
}

/// The externally loaded datapoint catalog, read-only for the engine.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    specs: Vec<DatapointSpec>,
}

impl Catalog {
    /// Build a catalog from its rows, preserving row order.
    pub fn new(specs: Vec<DatapointSpec>) -> Self {
        Self { specs }
    }

    /// All rows, in load order.
    pub fn specs(&self) -> &[DatapointSpec] {
        &self.specs
    }

    /// The output rule for a datapoint, defaulting to free text when the
    /// catalog has no row for it.
    pub fn output_rule(&self, datapoint: DatapointId) -> OutputRule {
        self.specs
            .iter()
            .find(|spec| spec.datapoint == datapoint)
            .map(|spec| spec.output_rule)
            .unwrap_or(OutputRule::Text)
    }

    /// Distinct datapoint identifiers, in first-seen order.
    pub fn datapoint_ids(&self) -> Vec<DatapointId> {
        let mut ids = Vec::new();
        for spec in &self.specs {
            if !ids.contains(&spec.datapoint) {
                ids.push(spec.datapoint);
            }
        }
        ids
    }
}
