//! Deterministic query resolution
//!
//! Two passes run in a fixed order: catalog instruction templates first,
//! then a keyword cascade. The first pass to identify a datapoint wins.
//! Class extraction is independent of both and runs up front.

use once_cell::sync::Lazy;
use prospectus_domain::{Catalog, DatapointId, QueryResolution};
use regex::Regex;
use tracing::warn;

static CLASS_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)class\s+([a-z])\s+shares",
        r"(?i)for\s+class\s+([a-z])\b",
        r"(?i)\(class\s+([a-z])\)",
        r"(?i)class\s+([a-z])\b",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Keyword cascade, tried in order. Each entry is the phrases that imply
/// a datapoint when all of them occur in the query. Both the spoken
/// phrase and the catalog identifier form are accepted, and total annual
/// expenses outranks net expenses when a query names both.
const KEYWORD_RULES: &[(&[&str], DatapointId)] = &[
    (
        &["total annual fund operating expenses"],
        DatapointId::TotalAnnualFundOperatingExpenses,
    ),
    (
        &["total_annual_fund_operating_expenses"],
        DatapointId::TotalAnnualFundOperatingExpenses,
    ),
    (&["net expenses"], DatapointId::NetExpenses),
    (&["net_expenses"], DatapointId::NetExpenses),
    (
        &["automatic investment plan", "subsequent"],
        DatapointId::MinimumSubsequentInvestmentAip,
    ),
    (
        &["subsequent", "aip"],
        DatapointId::MinimumSubsequentInvestmentAip,
    ),
    (&["initial investment"], DatapointId::InitialInvestment),
    (&["cdsc"], DatapointId::Cdsc),
    (&["redemption fee"], DatapointId::RedemptionFee),
];

/// Resolves user questions against the loaded catalog without an LLM.
pub struct QueryParser<'a> {
    catalog: &'a Catalog,
}

impl<'a> QueryParser<'a> {
    /// Create a parser over a catalog.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Resolve a question into a datapoint and class. Both fields may come
    /// back `None`; the caller decides what guidance to surface.
    pub fn resolve(&self, query: &str) -> QueryResolution {
        let explicit_class = extract_class(query);

        let passes: [fn(&Self, &str) -> Option<(DatapointId, Option<String>)>; 2] =
            [Self::match_catalog, Self::match_keywords];

        for pass in passes {
            if let Some((datapoint, default_class)) = pass(self, query) {
                return QueryResolution {
                    datapoint: Some(datapoint),
                    class: explicit_class.or(default_class),
                };
            }
        }

        QueryResolution {
            datapoint: None,
            class: explicit_class,
        }
    }

    /// Match the query against catalog instruction templates, with the
    /// `{class}` placeholder widened to match anything.
    fn match_catalog(&self, query: &str) -> Option<(DatapointId, Option<String>)> {
        for spec in self.catalog.specs() {
            let pattern = format!(
                "(?i){}",
                regex::escape(&spec.instruction.to_lowercase()).replace(r"\{class\}", ".*?")
            );
            let re = match Regex::new(&pattern) {
                Ok(re) => re,
                Err(e) => {
                    warn!(instruction = %spec.instruction, "unusable catalog instruction: {}", e);
                    continue;
                }
            };
            if re.is_match(query) {
                return Some((spec.datapoint, Some(spec.default_class.clone())));
            }
        }
        None
    }

    fn match_keywords(&self, query: &str) -> Option<(DatapointId, Option<String>)> {
        let query_lower = query.to_lowercase();
        for (phrases, datapoint) in KEYWORD_RULES {
            if phrases.iter().all(|phrase| query_lower.contains(phrase)) {
                return Some((*datapoint, None));
            }
        }
        None
    }
}

/// Pull an explicitly named share class out of a question, normalized to
/// `"Class X"`.
pub fn extract_class(query: &str) -> Option<String> {
    for re in CLASS_PATTERNS.iter() {
        if let Some(caps) = re.captures(query) {
            return Some(format!("Class {}", caps[1].to_uppercase()));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use prospectus_domain::{DatapointSpec, OutputRule};

    fn catalog() -> Catalog {
        Catalog::new(vec![
            DatapointSpec {
                datapoint: DatapointId::NetExpenses,
                default_class: "Class A".to_string(),
                instruction: "what are the net expenses for {class}".to_string(),
                output_rule: OutputRule::Percentage,
            },
            DatapointSpec {
                datapoint: DatapointId::Cdsc,
                default_class: "Class C".to_string(),
                instruction: "what is the cdsc schedule for {class}".to_string(),
                output_rule: OutputRule::CdscSpecial,
            },
        ])
    }

    #[test]
    fn test_catalog_template_match() {
        let catalog = catalog();
        let parser = QueryParser::new(&catalog);
        let resolution = parser.resolve("What are the net expenses for Class I shares?");
        assert_eq!(resolution.datapoint, Some(DatapointId::NetExpenses));
        assert_eq!(resolution.class.as_deref(), Some("Class I"));
    }

    #[test]
    fn test_catalog_default_class_when_none_named() {
        let catalog = catalog();
        let parser = QueryParser::new(&catalog);
        let resolution = parser.resolve("what is the cdsc schedule for this fund");
        assert_eq!(resolution.datapoint, Some(DatapointId::Cdsc));
        assert_eq!(resolution.class.as_deref(), Some("Class C"));
    }

    #[test]
    fn test_keyword_cascade_without_catalog() {
        let empty = Catalog::default();
        let parser = QueryParser::new(&empty);
        let resolution = parser.resolve("Initial investment Class C");
        assert_eq!(resolution.datapoint, Some(DatapointId::InitialInvestment));
        assert_eq!(resolution.class.as_deref(), Some("Class C"));
    }

    #[test]
    fn test_explicit_class_beats_catalog_default() {
        let catalog = catalog();
        let parser = QueryParser::new(&catalog);
        let resolution = parser.resolve("what is the cdsc schedule for Class B");
        assert_eq!(resolution.class.as_deref(), Some("Class B"));
    }

    #[test]
    fn test_total_annual_outranks_net_expenses() {
        let empty = Catalog::default();
        let parser = QueryParser::new(&empty);
        let resolution = parser
            .resolve("compare net expenses with total annual fund operating expenses");
        assert_eq!(
            resolution.datapoint,
            Some(DatapointId::TotalAnnualFundOperatingExpenses)
        );
    }

    #[test]
    fn test_aip_phrase_spelled_out() {
        let empty = Catalog::default();
        let parser = QueryParser::new(&empty);
        let resolution = parser
            .resolve("minimum subsequent investment for automatic investment plan for Class R");
        assert_eq!(
            resolution.datapoint,
            Some(DatapointId::MinimumSubsequentInvestmentAip)
        );
        assert_eq!(resolution.class.as_deref(), Some("Class R"));
    }

    #[test]
    fn test_identifier_form_recognized() {
        let empty = Catalog::default();
        let parser = QueryParser::new(&empty);
        let resolution = parser.resolve("NET_EXPENSES for Class I");
        assert_eq!(resolution.datapoint, Some(DatapointId::NetExpenses));
    }

    #[test]
    fn test_unresolvable_query() {
        let empty = Catalog::default();
        let parser = QueryParser::new(&empty);
        let resolution = parser.resolve("what is the fund's dividend yield?");
        assert_eq!(resolution.datapoint, None);
        assert_eq!(resolution.class, None);
    }

    #[test]
    fn test_class_extraction_variants() {
        assert_eq!(extract_class("fees for Class A shares"), Some("Class A".to_string()));
        assert_eq!(extract_class("fees (class c)"), Some("Class C".to_string()));
        assert_eq!(extract_class("for class i please"), Some("Class I".to_string()));
        assert_eq!(extract_class("no share letters here"), None);
    }
}
