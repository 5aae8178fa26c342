//! Minimum investment extractors
//!
//! Initial investment is searched inside a class-heading block first (the
//! text from a `Class X`/`Class X Shares` heading down to the next class
//! heading), with looser whole-document patterns as fallback. The AIP
//! minimum uses line-spanning patterns anchored on the class and the
//! automatic-investment-plan phrase.

use prospectus_domain::Extraction;
use regex::Regex;

const LOCATION: &str = "minimum investment section";

/// Strip grouping separators and re-render as `$<digits>`.
fn render_amount(raw: &str) -> String {
    format!("${}", raw.replace(',', ""))
}

/// Extract the required initial investment for a class.
pub fn extract_initial_investment(text: &str, variants: &[String]) -> Option<Extraction> {
    // Class-heading block: heading line, then body up to the next heading
    for variant in variants {
        let section_pattern = format!(
            r"(?is){}(?:\s+shares?)?\s*\n(.*?)(?:\n\s*class\s+[a-z]\b|\z)",
            regex::escape(variant)
        );
        let section_re = Regex::new(&section_pattern).expect("escaped variant pattern");
        let Some(section) = section_re.captures(text) else {
            continue;
        };

        let init_re = Regex::new(r"(?i)initial\s+investment:\s*([^\n]*)").unwrap();
        let Some(caps) = init_re.captures(section.get(1).unwrap().as_str()) else {
            continue;
        };
        let value = caps[1].trim().to_string();
        if value.to_lowercase().contains("no minimum") {
            return Some(Extraction::new("No minimum", LOCATION));
        }
        let dollar_re = Regex::new(r"\$\s*([\d,]+)").unwrap();
        if let Some(dollar) = dollar_re.captures(&value) {
            return Some(Extraction::new(render_amount(&dollar[1]), LOCATION));
        }
    }

    // Fallback: loose whole-document patterns
    for variant in variants {
        let no_min_pattern = format!(
            r"(?is){}.*?initial\s+investment.*?no\s+minimum",
            regex::escape(variant)
        );
        if Regex::new(&no_min_pattern).unwrap().is_match(text) {
            return Some(Extraction::new("No minimum", LOCATION));
        }

        let amount_pattern = format!(
            r"(?is){}.*?initial\s+investment.*?\$\s*([\d,]+)",
            regex::escape(variant)
        );
        if let Some(caps) = Regex::new(&amount_pattern).unwrap().captures(text) {
            return Some(Extraction::new(render_amount(&caps[1]), LOCATION));
        }
    }

    None
}

/// Extract the minimum subsequent investment under an Automatic Investment
/// Plan for a class.
pub fn extract_minimum_subsequent_aip(text: &str, variants: &[String]) -> Option<Extraction> {
    for variant in variants {
        let pattern = format!(
            r"(?is){}.*?(?:subsequent\s+investment|subsequent).*?(?:automatic\s+investment\s+plans?|aip).*?\$\s*([\d,]+)",
            regex::escape(variant)
        );
        if let Some(caps) = Regex::new(&pattern).unwrap().captures(text) {
            return Some(Extraction::new(render_amount(&caps[1]), LOCATION));
        }
    }

    // Class-agnostic fallback anchored only on the AIP phrase
    let fallback = Regex::new(
        r"(?is)(?:automatic\s+investment\s+plans?|aip).*?(?:subsequent\s+investment|subsequent).*?\$\s*([\d,]+)",
    )
    .unwrap();
    fallback
        .captures(text)
        .map(|caps| Extraction::new(render_amount(&caps[1]), LOCATION))
}
