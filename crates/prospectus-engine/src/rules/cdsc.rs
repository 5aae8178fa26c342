//! CDSC (Contingent Deferred Sales Charge) extractor
//!
//! Two independent pattern paths, tried in order. The strict path assumes
//! the year count and both percentages sit in one contiguous span; real
//! documents sometimes separate them, in which case only the loose path
//! fires (years, then a trailing `<pct>% after` within the next 100
//! characters). Neither path supersedes the other.

use once_cell::sync::Lazy;
use prospectus_domain::Extraction;
use regex::Regex;

const LOCATION: &str = "CDSC section";

static AFTER_PCT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+\.?\d*)%\s+after").unwrap());

/// Extract the CDSC schedule for a class.
pub fn extract_cdsc(text: &str, variants: &[String]) -> Option<Extraction> {
    for variant in variants {
        // Strict path: years plus first-year and after percentages in one span
        let strict_pattern = format!(
            r"(?is){}.*?(\d+)\s*year.*?(\d+\.?\d*)%.*?(\d+\.?\d*)%",
            regex::escape(variant)
        );
        if let Some(caps) = Regex::new(&strict_pattern).unwrap().captures(text) {
            return Some(Extraction::new(
                format!("{} year, {}% then {}%", &caps[1], &caps[2], &caps[3]),
                LOCATION,
            ));
        }

        // Loose path: years only, then look just past the match for a
        // trailing "<pct>% after"
        let loose_pattern = format!(r"(?is){}.*?(\d+)\s*(?:year|yr)", regex::escape(variant));
        if let Some(caps) = Regex::new(&loose_pattern).unwrap().captures(text) {
            let years = caps[1].to_string();
            let tail: String = text[caps.get(0).unwrap().end()..].chars().take(100).collect();
            let value = match AFTER_PCT_RE.captures(&tail) {
                Some(after) => format!("{} year, {}% after first year", years, &after[1]),
                None => format!("{} year", years),
            };
            return Some(Extraction::new(value, LOCATION));
        }
    }

    None
}
