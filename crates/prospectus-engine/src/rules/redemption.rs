//! Redemption fee extractor
//!
//! Three pattern alternatives in fixed order: a `Class X: ...` line
//! (refined to a wider context block when a percentage is present), then
//! class-before-phrase, then phrase-before-class.

use prospectus_domain::Extraction;
use regex::Regex;

const LOCATION: &str = "redemption fee section";

/// Extract redemption fee terms for a class.
pub fn extract_redemption_fee(text: &str, variants: &[String]) -> Option<Extraction> {
    let percent_re = Regex::new(r"\d+\.?\d*%").unwrap();

    for variant in variants {
        // (a) "Class X: <terms>" up to the phrase or end of line
        let colon_pattern = format!(
            r"(?i){}:\s*(.*?)(?:redemption\s+fee|$)",
            regex::escape(variant)
        );
        if let Some(caps) = Regex::new(&colon_pattern).unwrap().captures(text) {
            let fee_text = caps[1].trim().to_string();
            if percent_re.is_match(&fee_text) {
                // A percentage is present: widen to the full context block,
                // bounded by the next class heading
                let context_pattern = format!(
                    r"(?is){}:\s*(.*?)(?:\n\s*class\s+[a-z]\b|\z)",
                    regex::escape(variant)
                );
                if let Some(context) = Regex::new(&context_pattern).unwrap().captures(text) {
                    return Some(Extraction::new(context[1].trim(), LOCATION));
                }
                return Some(Extraction::new(fee_text, LOCATION));
            }
            if fee_text.to_lowercase().contains("no") {
                return Some(Extraction::new("No redemption fee", LOCATION));
            }
        }

        // (b) class first, then the phrase, terms to end of line
        let forward_pattern = format!(
            r"(?is){}.*?redemption\s+fee[:\s]+([^\n]+)",
            regex::escape(variant)
        );
        if let Some(caps) = Regex::new(&forward_pattern).unwrap().captures(text) {
            let fee_info = caps[1].trim();
            if !fee_info.is_empty() {
                return Some(Extraction::new(fee_info, LOCATION));
            }
        }

        // (c) phrase first, then the class
        let reverse_pattern = format!(
            r"(?is)redemption\s+fee.*?{}[:\s]+([^\n]+)",
            regex::escape(variant)
        );
        if let Some(caps) = Regex::new(&reverse_pattern).unwrap().captures(text) {
            let fee_info = caps[1].trim();
            if !fee_info.is_empty() {
                return Some(Extraction::new(fee_info, LOCATION));
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use prospectus_domain::ShareClass;

    #[test]
    fn test_no_fee_line() {
        let text = "Class A: No redemption fee";
        let variants = ShareClass::new("Class A").variants();
        let result = extract_redemption_fee(text, &variants).unwrap();
        assert_eq!(result.value, "No redemption fee");
        assert_eq!(result.location.as_deref(), Some("redemption fee section"));
    }

    #[test]
    fn test_percentage_widens_to_context_block() {
        let text = "Class A: 2.00% redemption fee on shares held under 90 days\nClass B: none";
        let variants = ShareClass::new("Class A").variants();
        let result = extract_redemption_fee(text, &variants).unwrap();
        assert_eq!(
            result.value,
            "2.00% redemption fee on shares held under 90 days"
        );
    }

    #[test]
    fn test_forward_pattern() {
        let text = "Holders of Class I shares pay a redemption fee: 1.00% if sold within 30 days";
        let variants = ShareClass::new("Class I").variants();
        let result = extract_redemption_fee(text, &variants).unwrap();
        assert_eq!(result.value, "1.00% if sold within 30 days");
    }

    #[test]
    fn test_reverse_pattern() {
        let text = "A redemption fee applies as follows for Class Z 2.00% within 60 days";
        let variants = ShareClass::new("Class Z").variants();
        let result = extract_redemption_fee(text, &variants).unwrap();
        assert_eq!(result.value, "2.00% within 60 days");
    }

    #[test]
    fn test_absent() {
        let variants = ShareClass::new("Class Q").variants();
        assert_eq!(extract_redemption_fee("no fees discussed", &variants), None);
    }
}
