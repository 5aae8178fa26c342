//! Location resolution
//!
//! Reconciles free-text evidence (context words from an LLM reply, or a
//! matcher's location description) with concrete document coordinates.
//! A page or anchor qualifies when at least `threshold` keywords occur
//! case-folded as substrings of its text; the first qualifying one wins.
//! No hit is not an error, it means document-level attribution.

use std::collections::BTreeMap;

/// Split free-text evidence into lowercase keywords.
pub fn context_words(context: &str) -> Vec<String> {
    context
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Count how many keywords occur as substrings of the case-folded text.
fn keyword_hits(keywords: &[String], text: &str) -> usize {
    let text_lower = text.to_lowercase();
    keywords
        .iter()
        .filter(|word| text_lower.contains(word.as_str()))
        .count()
}

/// First page, in ascending page-number order, with at least `threshold`
/// keyword hits.
pub fn resolve_page(
    keywords: &[String],
    pages: &BTreeMap<u32, String>,
    threshold: usize,
) -> Option<u32> {
    if keywords.is_empty() {
        return None;
    }
    pages
        .iter()
        .find(|(_, text)| keyword_hits(keywords, text) >= threshold)
        .map(|(page, _)| *page)
}

/// First anchor, in id order, whose text reaches `threshold` keyword hits.
pub fn resolve_anchor(
    keywords: &[String],
    anchors: &BTreeMap<String, String>,
    threshold: usize,
) -> Option<String> {
    if keywords.is_empty() {
        return None;
    }
    anchors
        .iter()
        .find(|(_, text)| keyword_hits(keywords, text) >= threshold)
        .map(|(id, _)| id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages() -> BTreeMap<u32, String> {
        let mut pages = BTreeMap::new();
        pages.insert(1, "Summary of the fund and its objectives".to_string());
        pages.insert(2, "Annual fund operating expenses table for all classes".to_string());
        pages.insert(3, "Annual operating expenses, continued".to_string());
        pages
    }

    #[test]
    fn test_first_qualifying_page_wins() {
        let keywords = context_words("annual operating expenses");
        assert_eq!(resolve_page(&keywords, &pages(), 2), Some(2));
    }

    #[test]
    fn test_no_page_reaches_threshold() {
        let keywords = context_words("redemption cdsc");
        assert_eq!(resolve_page(&keywords, &pages(), 2), None);
    }

    #[test]
    fn test_matching_is_case_folded() {
        let keywords = context_words("ANNUAL EXPENSES");
        assert_eq!(resolve_page(&keywords, &pages(), 2), Some(2));
    }

    #[test]
    fn test_empty_keywords_resolve_nothing() {
        assert_eq!(resolve_page(&[], &pages(), 2), None);
    }

    #[test]
    fn test_threshold_is_monotonic() {
        // Raising the threshold never accepts a page a lower one rejected
        let keywords = context_words("annual fund operating expenses table");
        let pages = pages();
        let mut accepted_at_prev: Option<Vec<u32>> = None;
        for threshold in 1..=keywords.len() {
            let accepted: Vec<u32> = pages
                .iter()
                .filter(|(_, text)| keyword_hits(&keywords, text) >= threshold)
                .map(|(page, _)| *page)
                .collect();
            if let Some(prev) = &accepted_at_prev {
                assert!(accepted.iter().all(|page| prev.contains(page)));
            }
            accepted_at_prev = Some(accepted);
        }
    }

    #[test]
    fn test_anchor_resolution() {
        let mut anchors = BTreeMap::new();
        anchors.insert("intro".to_string(), "About this fund".to_string());
        anchors.insert(
            "fees".to_string(),
            "Annual fund operating expenses for each class".to_string(),
        );
        let keywords = context_words("operating expenses");
        assert_eq!(resolve_anchor(&keywords, &anchors, 2), Some("fees".to_string()));
    }
}
