//! Verified reference value object

use crate::core::string::take_chars;
use serde::{Deserialize, Serialize};

/// Upper bound on the stored content snippet, in characters.
pub const MAX_SNIPPET_CHARS: usize = 1500;

/// A reference URL after liveness checking and authority scoring (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedReference {
    pub url: String,
    /// Whether the URL was reachable
    pub valid: bool,
    /// Page excerpt, or a description of why validation failed
    pub snippet: String,
    /// Registrable domain, lower-cased
    pub domain: String,
    /// Authority tier in 1..=3
    pub authority_score: u8,
}

impl VerifiedReference {
    pub fn new(
        url: impl Into<String>,
        valid: bool,
        snippet: &str,
        domain: impl Into<String>,
        authority_score: u8,
    ) -> Self {
        Self {
            url: url.into(),
            valid,
            snippet: take_chars(snippet, MAX_SNIPPET_CHARS).to_string(),
            domain: domain.into().to_lowercase(),
            authority_score: authority_score.clamp(1, 3),
        }
    }
}

/// Count references that passed validation.
pub fn count_valid(references: &[VerifiedReference]) -> usize {
    references.iter().filter(|r| r.valid).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_is_bounded() {
        let long = "x".repeat(MAX_SNIPPET_CHARS + 50);
        let reference = VerifiedReference::new("https://a.org", true, &long, "a.org", 1);
        assert_eq!(reference.snippet.chars().count(), MAX_SNIPPET_CHARS);
    }

    #[test]
    fn test_authority_is_clamped_and_domain_lowercased() {
        let reference = VerifiedReference::new("https://A.org", false, "", "A.ORG", 9);
        assert_eq!(reference.authority_score, 3);
        assert_eq!(reference.domain, "a.org");
    }

    #[test]
    fn test_count_valid() {
        let refs = vec![
            VerifiedReference::new("https://a.org", true, "", "a.org", 1),
            VerifiedReference::new("https://b.org", false, "", "b.org", 1),
        ];
        assert_eq!(count_valid(&refs), 1);
    }
}
