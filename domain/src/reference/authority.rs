//! Source authority scoring.
//!
//! | Score | Rule |
//! |-------|------|
//! | 3 | domain is exactly an allow-listed domain |
//! | 2 | domain contains an allow-listed domain as a substring |
//! | 1 | anything else |

use std::collections::BTreeSet;

/// Curated high-authority domains used when no list is configured.
pub const DEFAULT_HIGH_AUTHORITY_DOMAINS: &[&str] = &[
    "arxiv.org",
    "ieeexplore.ieee.org",
    "acm.org",
    "springer.com",
    "nature.com",
    "sciencedirect.com",
    "researchgate.net",
    "wikipedia.org",
    "github.com",
    "medium.com",
    "geeksforgeeks.org",
    "stackoverflow.com",
    "cplusplus.com",
    "pmindia.gov.in",
    "mea.gov.in",
    "indiabudget.gov.in",
    "prsindia.org",
    "worldbank.org",
];

pub const HIGH_AUTHORITY: u8 = 3;
pub const PARTIAL_AUTHORITY: u8 = 2;
pub const DEFAULT_AUTHORITY: u8 = 1;

/// Scores a registrable domain against an immutable allow-list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorityScorer {
    domains: BTreeSet<String>,
}

impl AuthorityScorer {
    pub fn new<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            domains: domains
                .into_iter()
                .map(|d| d.into().trim().to_lowercase())
                .filter(|d| !d.is_empty())
                .collect(),
        }
    }

    pub fn domains(&self) -> impl Iterator<Item = &str> {
        self.domains.iter().map(String::as_str)
    }

    /// Authority tier for `domain`. Deterministic; never fails.
    pub fn score(&self, domain: &str) -> u8 {
        if self.domains.contains(domain) {
            HIGH_AUTHORITY
        } else if self.domains.iter().any(|d| domain.contains(d.as_str())) {
            PARTIAL_AUTHORITY
        } else {
            DEFAULT_AUTHORITY
        }
    }
}

impl Default for AuthorityScorer {
    fn default() -> Self {
        Self::new(DEFAULT_HIGH_AUTHORITY_DOMAINS.iter().copied())
    }
}
