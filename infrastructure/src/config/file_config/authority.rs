//! Authority configuration from TOML (`[authority]` section)

use super::ConfigIssue;
use serde::{Deserialize, Serialize};
use tribunal_domain::AuthorityScorer;
use tribunal_domain::reference::authority::DEFAULT_HIGH_AUTHORITY_DOMAINS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAuthorityConfig {
    /// Registrable domains scored as high authority
    pub domains: Vec<String>,
}

impl Default for FileAuthorityConfig {
    fn default() -> Self {
        Self {
            domains: DEFAULT_HIGH_AUTHORITY_DOMAINS
                .iter()
                .map(|d| d.to_string())
                .collect(),
        }
    }
}

impl FileAuthorityConfig {
    pub fn to_scorer(&self) -> AuthorityScorer {
        AuthorityScorer::new(self.domains.iter().map(String::as_str))
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        if self.domains.iter().all(|d| d.trim().is_empty()) {
            vec![ConfigIssue::warning(
                "authority.domains is empty: every reference scores the default authority",
            )]
        } else {
            Vec::new()
        }
    }
}
