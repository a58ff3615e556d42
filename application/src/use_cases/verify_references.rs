//! Reference verification
//!
//! Checks each candidate URL once, in input order, and attaches the
//! registrable domain and its authority score.

use crate::ports::url_validator::UrlValidator;
use std::sync::Arc;
use tracing::debug;
use tribunal_domain::reference::domain_name::has_scheme;
use tribunal_domain::{AuthorityScorer, VerifiedReference, registrable_domain};

pub struct ReferenceVerifier {
    validator: Arc<dyn UrlValidator>,
    scorer: AuthorityScorer,
    max_references: usize,
}

impl ReferenceVerifier {
    pub fn new(validator: Arc<dyn UrlValidator>, scorer: AuthorityScorer, max_references: usize) -> Self {
        Self {
            validator,
            scorer,
            max_references,
        }
    }

    pub fn scorer(&self) -> &AuthorityScorer {
        &self.scorer
    }

    /// Verify at most `max_references` URLs. URLs without a scheme are
    /// skipped without a record; validator failures become invalid records.
    pub async fn verify(&self, urls: &[String]) -> Vec<VerifiedReference> {
        let mut verified = Vec::new();

        for url in urls.iter().take(self.max_references) {
            if !has_scheme(url) {
                debug!("Skipping URL without scheme: {}", url);
                continue;
            }

            let check = self.validator.validate(url).await;
            let domain = registrable_domain(url);
            let authority = self.scorer.score(&domain);
            debug!(
                "Verified {}: {} (authority {})",
                url,
                if check.valid { "valid" } else { "invalid" },
                authority
            );

            verified.push(VerifiedReference::new(
                url.as_str(),
                check.valid,
                &check.snippet,
                domain,
                authority,
            ));
        }

        verified
    }
}
