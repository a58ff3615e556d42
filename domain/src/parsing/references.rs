//! Candidate reference URL normalization.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Maximum number of candidate references kept per reply.
pub const MAX_CANDIDATE_REFERENCES: usize = 6;

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"https?://[^\s()\[\]{}<>"'`]+"#).expect("URL pattern is valid")
});

/// Keep trimmed strings that parse as `http`/`https` URLs, capped at
/// [`MAX_CANDIDATE_REFERENCES`]. Idempotent.
pub fn normalize_references<I, S>(candidates: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    candidates
        .into_iter()
        .filter_map(|candidate| {
            let trimmed = candidate.as_ref().trim();
            is_http_url(trimmed).then(|| trimmed.to_string())
        })
        .take(MAX_CANDIDATE_REFERENCES)
        .collect()
}

/// Every `http(s)://` run in `text`, in order of appearance.
///
/// Trailing sentence punctuation is stripped from each match.
pub fn scan_urls(text: &str) -> Vec<String> {
    URL_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().trim_end_matches(['.', ',', ';', ':', '!', '?']).to_string())
        .collect()
}

fn is_http_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host_str().is_some(),
        Err(_) => false,
    }
}
