//! Registrable domain extraction.

use url::{Host, Url};

/// Registrable domain (e.g. `bbc.co.uk`) of `raw_url`, lower-cased.
///
/// Falls back to the bare host for hosts without a public suffix
/// (IP addresses, `localhost`), and to an empty string when the URL has
/// no host at all.
pub fn registrable_domain(raw_url: &str) -> String {
    let Ok(url) = Url::parse(raw_url.trim()) else {
        return String::new();
    };
    let host = match url.host() {
        Some(Host::Domain(name)) => name.trim_end_matches('.').to_lowercase(),
        Some(ip) => return ip.to_string(),
        None => return String::new(),
    };
    match psl::domain_str(&host) {
        Some(domain) => domain.to_string(),
        None => host,
    }
}

/// Whether `raw_url` carries an explicit scheme.
pub fn has_scheme(raw_url: &str) -> bool {
    Url::parse(raw_url.trim()).is_ok_and(|u| !u.scheme().is_empty())
}
