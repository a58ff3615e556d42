//! Web configuration from TOML (`[web]` section)

use crate::web::{DEFAULT_HTTP_TIMEOUT, DEFAULT_USER_AGENT, WebSettings};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tribunal_domain::reference::entities::MAX_SNIPPET_CHARS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileWebConfig {
    /// Timeout for reference checks and page fetches
    pub timeout_secs: u64,
    pub snippet_chars: usize,
    pub user_agent: Option<String>,
}

impl Default for FileWebConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_HTTP_TIMEOUT.as_secs(),
            snippet_chars: MAX_SNIPPET_CHARS,
            user_agent: None,
        }
    }
}

impl FileWebConfig {
    pub fn to_settings(&self) -> WebSettings {
        WebSettings {
            timeout: Duration::from_secs(self.timeout_secs),
            snippet_chars: self.snippet_chars,
            user_agent: self
                .user_agent
                .clone()
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_web_settings() {
        assert_eq!(FileWebConfig::default().to_settings(), WebSettings::default());
    }

    #[test]
    fn test_custom_user_agent() {
        let config = FileWebConfig {
            user_agent: Some("research-bot/2".to_string()),
            timeout_secs: 3,
            ..Default::default()
        };
        let settings = config.to_settings();
        assert_eq!(settings.user_agent, "research-bot/2");
        assert_eq!(settings.timeout, Duration::from_secs(3));
    }
}
