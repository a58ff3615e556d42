//! Raw TOML configuration data types
//!
//! These structs mirror the config file layout. Conversion helpers turn
//! each section into the immutable values the core is constructed with.

mod authority;
mod debate;
mod output;
mod providers;
mod web;

pub use authority::FileAuthorityConfig;
pub use debate::FileDebateConfig;
pub use output::FileOutputConfig;
pub use providers::{FileProviderConfig, FileProvidersConfig, ProviderPreset};
pub use web::FileWebConfig;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Protocol and evidence settings
    pub debate: FileDebateConfig,
    /// Gemini and OpenRouter connection settings
    pub providers: FileProvidersConfig,
    /// Reference validation and document fetching
    pub web: FileWebConfig,
    /// High-authority domain list
    pub authority: FileAuthorityConfig,
    /// Console and transcript settings
    pub output: FileOutputConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// A problem found in a loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub message: String,
}

impl ConfigIssue {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{}: {}", label, self.message)
    }
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.debate.validate();
        issues.extend(self.authority.validate());
        issues.extend(self.providers.validate());

        if self.web.timeout_secs == 0 {
            issues.push(ConfigIssue::error("web.timeout_secs cannot be 0"));
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tribunal_domain::OutputFormat;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[debate]
rounds = 2
evidence_k = 5
annotation = "static"
annotation_text = "Sources are public."

[providers.gemini]
model = "gemini-1.5-pro"
temperature = 0.4

[providers.openrouter]
name = "R1"
api_key_env = "OPENROUTER_API_KEY"

[web]
timeout_secs = 5

[authority]
domains = ["rbi.org.in", "imf.org"]

[output]
format = "json"
color = false
transcript = "out/debate.md"
events_log = "out/events.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.debate.rounds, 2);
        assert_eq!(config.debate.evidence_k, 5);
        assert_eq!(config.debate.annotation, "static");
        assert_eq!(config.providers.gemini.model.as_deref(), Some("gemini-1.5-pro"));
        assert_eq!(config.providers.gemini.temperature, Some(0.4));
        assert_eq!(config.providers.openrouter.name.as_deref(), Some("R1"));
        assert_eq!(config.web.timeout_secs, 5);
        assert_eq!(config.authority.domains.len(), 2);
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert!(config.output.events_log.is_some());
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: FileConfig = toml::from_str("[debate]\nrounds = 3\n").unwrap();
        assert_eq!(config.debate.rounds, 3);
        assert_eq!(config.debate.memory_limit, 10);
        assert_eq!(config.web.timeout_secs, 12);
        assert!(config.output.color);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(FileConfig::default().validate().is_empty());
    }

    #[test]
    fn test_validate_collects_all_sections() {
        let mut config = FileConfig::default();
        config.debate.rounds = 0;
        config.authority.domains.clear();
        config.providers.openrouter.timeout_secs = Some(0);
        config.web.timeout_secs = 0;

        let issues = config.validate();
        assert_eq!(issues.len(), 4);
        assert_eq!(issues.iter().filter(|i| i.is_error()).count(), 2);
        assert!(issues.iter().any(|i| i.message.contains("providers.openrouter")));
    }

    #[test]
    fn test_duplicate_provider_names_fail_validation() {
        let config: FileConfig =
            toml::from_str("[providers.gemini]\nname = \"Judge\"\n\n[providers.openrouter]\nname = \"Judge\"\n")
                .unwrap();

        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
        assert!(issues[0].message.contains("Judge"));
    }

    #[test]
    fn test_issue_display() {
        assert_eq!(
            ConfigIssue::warning("debate.rounds is 0").to_string(),
            "warning: debate.rounds is 0"
        );
    }
}
