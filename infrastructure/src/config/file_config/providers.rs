//! Provider configuration from TOML (`[providers.*]` sections)
//!
//! Every field is optional; unset fields take the preset for that provider.

use super::ConfigIssue;
use crate::providers::ProviderSettings;
use crate::providers::gemini::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};
use crate::providers::openrouter::{DEFAULT_OPENROUTER_ENDPOINT, DEFAULT_OPENROUTER_MODEL};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_TEMPERATURE: f32 = 0.2;
pub const DEFAULT_TOP_P: f32 = 0.9;
pub const DEFAULT_MAX_TOKENS: u32 = 2048;
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 25;

/// Built-in identity of a provider slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderPreset {
    pub name: &'static str,
    pub api_key_env: &'static str,
    pub base_url: &'static str,
    pub model: &'static str,
}

impl ProviderPreset {
    pub const GEMINI: ProviderPreset = ProviderPreset {
        name: "Gemini",
        api_key_env: "GEMINI_API_KEY",
        base_url: DEFAULT_GEMINI_BASE_URL,
        model: DEFAULT_GEMINI_MODEL,
    };

    pub const OPENROUTER: ProviderPreset = ProviderPreset {
        name: "DeepSeek",
        api_key_env: "DEEPSEEK_API_KEY",
        base_url: DEFAULT_OPENROUTER_ENDPOINT,
        model: DEFAULT_OPENROUTER_MODEL,
    };
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Display name used in prompts, transcripts and markers
    pub name: Option<String>,
    /// Environment variable holding the API key
    pub api_key_env: Option<String>,
    /// Inline key; takes precedence over `api_key_env`
    pub api_key: Option<String>,
    /// API base URL (Gemini) or full endpoint (OpenRouter)
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub temperature: Option<f32>,
    pub top_p: Option<f32>,
    pub max_tokens: Option<u32>,
    pub timeout_secs: Option<u64>,
}

impl FileProviderConfig {
    /// Resolve against `preset`, reading the key through `env`.
    pub fn resolve_with<F>(&self, preset: ProviderPreset, env: F) -> ProviderSettings
    where
        F: Fn(&str) -> Option<String>,
    {
        let key_var = self.api_key_env.as_deref().unwrap_or(preset.api_key_env);
        let api_key = self
            .api_key
            .clone()
            .or_else(|| env(key_var))
            .filter(|k| !k.trim().is_empty());

        ProviderSettings {
            name: self.name.clone().unwrap_or_else(|| preset.name.to_string()),
            api_key,
            base_url: self
                .base_url
                .clone()
                .unwrap_or_else(|| preset.base_url.to_string()),
            model: self.model.clone().unwrap_or_else(|| preset.model.to_string()),
            temperature: self.temperature.unwrap_or(DEFAULT_TEMPERATURE),
            top_p: self.top_p.unwrap_or(DEFAULT_TOP_P),
            max_tokens: self.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
            timeout: Duration::from_secs(
                self.timeout_secs.unwrap_or(DEFAULT_PROVIDER_TIMEOUT_SECS),
            ),
        }
    }

    /// Resolve against `preset`, reading the key from the process environment.
    /// Display name after applying the preset, without reading the environment.
    pub fn display_name(&self, preset: ProviderPreset) -> &str {
        self.name.as_deref().unwrap_or(preset.name)
    }

    pub fn resolve(&self, preset: ProviderPreset) -> ProviderSettings {
        self.resolve_with(preset, |var| std::env::var(var).ok())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    pub gemini: FileProviderConfig,
    pub openrouter: FileProviderConfig,
}

impl FileProvidersConfig {
    pub fn gemini_settings(&self) -> ProviderSettings {
        self.gemini.resolve(ProviderPreset::GEMINI)
    }

    pub fn openrouter_settings(&self) -> ProviderSettings {
        self.openrouter.resolve(ProviderPreset::OPENROUTER)
    }

    /// Zero timeouts and blank or clashing display names are errors.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        let slots = [
            ("providers.gemini", &self.gemini, ProviderPreset::GEMINI),
            ("providers.openrouter", &self.openrouter, ProviderPreset::OPENROUTER),
        ];

        for (section, provider, preset) in &slots {
            if provider.timeout_secs == Some(0) {
                issues.push(ConfigIssue::error(format!(
                    "{}.timeout_secs cannot be 0",
                    section
                )));
            }
            if provider.display_name(*preset).trim().is_empty() {
                issues.push(ConfigIssue::error(format!("{}.name cannot be blank", section)));
            }
        }

        let gemini = self.gemini.display_name(ProviderPreset::GEMINI);
        let openrouter = self.openrouter.display_name(ProviderPreset::OPENROUTER);
        if gemini == openrouter {
            issues.push(ConfigIssue::error(format!(
                "providers.gemini and providers.openrouter are both named {:?}; debaters need distinct names",
                gemini
            )));
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_preset_defaults() {
        let settings = FileProviderConfig::default().resolve_with(ProviderPreset::GEMINI, no_env);
        assert_eq!(settings.name, "Gemini");
        assert_eq!(settings.model, "gemini-2.0-flash");
        assert_eq!(settings.base_url, DEFAULT_GEMINI_BASE_URL);
        assert_eq!(settings.temperature, 0.2);
        assert_eq!(settings.top_p, 0.9);
        assert_eq!(settings.max_tokens, 2048);
        assert_eq!(settings.timeout, Duration::from_secs(25));
        assert!(settings.api_key.is_none());
    }

    #[test]
    fn test_key_read_from_named_variable() {
        let config = FileProviderConfig {
            api_key_env: Some("R1_KEY".to_string()),
            ..Default::default()
        };
        let settings = config.resolve_with(ProviderPreset::OPENROUTER, |var| {
            (var == "R1_KEY").then(|| "sk-or-123".to_string())
        });
        assert_eq!(settings.api_key.as_deref(), Some("sk-or-123"));
        assert_eq!(settings.name, "DeepSeek");
    }

    #[test]
    fn test_inline_key_wins_and_blank_is_none() {
        let inline = FileProviderConfig {
            api_key: Some("inline".to_string()),
            ..Default::default()
        };
        let settings = inline.resolve_with(ProviderPreset::GEMINI, |_| Some("env".to_string()));
        assert_eq!(settings.api_key.as_deref(), Some("inline"));

        let blank = FileProviderConfig::default()
            .resolve_with(ProviderPreset::GEMINI, |_| Some("  ".to_string()));
        assert!(blank.api_key.is_none());
    }

    #[test]
    fn test_default_providers_are_valid() {
        assert!(FileProvidersConfig::default().validate().is_empty());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = FileProvidersConfig::default();
        config.gemini.timeout_secs = Some(0);

        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
        assert!(issues[0].message.contains("providers.gemini.timeout_secs"));
    }

    #[test]
    fn test_validate_rejects_duplicate_names() {
        let mut config = FileProvidersConfig::default();
        config.openrouter.name = Some("Gemini".to_string());

        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
        assert!(issues[0].message.contains("both named \"Gemini\""));
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let mut config = FileProvidersConfig::default();
        config.gemini.name = Some("  ".to_string());

        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("providers.gemini.name"));
    }

    #[test]
    fn test_overrides_apply() {
        let config = FileProviderConfig {
            name: Some("R1".to_string()),
            model: Some("deepseek/deepseek-chat".to_string()),
            max_tokens: Some(512),
            timeout_secs: Some(40),
            ..Default::default()
        };
        let settings = config.resolve_with(ProviderPreset::OPENROUTER, no_env);
        assert_eq!(settings.name, "R1");
        assert_eq!(settings.model, "deepseek/deepseek-chat");
        assert_eq!(settings.base_url, DEFAULT_OPENROUTER_ENDPOINT);
        assert_eq!(settings.max_tokens, 512);
        assert_eq!(settings.timeout, Duration::from_secs(40));
    }
}
