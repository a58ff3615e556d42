//! Configuration file loading for tribunal
//!
//! Sources are merged in this order, later entries winning:
//!
//! 1. Built-in defaults
//! 2. Global: `$XDG_CONFIG_HOME/tribunal/config.toml` (or platform equivalent)
//! 3. Project root: `./tribunal.toml` or `./.tribunal.toml`
//! 4. `--config <path>`
//! 5. Environment: `TRIBUNAL_<SECTION>__<KEY>`

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, FileAuthorityConfig, FileConfig, FileDebateConfig, FileOutputConfig,
    FileProviderConfig, FileProvidersConfig, FileWebConfig, ProviderPreset, Severity,
};
pub use loader::{ConfigError, ConfigLoader};
