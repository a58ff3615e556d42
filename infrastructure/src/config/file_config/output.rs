//! Output configuration from TOML (`[output]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tribunal_domain::OutputFormat;

pub const DEFAULT_TRANSCRIPT_PATH: &str = "debate_transcript.md";
pub const DEFAULT_BACKUP_PATH: &str = "debate_transcript_backup.md";
pub const DEFAULT_FALLBACK_PATH: &str = "debate_transcript_fallback.txt";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Console output format; the CLI flag wins when given
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
    /// Markdown transcript written after every run
    pub transcript: PathBuf,
    /// Written when the primary transcript cannot be
    pub backup: PathBuf,
    /// Minimal artifact written when both transcript writes fail
    pub fallback: PathBuf,
    /// JSONL file receiving structured debate events
    pub events_log: Option<PathBuf>,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
            transcript: PathBuf::from(DEFAULT_TRANSCRIPT_PATH),
            backup: PathBuf::from(DEFAULT_BACKUP_PATH),
            fallback: PathBuf::from(DEFAULT_FALLBACK_PATH),
            events_log: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::FileConfig;
    use super::*;

    #[test]
    fn test_output_paths_deserialize() {
        let toml_str = r#"
[output]
format = "final"
backup = "/tmp/backup.md"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output.format, Some(OutputFormat::Final));
        assert_eq!(config.output.backup, PathBuf::from("/tmp/backup.md"));
        assert_eq!(config.output.transcript, PathBuf::from(DEFAULT_TRANSCRIPT_PATH));
        assert!(config.output.events_log.is_none());
    }
}
