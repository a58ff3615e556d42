//! Markdown transcript artifacts
//!
//! [`MarkdownTranscript`] writes the full transcript, retrying at a backup
//! path. [`write_fallback`] is the last resort when neither can be written.

use super::sections;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};
use tribunal_domain::DebateOutcome;

#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("failed to write transcript to {primary} or {backup}: {source}")]
    Unwritable {
        primary: PathBuf,
        backup: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write fallback transcript to {path}: {source}")]
    Fallback {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Markdown transcript writer with a backup location
pub struct MarkdownTranscript {
    primary: PathBuf,
    backup: PathBuf,
}

impl MarkdownTranscript {
    pub fn new(primary: impl Into<PathBuf>, backup: impl Into<PathBuf>) -> Self {
        Self {
            primary: primary.into(),
            backup: backup.into(),
        }
    }

    pub fn render(outcome: &DebateOutcome) -> String {
        let mut md = String::from("# AI News Channel Debate Transcript\n\n");
        md.push_str(&format!("## Topic: {}\n\n", outcome.question));

        for section in sections(&outcome.history) {
            md.push_str(&format!("## {}\n\n", section.title));
            for turn in section.turns {
                md.push_str(&format!("### {}\n{}\n\n#### References\n", turn.agent, turn.answer));
                for reference in turn.valid_references() {
                    md.push_str(&format!(
                        "- {} (Domain: {}, Authority: {}/3)\n",
                        reference.url, reference.domain, reference.authority_score
                    ));
                }
                md.push('\n');
            }
        }

        md.push_str("## Final Answer\n\n");
        md.push_str(strip_code_fences(&outcome.final_outcome.render()).trim());
        md.push('\n');
        md
    }

    /// Write the transcript, falling back to the backup path.
    ///
    /// Returns the path actually written.
    pub fn save(&self, outcome: &DebateOutcome) -> Result<PathBuf, TranscriptError> {
        let content = Self::render(outcome);

        match write_file(&self.primary, &content) {
            Ok(()) => {
                info!("Transcript saved to {}", self.primary.display());
                Ok(self.primary.clone())
            }
            Err(e) => {
                warn!(
                    "Failed to save transcript to {}: {}; trying backup",
                    self.primary.display(),
                    e
                );
                write_file(&self.backup, &content).map_err(|source| {
                    TranscriptError::Unwritable {
                        primary: self.primary.clone(),
                        backup: self.backup.clone(),
                        source,
                    }
                })?;
                info!("Transcript saved to backup {}", self.backup.display());
                Ok(self.backup.clone())
            }
        }
    }
}

fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "")
}

fn write_file(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)
}

/// Minimal plain-text record of a run whose transcript could not be saved.
pub fn render_fallback(outcome: &DebateOutcome, error: &dyn std::fmt::Display) -> String {
    let mut text = format!(
        "# Debate Transcript (Fallback)\n\nTopic: {}\n\nError: {}\n\nFinal Answer:\n{}\n\nHistory:\n",
        outcome.question,
        error,
        outcome.final_outcome.render()
    );
    for turn in &outcome.history {
        text.push_str(&format!("{} ({}): {}\n", turn.agent, turn.stage.as_str(), turn.answer));
    }
    text
}

pub fn write_fallback(
    path: &Path,
    outcome: &DebateOutcome,
    error: &dyn std::fmt::Display,
) -> Result<(), TranscriptError> {
    write_file(path, &render_fallback(outcome, error)).map_err(|source| {
        TranscriptError::Fallback {
            path: path.to_path_buf(),
            source,
        }
    })
}
