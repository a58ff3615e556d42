//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for debate results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Transcript of every stage followed by the final answer
    Full,
    /// Only the final answer
    Final,
    /// JSON output
    Json,
}

impl From<OutputFormat> for tribunal_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => tribunal_domain::OutputFormat::Full,
            OutputFormat::Final => tribunal_domain::OutputFormat::Final,
            OutputFormat::Json => tribunal_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for tribunal
#[derive(Parser, Debug)]
#[command(name = "tribunal")]
#[command(author, version, about = "Two LLM panelists debate a topic with verified references")]
#[command(long_about = r#"
Tribunal runs a lawyer-style debate between two LLM panelists.

The protocol has four stages:
1. Initial Suggestion: both panelists answer the question in parallel
2. Critique: each panelist attacks the other's latest answer
3. Refinement: each panelist revises its answer against the critique
4. Finalization: both give a final answer; the best-supported one wins

Stages 2 and 3 repeat for --rounds rounds. Cited URLs are checked over HTTP
and the pages of valid references feed later prompts as evidence.

Configuration files are loaded from (later wins):
1. ~/.config/tribunal/config.toml   Global config
2. ./tribunal.toml                  Project-level config
3. --config <path>                  Explicit config file
4. TRIBUNAL_<SECTION>__<KEY>        Environment variables

Example:
  tribunal "Should central banks issue digital currencies?"
  tribunal --rounds 2 -o final "Is nuclear power essential for net zero?"
"#)]
pub struct Cli {
    /// The debate topic (read from stdin when omitted)
    pub question: Option<String>,

    /// Number of critique/refinement rounds (overrides [debate].rounds)
    #[arg(short, long, value_name = "N")]
    pub rounds: Option<u32>,

    /// Output format (overrides [output].format)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Directory for daily-rotated diagnostic log files
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Markdown transcript path (overrides [output].transcript)
    #[arg(long, value_name = "PATH")]
    pub transcript: Option<PathBuf>,
}
