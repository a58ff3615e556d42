//! Presentation layer for tribunal
//!
//! This crate contains the CLI definition, console and transcript
//! output, and progress reporters.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use output::transcript::{MarkdownTranscript, TranscriptError, render_fallback, write_fallback};
pub use progress::reporter::{ProgressReporter, SimpleProgress};
