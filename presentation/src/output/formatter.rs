//! Output formatter trait

use tribunal_domain::{DebateOutcome, OutputFormat};

/// Trait for formatting finished debates
pub trait OutputFormatter {
    /// Every stage followed by the final result
    fn format(&self, outcome: &DebateOutcome) -> String;

    /// Serialized outcome
    fn format_json(&self, outcome: &DebateOutcome) -> String;

    /// Final result only (concise output)
    fn format_final_only(&self, outcome: &DebateOutcome) -> String;

    fn render(&self, outcome: &DebateOutcome, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => self.format(outcome),
            OutputFormat::Final => self.format_final_only(outcome),
            OutputFormat::Json => self.format_json(outcome),
        }
    }
}
