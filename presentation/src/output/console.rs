//! Console output formatter for debate results

use super::formatter::OutputFormatter;
use super::{sections, stage_verb};
use colored::Colorize;
use tribunal_domain::{DebateOutcome, DebateTurn, FinalOutcome, Seat};

/// Formats debate outcomes for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Turn off ANSI colors for everything formatted afterwards
    pub fn disable_color() {
        colored::control::set_override(false);
    }

    /// Banner shown before the protocol starts
    pub fn intro(question: &str, proponent: &str, opponent: &str) -> String {
        format!(
            "{}\n\n{} {}\n{} {} ({}) and {} ({})\n",
            Self::header("AI News Channel Debate"),
            "Today's Hot Topic:".cyan().bold(),
            question,
            "Advocates:".cyan().bold(),
            proponent,
            Seat::Proponent.as_str(),
            opponent,
            Seat::Opponent.as_str(),
        )
    }

    /// Format the complete debate
    pub fn format(outcome: &DebateOutcome) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Debate Transcript"));
        output.push('\n');
        output.push_str(&format!(
            "{} {}\n",
            "Topic:".cyan().bold(),
            outcome.question
        ));

        for section in sections(&outcome.history) {
            output.push_str(&Self::section_header(&section.title));
            for turn in section.turns {
                output.push_str(&Self::turn(turn, stage_verb(section.stage)));
            }
        }

        output.push('\n');
        output.push_str(&Self::header("Debate Summary"));
        output.push('\n');
        output.push_str(&Self::final_outcome(&outcome.final_outcome));
        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(outcome: &DebateOutcome) -> String {
        serde_json::to_string_pretty(outcome).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the final result only
    pub fn format_final_only(outcome: &DebateOutcome) -> String {
        format!(
            "{} {}\n\n{}",
            "Q:".bold(),
            outcome.question,
            Self::final_outcome(&outcome.final_outcome)
        )
    }

    fn turn(turn: &DebateTurn, verb: &str) -> String {
        let valid = turn.valid_references().count();
        let heading = format!("{} {}:", turn.agent, verb);
        let heading = if turn.answer.starts_with('[') {
            heading.red().bold()
        } else {
            heading.yellow().bold()
        };
        format!(
            "\n{}\n{}\n{}\n",
            heading,
            turn.answer,
            format!("Supporting References: {} valid", valid).dimmed()
        )
    }

    fn final_outcome(outcome: &FinalOutcome) -> String {
        match outcome {
            FinalOutcome::Selected(verdict) => format!(
                "{}\n{}",
                format!("Selected: {} ({})", verdict.agent, verdict.seat).green().bold(),
                verdict.render()
            ),
            FinalOutcome::NoValidAnswers => format!("{}\n", outcome.render().yellow().bold()),
            FinalOutcome::Failed { .. } => format!("{}\n", outcome.render().red().bold()),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, outcome: &DebateOutcome) -> String {
        Self::format(outcome)
    }

    fn format_json(&self, outcome: &DebateOutcome) -> String {
        Self::format_json(outcome)
    }

    fn format_final_only(&self, outcome: &DebateOutcome) -> String {
        Self::format_final_only(outcome)
    }
}
