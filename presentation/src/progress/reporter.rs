//! Progress reporting for debate runs

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Mutex;
use tribunal_application::DebateProgressNotifier;
use tribunal_domain::StageStep;

/// Reports progress with one bar per stage
pub struct ProgressReporter {
    multi: MultiProgress,
    stage_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            stage_bar: Mutex::new(None),
        }
    }

    fn stage_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .map(|style| style.progress_chars("=>-"))
            .unwrap_or_else(|_| ProgressStyle::default_bar())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn agent_status(agent: &str, success: bool) -> String {
    if success {
        format!("{} {}", "v".green(), agent)
    } else {
        format!("{} {}", "x".red(), agent)
    }
}

impl DebateProgressNotifier for ProgressReporter {
    fn on_stage_start(&self, step: &StageStep, total_tasks: usize) {
        let pb = self.multi.add(ProgressBar::new(total_tasks as u64));
        pb.set_style(Self::stage_style());
        pb.set_prefix(step.to_string());
        pb.set_message("Waiting for panelists...");

        if let Ok(mut slot) = self.stage_bar.lock() {
            *slot = Some(pb);
        }
    }

    fn on_agent_complete(&self, _step: &StageStep, agent: &str, success: bool) {
        if let Ok(slot) = self.stage_bar.lock()
            && let Some(pb) = slot.as_ref()
        {
            pb.set_message(agent_status(agent, success));
            pb.inc(1);
        }
    }

    fn on_stage_complete(&self, step: &StageStep) {
        if let Ok(mut slot) = self.stage_bar.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_with_message(format!("{} complete", step.to_string().green()));
        }
    }
}

/// Plain line-per-event progress (no terminal control codes)
pub struct SimpleProgress;

impl DebateProgressNotifier for SimpleProgress {
    fn on_stage_start(&self, step: &StageStep, total_tasks: usize) {
        println!("{} {} ({} panelists)", "->".cyan(), step.to_string().bold(), total_tasks);
    }

    fn on_agent_complete(&self, _step: &StageStep, agent: &str, success: bool) {
        if success {
            println!("  {}", agent_status(agent, true));
        } else {
            println!("  {} (failed)", agent_status(agent, false));
        }
    }

    fn on_stage_complete(&self, _step: &StageStep) {
        println!();
    }
}
