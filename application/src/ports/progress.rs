//! Progress notification port
//!
//! Defines the interface for reporting progress during a debate run.

use tribunal_domain::StageStep;

/// Callback for progress updates during a debate
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinners, plain log lines, nothing).
pub trait DebateProgressNotifier: Send + Sync {
    /// Called when a stage starts; `total_tasks` is the number of agents
    fn on_stage_start(&self, step: &StageStep, total_tasks: usize);

    /// Called when one agent's reply for the stage has been recorded
    fn on_agent_complete(&self, step: &StageStep, agent: &str, success: bool);

    /// Called when a stage completes
    fn on_stage_complete(&self, step: &StageStep);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl DebateProgressNotifier for NoProgress {
    fn on_stage_start(&self, _step: &StageStep, _total_tasks: usize) {}
    fn on_agent_complete(&self, _step: &StageStep, _agent: &str, _success: bool) {}
    fn on_stage_complete(&self, _step: &StageStep) {}
}
