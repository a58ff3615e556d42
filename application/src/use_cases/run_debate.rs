//! Run Debate use case
//!
//! Drives both agents through the fixed stage schedule:
//!
//! ```text
//! InitialSuggestion -> (Critique r -> Refinement r) for r in 1..=rounds -> Finalization
//! ```
//!
//! Each stage fans out exactly two model calls as independent tasks and
//! joins both before anything is recorded. Turns, memory and the evidence
//! index are only mutated after the join, in seat order.

use super::debate_agent::{AgentRequest, DebateAgent};
use super::evidence_index::EvidenceIndex;
use super::model_adapter::AdapterReply;
use super::verify_references::ReferenceVerifier;
use crate::config::DebateParams;
use crate::ports::debate_logger::{DebateEvent, DebateLogger, NoDebateLogger};
use crate::ports::progress::{DebateProgressNotifier, NoProgress};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinError;
use tracing::{debug, error, info, warn};
use tribunal_domain::{
    AgentPair, DebateHistory, DebateOutcome, DebatePromptTemplate, DebateTurn, FinalOutcome,
    FinalVerdict, NO_PREVIOUS_CRITIQUE, NO_PREVIOUS_SUGGESTION, Panel, Question, Seat, Stage,
    StageStep, rank_candidates, render_evidence,
};

/// Errors that abort the protocol
#[derive(Error, Debug)]
pub enum RunDebateError {
    #[error("Both agents failed during {step}: {reason}")]
    StageFailed { step: StageStep, reason: String },

    #[error("Invalid panel: {0}")]
    InvalidPanel(String),
}

/// Use case for running one debate
///
/// An instance owns the per-run state (agent memories and the evidence
/// index), so it is consumed by [`execute`](Self::execute).
pub struct RunDebateUseCase {
    agents: AgentPair<DebateAgent>,
    verifier: ReferenceVerifier,
    evidence: EvidenceIndex,
    params: DebateParams,
    logger: Arc<dyn DebateLogger>,
}

impl RunDebateUseCase {
    pub fn new(
        agents: AgentPair<DebateAgent>,
        verifier: ReferenceVerifier,
        evidence: EvidenceIndex,
        params: DebateParams,
    ) -> Result<Self, RunDebateError> {
        for (seat, agent) in agents.iter() {
            if agent.seat() != seat {
                return Err(RunDebateError::InvalidPanel(format!(
                    "agent {} occupies the {} seat but was constructed for {}",
                    agent.name(),
                    seat,
                    agent.seat()
                )));
            }
        }
        if agents.proponent.name() == agents.opponent.name() {
            return Err(RunDebateError::InvalidPanel(format!(
                "both agents are named {}",
                agents.proponent.name()
            )));
        }

        Ok(Self {
            agents,
            verifier,
            evidence,
            params,
            logger: Arc::new(NoDebateLogger),
        })
    }

    pub fn with_logger(mut self, logger: Arc<dyn DebateLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Display names of both agents.
    pub fn panel(&self) -> Panel {
        Panel::new(
            self.agents.proponent.name().to_string(),
            self.agents.opponent.name().to_string(),
        )
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(self, question: &Question) -> DebateOutcome {
        self.execute_with_progress(question, &NoProgress).await
    }

    /// Execute the use case with progress callbacks.
    ///
    /// Never fails: a protocol error becomes a [`FinalOutcome::Failed`] and
    /// the history accumulated so far is kept.
    pub async fn execute_with_progress(
        mut self,
        question: &Question,
        progress: &dyn DebateProgressNotifier,
    ) -> DebateOutcome {
        let panel = self.panel();
        info!(
            "Starting debate between {} and {} ({} rounds)",
            panel.proponent, panel.opponent, self.params.rounds
        );
        self.logger.log(DebateEvent::new(
            "debate_started",
            json!({
                "question": question.content(),
                "proponent": panel.proponent,
                "opponent": panel.opponent,
                "rounds": self.params.rounds,
            }),
        ));

        let mut history = DebateHistory::new();
        let final_outcome = match self.run_protocol(question, &mut history, progress).await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!("Debate failed: {}", e);
                FinalOutcome::failed(e)
            }
        };

        self.logger.log(DebateEvent::new(
            "debate_finished",
            json!({
                "turns": history.len(),
                "final": &final_outcome,
            }),
        ));

        DebateOutcome::new(question.content(), panel, history, final_outcome)
    }

    async fn run_protocol(
        &mut self,
        question: &Question,
        history: &mut DebateHistory,
        progress: &dyn DebateProgressNotifier,
    ) -> Result<FinalOutcome, RunDebateError> {
        for step in StageStep::schedule(self.params.rounds) {
            self.run_stage(step, question, history, progress).await?;
        }
        Ok(self.select_final(history))
    }

    /// Fan out both agents for one step, then record their turns.
    async fn run_stage(
        &mut self,
        step: StageStep,
        question: &Question,
        history: &mut DebateHistory,
        progress: &dyn DebateProgressNotifier,
    ) -> Result<(), RunDebateError> {
        info!("Stage: {}", step);
        progress.on_stage_start(&step, Seat::BOTH.len());

        let evidence = if step.stage == Stage::InitialSuggestion {
            String::new()
        } else {
            let chunks = self
                .evidence
                .query(question.content(), self.params.evidence_k)
                .await;
            debug!("Retrieved {} evidence chunks for {}", chunks.len(), step);
            render_evidence(&chunks, self.params.excerpt_chars)
        };

        let requests = AgentPair::new(
            self.build_request(Seat::Proponent, step, question, &evidence, history),
            self.build_request(Seat::Opponent, step, question, &evidence, history),
        );
        for (seat, request) in requests.iter() {
            self.logger.log(DebateEvent::new(
                "agent_prompt",
                json!({
                    "agent": self.agents.get(seat).name(),
                    "stage": step.stage,
                    "round": step.round,
                    "prompt": request.prompt(),
                }),
            ));
        }

        // Each call runs as its own task: a timeout or panic in one never
        // cancels the other, and results stay paired with their seat.
        let handles = requests.map(|_, request| tokio::spawn(request.send()));
        let outcomes = AgentPair::new(handles.proponent.await, handles.opponent.await);

        let mut failures = Vec::new();
        for seat in Seat::BOTH {
            let (reply, succeeded) = match outcomes.get(seat) {
                Ok(reply) => (reply.clone(), !reply.failed),
                Err(e) => {
                    let reason = join_failure(e);
                    warn!(
                        "{} failed during {}: {}",
                        self.agents.get(seat).name(),
                        step,
                        reason
                    );
                    failures.push(reason.clone());
                    (AdapterReply::error(reason), false)
                }
            };
            self.record_reply(seat, step, reply, history).await;
            progress.on_agent_complete(&step, self.agents.get(seat).name(), succeeded);
        }

        progress.on_stage_complete(&step);

        if failures.len() == Seat::BOTH.len() {
            self.logger.log(DebateEvent::new(
                "stage_failed",
                json!({ "stage": step.stage, "round": step.round, "errors": &failures }),
            ));
            return Err(RunDebateError::StageFailed {
                step,
                reason: failures.join("; "),
            });
        }
        Ok(())
    }

    fn build_request(
        &self,
        seat: Seat,
        step: StageStep,
        question: &Question,
        evidence: &str,
        history: &DebateHistory,
    ) -> AgentRequest {
        let agent = self.agents.get(seat);
        let opponent = seat.opponent();
        let question = question.content();

        match step.stage {
            Stage::InitialSuggestion => agent.formulate_request(
                &DebatePromptTemplate::initial_suggestion(agent.name(), question),
                Stage::InitialSuggestion,
            ),
            Stage::Critique => {
                // Round 1 attacks the opening position, later rounds the
                // latest refinement.
                let target = history
                    .last_turn_in(opponent, &[Stage::InitialSuggestion, Stage::Refinement])
                    .map_or(NO_PREVIOUS_SUGGESTION, |t| t.answer.as_str());
                agent.critique_request(target, question, evidence)
            }
            Stage::Refinement => {
                let critique = history
                    .critique_in_round(opponent, step.round)
                    .map_or(NO_PREVIOUS_CRITIQUE, |t| t.answer.as_str());
                agent.formulate_request(
                    &DebatePromptTemplate::refinement(agent.name(), question, critique, evidence),
                    Stage::Refinement,
                )
            }
            Stage::Finalization => {
                let own = history
                    .last_turn(seat, Stage::Refinement)
                    .map_or(NO_PREVIOUS_SUGGESTION, |t| t.answer.as_str());
                let theirs = history
                    .last_turn(opponent, Stage::Refinement)
                    .map_or(NO_PREVIOUS_SUGGESTION, |t| t.answer.as_str());
                agent.formulate_request(
                    &DebatePromptTemplate::finalization(agent.name(), question, own, theirs, evidence),
                    Stage::Finalization,
                )
            }
        }
    }

    /// Verify references, append the turn, update memory and evidence.
    async fn record_reply(
        &mut self,
        seat: Seat,
        step: StageStep,
        reply: AdapterReply,
        history: &mut DebateHistory,
    ) {
        let references = self.verifier.verify(&reply.references).await;
        let agent = self.agents.get_mut(seat);

        let turn = DebateTurn::new(seat, agent.name(), step.stage, step.round, reply.answer)
            .with_raw_response(reply.raw)
            .with_references(references)
            .with_structured(reply.structured);

        agent.record_turn(memory_line(step, &turn.answer), false);

        self.logger.log(DebateEvent::new(
            "agent_reply",
            json!({
                "agent": &turn.agent,
                "stage": turn.stage,
                "round": turn.round,
                "structured": turn.structured,
                "answer": &turn.answer,
                "references": &turn.references,
            }),
        ));

        if self.evidence.add_evidence(&turn.references).await {
            debug!("Evidence index extended from {}'s {}", turn.agent, step);
        }
        history.push(turn);
    }

    /// Score structured finalization turns and package the best one.
    fn select_final(&self, history: &DebateHistory) -> FinalOutcome {
        let candidates = history
            .at(Stage::Finalization, 0)
            .filter(|turn| turn.structured);
        let Some(best) = rank_candidates(candidates).into_iter().next() else {
            warn!("No finalization turn produced a structured answer");
            return FinalOutcome::NoValidAnswers;
        };

        info!("Selected final answer from {} (score {:.1})", best.agent, best.score);
        self.logger.log(DebateEvent::new(
            "final_selected",
            json!({ "agent": &best.agent, "score": best.score }),
        ));
        FinalOutcome::Selected(FinalVerdict::from_candidate(
            best,
            self.params.annotation.render(),
        ))
    }
}

fn memory_line(step: StageStep, answer: &str) -> String {
    match step.stage {
        Stage::InitialSuggestion => format!("Initial suggestion: {}", answer),
        Stage::Critique => format!("Critique round {}: {}", step.round, answer),
        Stage::Refinement => format!("Refinement round {}: {}", step.round, answer),
        Stage::Finalization => format!("Final answer: {}", answer),
    }
}

fn join_failure(e: &JoinError) -> String {
    if e.is_cancelled() {
        "task cancelled".to_string()
    } else {
        e.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::document_loader::DocumentLoader;
    use crate::ports::model_transport::{ModelTransport, TransportError, TransportResponse};
    use crate::ports::similarity_index::{IndexError, SimilarityIndex};
    use crate::ports::url_validator::{UrlCheck, UrlValidator};
    use crate::use_cases::model_adapter::ModelAdapter;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::time::Duration;
    use tribunal_domain::{
        AuthorityScorer, ClosingAnnotation, Document, EvidenceChunk, NO_VALID_FINAL_ANSWERS,
        ResponseEnvelope, TextSplitter,
    };

    // ==================== Mocks ====================

    enum Scripted {
        Reply(String),
        Fail(TransportError),
        Panic,
    }

    /// Answers by stage; prompts are recorded per stage
    struct StageTransport {
        name: &'static str,
        script: HashMap<Stage, Scripted>,
        prompts: Mutex<Vec<(Stage, String)>>,
    }

    impl StageTransport {
        fn new(name: &'static str) -> Self {
            Self {
                name,
                script: HashMap::new(),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn on(mut self, stage: Stage, scripted: Scripted) -> Self {
            self.script.insert(stage, scripted);
            self
        }

        fn prompt_for(&self, stage: Stage) -> String {
            self.prompts
                .lock()
                .unwrap()
                .iter()
                .rev()
                .find(|(s, _)| *s == stage)
                .map(|(_, p)| p.clone())
                .unwrap_or_default()
        }
    }

    fn detect_stage(prompt: &str) -> Stage {
        if prompt.contains("lawyer-style debate agent") {
            Stage::Critique
        } else if prompt.contains("Stage: refinement") {
            Stage::Refinement
        } else if prompt.contains("Stage: finalization") {
            Stage::Finalization
        } else {
            Stage::InitialSuggestion
        }
    }

    #[async_trait]
    impl ModelTransport for StageTransport {
        fn name(&self) -> &str {
            self.name
        }

        fn envelope(&self) -> ResponseEnvelope {
            ResponseEnvelope::Bare
        }

        async fn send(&self, prompt: &str) -> Result<TransportResponse, TransportError> {
            let stage = detect_stage(prompt);
            self.prompts.lock().unwrap().push((stage, prompt.to_string()));
            match self.script.get(&stage) {
                Some(Scripted::Reply(body)) => Ok(TransportResponse::ok(body.clone())),
                Some(Scripted::Fail(e)) => Err(e.clone()),
                Some(Scripted::Panic) => panic!("{} blew up", self.name),
                None => Ok(TransportResponse::ok(default_reply(self.name, stage))),
            }
        }
    }

    fn default_reply(name: &str, stage: Stage) -> String {
        let mut reply = serde_json::Map::new();
        reply.insert(
            stage.answer_key().to_string(),
            json!(format!("{} {} answer", name, stage.as_str())),
        );
        reply.insert("references".to_string(), json!([]));
        serde_json::Value::Object(reply).to_string()
    }

    /// URLs containing "dead" are invalid
    struct MockValidator;

    #[async_trait]
    impl UrlValidator for MockValidator {
        async fn validate(&self, url: &str) -> UrlCheck {
            if url.contains("dead") {
                UrlCheck::invalid("HEAD returned status 404")
            } else {
                UrlCheck::valid(format!("snippet for {url}"))
            }
        }
    }

    struct MapLoader(HashMap<String, String>);

    #[async_trait]
    impl DocumentLoader for MapLoader {
        async fn load(&self, urls: &[String]) -> Vec<Document> {
            urls.iter()
                .filter_map(|u| self.0.get(u).map(|t| Document::new(u.clone(), t.clone())))
                .collect()
        }
    }

    #[derive(Default)]
    struct VecIndex(Mutex<Vec<EvidenceChunk>>);

    #[async_trait]
    impl SimilarityIndex for VecIndex {
        async fn index(&self, chunks: Vec<EvidenceChunk>) -> Result<usize, IndexError> {
            let n = chunks.len();
            self.0.lock().unwrap().extend(chunks);
            Ok(n)
        }

        async fn query(&self, _text: &str, k: usize) -> Result<Vec<EvidenceChunk>, IndexError> {
            Ok(self.0.lock().unwrap().iter().take(k).cloned().collect())
        }
    }

    struct Harness {
        proponent: Arc<StageTransport>,
        opponent: Arc<StageTransport>,
        use_case: RunDebateUseCase,
    }

    fn harness(proponent: StageTransport, opponent: StageTransport, pages: &[(&str, &str)]) -> Harness {
        let params = DebateParams::default().with_annotation(ClosingAnnotation::None);
        let proponent = Arc::new(proponent);
        let opponent = Arc::new(opponent);
        let agent = |seat, transport: &Arc<StageTransport>| {
            let adapter = Arc::new(ModelAdapter::new(transport.clone(), Duration::from_secs(5)));
            DebateAgent::new(seat, transport.name, adapter, params.memory_limit)
        };
        let agents = AgentPair::new(agent(Seat::Proponent, &proponent), agent(Seat::Opponent, &opponent));

        let verifier = ReferenceVerifier::new(Arc::new(MockValidator), AuthorityScorer::default(), 6);
        let loader = MapLoader(pages.iter().map(|(u, t)| (u.to_string(), t.to_string())).collect());
        let evidence = EvidenceIndex::new(
            Arc::new(loader),
            Arc::new(VecIndex::default()),
            TextSplitter::default(),
        );

        let use_case = RunDebateUseCase::new(agents, verifier, evidence, params).unwrap();
        Harness {
            proponent,
            opponent,
            use_case,
        }
    }

    fn question() -> Question {
        Question::new("Should cities ban cars?").unwrap()
    }

    // ==================== Protocol ====================

    #[tokio::test]
    async fn test_history_follows_schedule() {
        let h = harness(StageTransport::new("Alpha"), StageTransport::new("Beta"), &[]);
        let outcome = h.use_case.execute(&question()).await;

        let steps: Vec<_> = outcome
            .history
            .iter()
            .map(|t| (t.agent.as_str(), t.stage, t.round))
            .collect();
        assert_eq!(
            steps,
            vec![
                ("Alpha", Stage::InitialSuggestion, 0),
                ("Beta", Stage::InitialSuggestion, 0),
                ("Alpha", Stage::Critique, 1),
                ("Beta", Stage::Critique, 1),
                ("Alpha", Stage::Refinement, 1),
                ("Beta", Stage::Refinement, 1),
                ("Alpha", Stage::Finalization, 0),
                ("Beta", Stage::Finalization, 0),
            ]
        );
        assert_eq!(outcome.panel.opponent, "Beta");
        assert!(outcome.is_success());
    }

    #[tokio::test]
    async fn test_prompts_reference_opponent_context() {
        let h = harness(StageTransport::new("Alpha"), StageTransport::new("Beta"), &[]);
        let (alpha, beta) = (h.proponent.clone(), h.opponent.clone());
        h.use_case.execute(&question()).await;

        let critique = alpha.prompt_for(Stage::Critique);
        assert!(critique.contains("Opponent's suggestion: Beta initial_suggestion answer"));

        let refinement = beta.prompt_for(Stage::Refinement);
        assert!(refinement.contains("Opponent's critique: Alpha critique answer"));
        // memory carries the agent's own earlier turns
        assert!(refinement.contains("AI: Initial suggestion: Beta initial_suggestion answer"));
        assert!(refinement.contains("AI: Critique round 1: Beta critique answer"));

        let finalization = alpha.prompt_for(Stage::Finalization);
        assert!(finalization.contains("Your suggestion: Alpha refinement answer"));
        assert!(finalization.contains("Opponent's suggestion: Beta refinement answer"));
    }

    #[tokio::test]
    async fn test_zero_rounds_uses_sentinels() {
        let mut h = harness(StageTransport::new("Alpha"), StageTransport::new("Beta"), &[]);
        h.use_case.params.rounds = 0;
        let alpha = h.proponent.clone();
        let outcome = h.use_case.execute(&question()).await;

        assert_eq!(outcome.history.len(), 4);
        let finalization = alpha.prompt_for(Stage::Finalization);
        assert!(finalization.contains(&format!("Your suggestion: {}", NO_PREVIOUS_SUGGESTION)));
    }

    #[tokio::test]
    async fn test_later_critique_targets_refinement() {
        let mut h = harness(StageTransport::new("Alpha"), StageTransport::new("Beta"), &[]);
        h.use_case.params.rounds = 2;
        let alpha = h.proponent.clone();
        h.use_case.execute(&question()).await;

        let critique = alpha.prompt_for(Stage::Critique);
        assert!(critique.contains("Opponent's suggestion: Beta refinement answer"));
    }

    #[tokio::test]
    async fn test_evidence_from_valid_references_reaches_prompts() {
        let initial = json!({
            "answer": "Congestion pricing works",
            "references": ["https://www.worldbank.org/transport", "https://dead.example.com/x"]
        })
        .to_string();
        let h = harness(
            StageTransport::new("Alpha").on(Stage::InitialSuggestion, Scripted::Reply(initial)),
            StageTransport::new("Beta"),
            &[
                ("https://www.worldbank.org/transport", "London cut traffic by 30 percent"),
                ("https://dead.example.com/x", "never loaded"),
            ],
        );
        let beta = h.opponent.clone();
        let outcome = h.use_case.execute(&question()).await;

        let first = &outcome.history.turns()[0];
        assert_eq!(first.references.len(), 2);
        assert_eq!(first.references[0].authority_score, 3);
        assert!(!first.references[1].valid);

        let critique = beta.prompt_for(Stage::Critique);
        assert!(critique.contains("Supporting evidence: London cut traffic by 30 percent"));
        assert!(!critique.contains("never loaded"));
    }

    // ==================== End-to-end scenarios ====================

    #[tokio::test]
    async fn test_finalization_picks_higher_scored_candidate() {
        let alpha_final = json!({
            "final_answer": "Ban cars downtown and expand transit",
            "references": [
                "https://www.worldbank.org/cities",
                "https://transit.example.org/report",
                "https://dead.example.com/gone"
            ]
        })
        .to_string();
        let beta_final = json!({
            "final_answer": "Ban cars downtown and expand transit",
            "references": ["https://blog.example.net/a", "https://news.example.io/b"]
        })
        .to_string();

        let h = harness(
            StageTransport::new("Alpha").on(Stage::Finalization, Scripted::Reply(alpha_final)),
            StageTransport::new("Beta").on(Stage::Finalization, Scripted::Reply(beta_final)),
            &[],
        );
        let outcome = h.use_case.execute(&question()).await;

        let verdict = outcome.final_outcome.verdict().expect("verdict");
        assert_eq!(verdict.agent, "Alpha");
        assert_eq!(verdict.seat, Seat::Proponent);
        // 6 words * 0.2 + 2 valid * 300 + (3 + 1 + 1) * 100
        assert!((verdict.score - 1101.2).abs() < 1e-9);
        let urls: Vec<_> = verdict.references.iter().map(|r| r.url.as_str()).collect();
        assert_eq!(
            urls,
            vec!["https://www.worldbank.org/cities", "https://transit.example.org/report"]
        );
        assert!(verdict.annotation.is_none());
    }

    #[tokio::test]
    async fn test_timeout_in_critique_is_recorded_as_marker() {
        let h = harness(
            StageTransport::new("Alpha"),
            StageTransport::new("Beta").on(Stage::Critique, Scripted::Fail(TransportError::Timeout)),
            &[],
        );
        let outcome = h.use_case.execute(&question()).await;

        let critiques: Vec<_> = outcome.history.at(Stage::Critique, 1).collect();
        assert_eq!(critiques.len(), 2);
        assert_eq!(critiques[0].answer, "Alpha critique answer");
        assert_eq!(critiques[1].answer, "[Beta Timeout]");
        assert!(critiques[1].references.is_empty());
        assert!(outcome.is_success());
    }

    #[derive(Default)]
    struct RecordingProgress {
        completions: Mutex<Vec<(Stage, String, bool)>>,
    }

    impl DebateProgressNotifier for RecordingProgress {
        fn on_stage_start(&self, _step: &StageStep, _total_tasks: usize) {}

        fn on_agent_complete(&self, step: &StageStep, agent: &str, success: bool) {
            self.completions
                .lock()
                .unwrap()
                .push((step.stage, agent.to_string(), success));
        }

        fn on_stage_complete(&self, _step: &StageStep) {}
    }

    #[tokio::test]
    async fn test_marker_replies_are_reported_as_failures() {
        let h = harness(
            StageTransport::new("Alpha"),
            StageTransport::new("Beta").on(Stage::Critique, Scripted::Fail(TransportError::Timeout)),
            &[],
        );
        let progress = RecordingProgress::default();
        h.use_case.execute_with_progress(&question(), &progress).await;

        let completions = progress.completions.lock().unwrap();
        let critique: Vec<_> = completions
            .iter()
            .filter(|(stage, _, _)| *stage == Stage::Critique)
            .map(|(_, agent, success)| (agent.as_str(), *success))
            .collect();
        assert_eq!(critique, vec![("Alpha", true), ("Beta", false)]);
        assert!(
            completions
                .iter()
                .filter(|(stage, _, _)| *stage != Stage::Critique)
                .all(|(_, _, success)| *success)
        );
    }

    #[tokio::test]
    async fn test_prose_and_fences_are_stripped_from_answer() {
        let reply = "Here is my closing statement.\n```json\n{\"final_answer\": \"Phase cars out over ten years\", \"references\": []}\n```\nThanks for listening.";
        let h = harness(
            StageTransport::new("Alpha").on(Stage::Finalization, Scripted::Reply(reply.to_string())),
            StageTransport::new("Beta"),
            &[],
        );
        let outcome = h.use_case.execute(&question()).await;

        let turn = outcome.history.last_turn(Seat::Proponent, Stage::Finalization).unwrap();
        assert_eq!(turn.answer, "Phase cars out over ten years");
        assert_eq!(turn.raw_response, reply);
        assert!(!turn.answer.contains("closing statement"));
    }

    #[tokio::test]
    async fn test_no_structured_finalization_yields_no_valid_answers() {
        let h = harness(
            StageTransport::new("Alpha").on(Stage::Finalization, Scripted::Reply("just prose".into())),
            StageTransport::new("Beta")
                .on(Stage::Finalization, Scripted::Fail(TransportError::Other("boom".into()))),
            &[],
        );
        let outcome = h.use_case.execute(&question()).await;

        assert_eq!(outcome.final_outcome, FinalOutcome::NoValidAnswers);
        assert_eq!(outcome.final_outcome.render(), NO_VALID_FINAL_ANSWERS);
        assert_eq!(outcome.history.len(), 8);
    }

    // ==================== Failure handling ====================

    #[tokio::test]
    async fn test_single_panic_becomes_error_turn() {
        let h = harness(
            StageTransport::new("Alpha").on(Stage::Refinement, Scripted::Panic),
            StageTransport::new("Beta"),
            &[],
        );
        let outcome = h.use_case.execute(&question()).await;

        let refinements: Vec<_> = outcome.history.at(Stage::Refinement, 1).collect();
        assert!(refinements[0].answer.starts_with("[Error] "));
        assert!(refinements[0].references.is_empty());
        assert_eq!(refinements[1].answer, "Beta refinement answer");
        assert!(outcome.is_success());
    }

    #[tokio::test]
    async fn test_stage_failure_keeps_history() {
        let h = harness(
            StageTransport::new("Alpha").on(Stage::Critique, Scripted::Panic),
            StageTransport::new("Beta").on(Stage::Critique, Scripted::Panic),
            &[],
        );
        let outcome = h.use_case.execute(&question()).await;

        match &outcome.final_outcome {
            FinalOutcome::Failed { error } => {
                assert!(error.starts_with("[Error] Debate failed: Both agents failed during"));
            }
            other => panic!("expected failure, got {:?}", other),
        }
        // initial suggestions plus the two placeholder critiques
        assert_eq!(outcome.history.len(), 4);
        assert!(outcome.history.at(Stage::Refinement, 1).next().is_none());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let params = DebateParams::default();
        let transport = Arc::new(StageTransport::new("Same"));
        let adapter = Arc::new(ModelAdapter::new(transport, Duration::from_secs(1)));
        let agents = AgentPair::new(
            DebateAgent::new(Seat::Proponent, "Same", adapter.clone(), 10),
            DebateAgent::new(Seat::Opponent, "Same", adapter, 10),
        );
        let verifier = ReferenceVerifier::new(Arc::new(MockValidator), AuthorityScorer::default(), 6);
        let evidence = EvidenceIndex::new(
            Arc::new(MapLoader(HashMap::new())),
            Arc::new(VecIndex::default()),
            TextSplitter::default(),
        );

        let result = RunDebateUseCase::new(agents, verifier, evidence, params);
        assert!(matches!(result, Err(RunDebateError::InvalidPanel(_))));
    }

    #[test]
    fn test_memory_lines() {
        assert_eq!(
            memory_line(StageStep::new(Stage::Critique, 2), "x"),
            "Critique round 2: x"
        );
        assert_eq!(
            memory_line(StageStep::new(Stage::Finalization, 0), "y"),
            "Final answer: y"
        );
    }
}
