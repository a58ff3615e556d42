//! Debate agent
//!
//! A [`ModelAdapter`] plus bounded memory of the agent's own turns. Prompt
//! construction happens on the agent (it needs the memory); the call itself
//! is packaged as an [`AgentRequest`] so the orchestrator can run both
//! agents' requests as independent tasks.

use super::model_adapter::{AdapterReply, ModelAdapter};
use std::sync::Arc;
use tribunal_domain::{AgentMemory, DebatePromptTemplate, MemoryRole, Seat, Stage};

/// A fully built prompt bound to the adapter that will answer it
pub struct AgentRequest {
    adapter: Arc<ModelAdapter>,
    prompt: String,
    stage: Stage,
}

impl AgentRequest {
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub async fn send(self) -> AdapterReply {
        self.adapter.invoke(&self.prompt, self.stage).await
    }
}

pub struct DebateAgent {
    seat: Seat,
    name: String,
    adapter: Arc<ModelAdapter>,
    memory: AgentMemory,
}

impl DebateAgent {
    pub fn new(seat: Seat, name: impl Into<String>, adapter: Arc<ModelAdapter>, memory_limit: usize) -> Self {
        Self {
            seat,
            name: name.into(),
            adapter,
            memory: AgentMemory::new(memory_limit),
        }
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn memory(&self) -> &AgentMemory {
        &self.memory
    }

    /// Stage task wrapped with the rendered memory.
    pub fn formulate_request(&self, task: &str, stage: Stage) -> AgentRequest {
        AgentRequest {
            adapter: Arc::clone(&self.adapter),
            prompt: DebatePromptTemplate::stage_envelope(&self.memory.render(), stage, task),
            stage,
        }
    }

    /// Adversarial critique of the opponent's latest position. Memory is
    /// not included.
    pub fn critique_request(&self, opponent_answer: &str, question: &str, evidence: &str) -> AgentRequest {
        AgentRequest {
            adapter: Arc::clone(&self.adapter),
            prompt: DebatePromptTemplate::critique(&self.name, question, opponent_answer, evidence),
            stage: Stage::Critique,
        }
    }

    pub async fn formulate_response(&self, task: &str, stage: Stage) -> AdapterReply {
        self.formulate_request(task, stage).send().await
    }

    pub async fn critique_opponent(&self, opponent_answer: &str, question: &str, evidence: &str) -> AdapterReply {
        self.critique_request(opponent_answer, question, evidence).send().await
    }

    /// Append to memory, evicting the oldest entries beyond capacity.
    pub fn record_turn(&mut self, text: impl Into<String>, is_user: bool) {
        let role = if is_user { MemoryRole::Human } else { MemoryRole::Ai };
        self.memory.record(text, role);
    }
}
