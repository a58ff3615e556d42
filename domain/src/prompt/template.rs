//! Prompt templates for the debate flow

use crate::debate::stage::Stage;

/// Substituted when an opponent has no earlier suggestion or refinement.
pub const NO_PREVIOUS_SUGGESTION: &str = "No previous suggestion found";
/// Substituted when an opponent has no critique in the requested round.
pub const NO_PREVIOUS_CRITIQUE: &str = "No previous critique found";

/// Word bound the preamble asks every panelist to respect
pub const ANSWER_WORD_LIMIT: usize = 500;
/// Word bound of a critique
pub const CRITIQUE_WORD_LIMIT: usize = 300;

/// Templates for generating prompts at each stage
pub struct DebatePromptTemplate;

impl DebatePromptTemplate {
    /// System preamble sent ahead of every prompt; names the answer key
    /// the stage's reply must carry.
    pub fn preamble(panelist: &str, stage: Stage) -> String {
        let key = stage.answer_key();
        format!(
            "You are {panelist}, a panelist in a news channel debate. \
Provide a concise, technical, and factual answer (max {ANSWER_WORD_LIMIT} words). \
End with a JSON object with keys: '{key}' (string) and 'references' (list of 3-5 valid HTTPS URLs to official or reputable sources). \
Example: {{\"{key}\": \"...\", \"references\": [\"https://www.pmindia.gov.in\", \"https://www.mea.gov.in\"]}}"
        )
    }

    /// Preamble and prompt joined the way every transport expects them.
    pub fn combine(preamble: &str, prompt: &str) -> String {
        format!("{preamble}\n\nQUESTION:\n{prompt}")
    }

    /// Wraps a stage task with the agent's memory and the expected JSON shape.
    pub fn stage_envelope(memory: &str, stage: Stage, task: &str) -> String {
        format!(
            r#"Debate Context:
{memory}

Stage: {stage}
Task: {task}

Provide your response with references in JSON format:
{{
    "{key}": "...",
    "references": ["https://url1", "https://url2"]
}}"#,
            stage = stage.as_str(),
            key = stage.answer_key(),
        )
    }

    pub fn initial_suggestion(agent: &str, question: &str) -> String {
        format!("As a lawyer for {agent}, provide a concise initial suggestion for: {question}")
    }

    pub fn critique(agent: &str, question: &str, opponent_answer: &str, evidence: &str) -> String {
        format!(
            r#"As a lawyer-style debate agent for {agent}, analyze the following opponent suggestion for flaws (e.g., factual inaccuracies, weak evidence, missing points) regarding: {question}

Opponent's suggestion: {opponent_answer}
Supporting evidence: {evidence}

Provide a concise critique (max {CRITIQUE_WORD_LIMIT} words) identifying specific weaknesses and suggest improvements. End with a JSON block:
{{
    "critique": "...",
    "references": ["https://url1", "https://url2"]
}}"#
        )
    }

    pub fn refinement(agent: &str, question: &str, opponent_critique: &str, evidence: &str) -> String {
        format!(
            r#"As a lawyer for {agent}, refine your suggestion for: {question}
Opponent's critique: {opponent_critique}
Supporting evidence: {evidence}
Address the critique and strengthen your argument."#
        )
    }

    pub fn finalization(
        agent: &str,
        question: &str,
        own_suggestion: &str,
        opponent_suggestion: &str,
        evidence: &str,
    ) -> String {
        format!(
            r#"As a lawyer for {agent}, collaborate with the opponent to produce a high-accuracy final answer for: {question}
Your suggestion: {own_suggestion}
Opponent's suggestion: {opponent_suggestion}
Supporting evidence: {evidence}
Merge the strongest points from both suggestions, prioritizing factual accuracy and evidence quality. End with a JSON block:
{{
    "final_answer": "...",
    "references": ["https://url1", "https://url2"]
}}"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preamble_names_panelist() {
        let preamble = DebatePromptTemplate::preamble("Gemini", Stage::InitialSuggestion);
        assert!(preamble.starts_with("You are Gemini, a panelist"));
        assert!(preamble.contains("max 500 words"));
        assert!(preamble.contains("'answer' (string)"));
        assert!(preamble.contains("'references'"));

        let preamble = DebatePromptTemplate::preamble("Gemini", Stage::Critique);
        assert!(preamble.contains("'critique' (string)"));
        assert!(preamble.contains("{\"critique\": \"...\""));
    }

    #[test]
    fn test_combine() {
        assert_eq!(
            DebatePromptTemplate::combine("P", "What?"),
            "P\n\nQUESTION:\nWhat?"
        );
    }

    #[test]
    fn test_stage_envelope_uses_answer_key() {
        let prompt = DebatePromptTemplate::stage_envelope("No history available", Stage::Finalization, "merge");
        assert!(prompt.contains("Stage: finalization"));
        assert!(prompt.contains("\"final_answer\": \"...\""));
        assert!(prompt.contains("Task: merge"));

        let prompt = DebatePromptTemplate::stage_envelope("", Stage::Refinement, "t");
        assert!(prompt.contains("\"answer\": \"...\""));
    }

    #[test]
    fn test_critique_prompt() {
        let prompt = DebatePromptTemplate::critique("DeepSeek", "Q?", "their take", "ev");
        assert!(prompt.contains("lawyer-style debate agent for DeepSeek"));
        assert!(prompt.contains("Opponent's suggestion: their take"));
        assert!(prompt.contains("Supporting evidence: ev"));
        assert!(prompt.contains("max 300 words"));
    }

    #[test]
    fn test_finalization_prompt() {
        let prompt = DebatePromptTemplate::finalization("A", "Q?", "mine", "theirs", "");
        assert!(prompt.contains("Your suggestion: mine"));
        assert!(prompt.contains("Opponent's suggestion: theirs"));
        assert!(prompt.contains("\"final_answer\""));
    }
}
