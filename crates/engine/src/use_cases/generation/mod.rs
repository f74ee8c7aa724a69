//! Quest generation via LLM.
//!
//! One outbound completion per call, no retries: a failed round trip is
//! surfaced to the caller unmodified. Structural validation is serde itself;
//! the parsed JSON either deserializes into [`Quest`] or the call fails with
//! the specific violation.

pub mod prompts;
pub mod response;

use std::sync::Arc;

use questsmith_domain::{DesignBrief, Quest, RegenerateSectionRequest};

use crate::infrastructure::ports::{ChatMessage, LlmError, LlmPort, LlmRequest};

/// Sampling temperature for quest generation. High enough for creative
/// variation, low enough to keep the output structured.
const QUEST_TEMPERATURE: f32 = 0.8;

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// The completion request failed before any text came back
    #[error(transparent)]
    Llm(#[from] LlmError),
    /// The completion text is not JSON, even after fence stripping
    #[error("Failed to parse JSON from LLM response: {message}\nRaw: {raw}")]
    ResponseFormat { message: String, raw: String },
    /// The JSON parsed but does not deserialize into a Quest
    #[error("LLM returned JSON that does not match Quest schema: {0}")]
    SchemaMismatch(String),
    /// Same failure during section regeneration, tagged so callers can tell
    /// the two flows apart
    #[error("LLM returned JSON that does not match Quest schema on regeneration: {0}")]
    SchemaMismatchOnRegeneration(String),
}

/// Generates quests from design briefs using the LLM.
///
/// Stateless: each call builds its prompts, makes exactly one completion
/// round trip, and validates the result. Nothing is retained between calls.
pub struct QuestGenerator {
    llm: Arc<dyn LlmPort>,
}

impl QuestGenerator {
    pub fn new(llm: Arc<dyn LlmPort>) -> Self {
        Self { llm }
    }

    /// Generate a complete quest from a design brief.
    pub async fn generate_quest(&self, brief: &DesignBrief) -> Result<Quest, GenerationError> {
        tracing::debug!(
            zone = %brief.zone,
            faction = %brief.faction,
            steps = brief.number_of_steps,
            "Generating quest from design brief"
        );

        let value = self.complete_json(prompts::generation_prompt(brief)).await?;
        let quest: Quest = serde_json::from_value(value)
            .map_err(|e| GenerationError::SchemaMismatch(e.to_string()))?;

        self.check_step_expectations(&quest, brief);
        tracing::info!(title = %quest.title, steps = quest.steps.len(), "Quest generated");
        Ok(quest)
    }

    /// Regenerate one section of an existing quest, holding the rest fixed.
    ///
    /// The returned quest comes entirely from the model; preservation of the
    /// untouched sections is a prompt contract, not something enforced here.
    pub async fn regenerate_section(
        &self,
        request: &RegenerateSectionRequest,
    ) -> Result<Quest, GenerationError> {
        tracing::debug!(
            section = %request.section,
            step_index = ?request.step_index,
            "Regenerating quest section"
        );

        let value = self
            .complete_json(prompts::regeneration_prompt(request))
            .await?;
        let quest: Quest = serde_json::from_value(value)
            .map_err(|e| GenerationError::SchemaMismatchOnRegeneration(e.to_string()))?;

        self.check_step_expectations(&quest, &request.brief);
        tracing::info!(title = %quest.title, section = %request.section, "Quest section regenerated");
        Ok(quest)
    }

    /// One completion round trip: system + user message, parsed as JSON.
    async fn complete_json(
        &self,
        user_prompt: String,
    ) -> Result<serde_json::Value, GenerationError> {
        let request = LlmRequest::new(vec![
            ChatMessage::system(prompts::SYSTEM_PROMPT),
            ChatMessage::user(user_prompt),
        ])
        .with_temperature(QUEST_TEMPERATURE);

        let response = self.llm.complete(request).await?;

        tracing::debug!(finish_reason = ?response.finish_reason, "Completion received");
        if let Some(usage) = &response.usage {
            tracing::debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                "Token usage"
            );
        }

        response::parse_json_payload(&response.content)
    }

    /// Soft invariants: the LLM is asked for an exact step count and
    /// contiguous numbering, but a deviation only warns. Step identity is
    /// positional, so callers still get a usable quest.
    fn check_step_expectations(&self, quest: &Quest, brief: &DesignBrief) {
        if quest.steps.len() != usize::from(brief.number_of_steps) {
            tracing::warn!(
                expected = brief.number_of_steps,
                actual = quest.steps.len(),
                "Generated step count does not match the brief"
            );
        }
        if !quest.has_contiguous_steps() {
            tracing::warn!(title = %quest.title, "Step numbers are not contiguous from 1");
        }
    }
}
