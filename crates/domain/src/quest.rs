//! Quest aggregate - the structured document the generator produces
//!
//! These types double as the validation contract for LLM output: a completion
//! payload either deserializes into [`Quest`] exactly or the generation fails.
//! Enum tokens are deliberately strict; `speaker` in particular accepts only
//! the literal role markers, never a character name.

use serde::{Deserialize, Serialize};

/// Who is talking in a dialogue line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Speaker {
    Npc,
    Player,
}

/// One utterance in a step's scripted conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogueLine {
    pub speaker: Speaker,
    pub text: String,
}

/// A single objective within a quest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestStep {
    /// 1-based position, expected contiguous across the quest
    pub step_number: u32,
    /// What happens narratively in this step
    pub description: String,
    /// What the player must do to complete the step
    pub objective: String,
    /// Scripted exchange, in conversation order
    pub npc_dialogue: Vec<DialogueLine>,
}

/// What kind of reward a quest grants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RewardKind {
    Xp,
    Gold,
    Item,
    Cosmetic,
    Other,
}

/// A completion reward
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reward {
    #[serde(rename = "type")]
    pub kind: RewardKind,
    pub description: String,
    /// Quantity, meaningful for xp and gold
    pub amount: Option<i64>,
}

/// A fully generated quest
///
/// `zone`, `faction`, `tone` and the level range echo (or refine) the brief
/// the quest was generated from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quest {
    pub title: String,
    pub summary: String,
    pub zone: String,
    pub faction: String,
    pub tone: String,
    pub player_level_min: u32,
    pub player_level_max: u32,
    pub steps: Vec<QuestStep>,
    pub rewards: Vec<Reward>,
}

impl Quest {
    /// True when step numbers run 1, 2, 3 in ascending order with no gaps.
    ///
    /// The generator treats a violation as a soft defect (logged, not
    /// rejected) since step identity is positional anyway.
    pub fn has_contiguous_steps(&self) -> bool {
        self.steps
            .iter()
            .enumerate()
            .all(|(i, step)| step.step_number == i as u32 + 1)
    }
}
