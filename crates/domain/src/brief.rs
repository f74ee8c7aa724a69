//! Design brief - the designer-facing input contract for quest generation

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Fewest steps a generated quest may have
pub const MIN_STEPS: u8 = 3;
/// Most steps a generated quest may have
pub const MAX_STEPS: u8 = 8;

/// A designer's request for a quest
///
/// Everything the generator knows about the desired quest comes from this
/// struct; it is embedded verbatim (as JSON) in the generation prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignBrief {
    /// Game zone the quest is set in (e.g., "Blighted Fens")
    pub zone: String,
    /// Faction the quest giver belongs to
    pub faction: String,
    /// Emotional register of the quest (e.g., "grim", "whimsical")
    pub tone: String,
    /// Lowest player level the quest is tuned for
    pub player_level_min: u32,
    /// Highest player level the quest is tuned for
    pub player_level_max: u32,
    /// Optional guidance for the narrative voice
    pub narrative_style: Option<String>,
    /// How many steps the quest should have
    #[serde(default = "default_number_of_steps")]
    pub number_of_steps: u8,
    /// Rough completion time target, in minutes
    pub target_playtime_minutes: Option<u32>,
    /// Motifs or content the quest must not contain
    pub forbidden_elements: Option<Vec<String>>,
}

fn default_number_of_steps() -> u8 {
    4
}

impl DesignBrief {
    /// Checks the range invariants the wire format cannot express.
    ///
    /// Called before any LLM round trip so a bad brief never costs a
    /// completion request.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.number_of_steps < MIN_STEPS || self.number_of_steps > MAX_STEPS {
            return Err(DomainError::validation(format!(
                "number_of_steps must be between {MIN_STEPS} and {MAX_STEPS}, got {}",
                self.number_of_steps
            )));
        }
        if self.player_level_min < 1 {
            return Err(DomainError::validation("player_level_min must be at least 1"));
        }
        if self.player_level_max < 1 {
            return Err(DomainError::validation("player_level_max must be at least 1"));
        }
        Ok(())
    }
}
