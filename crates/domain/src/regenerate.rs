//! Section regeneration - redo one part of a quest while keeping the rest

use serde::{Deserialize, Serialize};

use crate::brief::DesignBrief;
use crate::error::DomainError;
use crate::quest::Quest;

/// Which part of a quest to regenerate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestSection {
    Title,
    Summary,
    Steps,
}

impl QuestSection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Summary => "summary",
            Self::Steps => "steps",
        }
    }
}

impl std::fmt::Display for QuestSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request to regenerate a single section of an existing quest
///
/// Carries the original brief so the regenerated section stays true to the
/// designer's intent, and the full current quest so everything outside the
/// named section can be held fixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegenerateSectionRequest {
    pub brief: DesignBrief,
    pub quest: Quest,
    pub section: QuestSection,
    /// 0-based index into `quest.steps`; required when `section` is `steps`
    pub step_index: Option<usize>,
}

impl RegenerateSectionRequest {
    /// Checks the brief plus the step-index invariants.
    pub fn validate(&self) -> Result<(), DomainError> {
        self.brief.validate()?;
        if self.section == QuestSection::Steps {
            match self.step_index {
                None => {
                    return Err(DomainError::validation(
                        "step_index is required when section is \"steps\"",
                    ));
                }
                Some(index) if index >= self.quest.steps.len() => {
                    return Err(DomainError::validation(format!(
                        "step_index {index} is out of bounds for a quest with {} steps",
                        self.quest.steps.len()
                    )));
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}
