//! Questsmith domain types
//!
//! Request-scoped value objects shared by the engine: the design brief a
//! caller submits, the quest document the generator returns, and the
//! section-regeneration request. No I/O, no persistence; serde derives define
//! the wire format and double as the structural validator for LLM output.

pub mod brief;
pub mod error;
pub mod quest;
pub mod regenerate;

pub use brief::{DesignBrief, MAX_STEPS, MIN_STEPS};
pub use error::DomainError;
pub use quest::{DialogueLine, Quest, QuestStep, Reward, RewardKind, Speaker};
pub use regenerate::{QuestSection, RegenerateSectionRequest};
