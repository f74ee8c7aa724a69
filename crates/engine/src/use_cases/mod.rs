//! Use cases - quest generation orchestration.
//!
//! Use cases orchestrate domain types and infrastructure ports to fulfill
//! user stories. There is one domain area here: quest generation.

pub mod generation;

pub use generation::{GenerationError, QuestGenerator};
