//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::ports::LlmPort;
use crate::use_cases::QuestGenerator;

/// Main application state.
///
/// Holds the wired use cases. Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub quests: Arc<QuestGenerator>,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(llm: Arc<dyn LlmPort>) -> Self {
        let quests = Arc::new(QuestGenerator::new(llm));
        Self {
            use_cases: UseCases { quests },
        }
    }
}
