//! Process-wide configuration read from the environment.
//!
//! Settings are resolved once at startup and passed by reference to whatever
//! needs them; nothing reads the environment ad hoc after boot.

/// Default OpenAI-compatible API base URL.
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";

/// Default model for quest generation.
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

/// Default timeout for completion requests, in seconds.
pub const DEFAULT_LLM_TIMEOUT_SECS: u64 = 120;

/// Raised when mandatory configuration is absent.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("OPENAI_API_KEY environment variable is not set")]
    MissingApiKey,
}

/// Everything the process is configured with.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Bearer credential for the completion API. `None` here becomes a
    /// `ConfigError::MissingApiKey` when the client is constructed.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub llm_timeout_secs: u64,
    pub server_host: String,
    pub server_port: u16,
}

impl Settings {
    /// Read settings from environment variables, applying defaults.
    ///
    /// Never fails: the mandatory credential is enforced at client
    /// construction, which keeps startup error reporting in one place.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
            model: std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_OPENAI_MODEL.into()),
            base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.into()),
            llm_timeout_secs: std::env::var("LLM_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_LLM_TIMEOUT_SECS),
            server_host: std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            server_port: std::env::var("SERVER_PORT")
                .or_else(|_| std::env::var("PORT"))
                .unwrap_or_else(|_| "3000".into())
                .parse()
                .unwrap_or(3000),
        }
    }
}
