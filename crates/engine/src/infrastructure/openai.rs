//! OpenAI chat-completion client
//!
//! Speaks the `/v1/chat/completions` wire protocol, so any OpenAI-compatible
//! endpoint works by overriding `OPENAI_BASE_URL`.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::infrastructure::ports::{
    FinishReason, LlmError, LlmPort, LlmRequest, LlmResponse, MessageRole, TokenUsage,
};
use crate::infrastructure::settings::{ConfigError, Settings};

/// Client for an OpenAI-compatible chat-completion API
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl OpenAiClient {
    /// Build a client from settings.
    ///
    /// Fails when the API key is missing: generation can never succeed
    /// without a credential, and a startup error beats a 401 at request time.
    pub fn new(settings: &Settings) -> Result<Self, ConfigError> {
        let api_key = settings.api_key.clone().ok_or(ConfigError::MissingApiKey)?;

        // Completion requests can be slow; the timeout is generous and configurable.
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.llm_timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
            api_key,
        })
    }
}

#[async_trait]
impl LlmPort for OpenAiClient {
    async fn complete(&self, request: LlmRequest) -> Result<LlmResponse, LlmError> {
        let api_request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: build_messages(&request),
            temperature: request.temperature,
        };

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&api_request)
            .send()
            .await
            .map_err(|e| LlmError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .map_err(|e| LlmError::RequestFailed(e.to_string()))?;
            return Err(LlmError::RequestFailed(format!("{status}: {error_text}")));
        }

        let api_response: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        convert_response(api_response)
    }
}

fn build_messages(request: &LlmRequest) -> Vec<WireMessage> {
    request
        .messages
        .iter()
        .map(|msg| WireMessage {
            role: match msg.role {
                MessageRole::System => "system",
                MessageRole::User => "user",
            }
            .to_string(),
            content: Some(msg.content.clone()),
        })
        .collect()
}

fn convert_response(response: ChatCompletionResponse) -> Result<LlmResponse, LlmError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| LlmError::InvalidResponse("No choices in completion response".to_string()))?;

    let finish_reason = match choice.finish_reason.as_deref() {
        Some("stop") => FinishReason::Stop,
        Some("length") => FinishReason::Length,
        Some("content_filter") => FinishReason::ContentFilter,
        _ => FinishReason::Unknown,
    };

    Ok(LlmResponse {
        content: choice.message.content.unwrap_or_default(),
        finish_reason,
        usage: response.usage.map(|u| TokenUsage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        }),
    })
}

// =============================================================================
// Wire types
// =============================================================================

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<WireMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct WireMessage {
    role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Default, Deserialize)]
struct Choice {
    message: WireMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(api_key: Option<&str>) -> Settings {
        Settings {
            api_key: api_key.map(String::from),
            model: "gpt-4o-mini".to_string(),
            base_url: "https://api.openai.com/".to_string(),
            llm_timeout_secs: 5,
            server_host: "127.0.0.1".to_string(),
            server_port: 3000,
        }
    }

    #[test]
    fn test_missing_api_key_is_a_config_error() {
        let err = OpenAiClient::new(&settings(None)).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = OpenAiClient::new(&settings(Some("sk-test"))).unwrap();
        assert_eq!(client.base_url, "https://api.openai.com");
    }

    #[test]
    fn test_request_serializes_both_roles() {
        use crate::infrastructure::ports::ChatMessage;

        let request = LlmRequest::new(vec![
            ChatMessage::system("You design quests."),
            ChatMessage::user("Design one."),
        ])
        .with_temperature(0.8);

        let wire = build_messages(&request);
        assert_eq!(wire.len(), 2);
        assert_eq!(wire[0].role, "system");
        assert_eq!(wire[1].role, "user");

        let body = serde_json::to_value(ChatCompletionRequest {
            model: "gpt-4o-mini".to_string(),
            messages: wire,
            temperature: request.temperature,
        })
        .unwrap();
        let temperature = body["temperature"].as_f64().unwrap();
        assert!((temperature - 0.8).abs() < 1e-6);
        assert_eq!(body["messages"][0]["role"], "system");
    }

    #[test]
    fn test_convert_response_takes_first_choice() {
        let response = ChatCompletionResponse {
            choices: vec![Choice {
                message: WireMessage {
                    role: "assistant".to_string(),
                    content: Some("{\"title\": \"x\"}".to_string()),
                },
                finish_reason: Some("stop".to_string()),
            }],
            usage: Some(Usage {
                prompt_tokens: 100,
                completion_tokens: 50,
                total_tokens: 150,
            }),
        };

        let converted = convert_response(response).unwrap();
        assert_eq!(converted.content, "{\"title\": \"x\"}");
        assert_eq!(converted.finish_reason, FinishReason::Stop);
        assert_eq!(converted.usage.unwrap().total_tokens, 150);
    }

    #[test]
    fn test_empty_choices_is_invalid_response() {
        let response = ChatCompletionResponse {
            choices: vec![],
            usage: None,
        };
        let err = convert_response(response).unwrap_err();
        assert!(matches!(err, LlmError::InvalidResponse(_)));
    }
}
