//! Chat-completion backend
//!
//! Talks the OpenAI-compatible `/v1/chat/completions` wire shape over
//! `reqwest`. The request timeout doubles as the bounded wait required
//! of the external call; callers treat timeout and error identically.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use support_agent_core::{ChatBackend, Message, Result};

use crate::LlmError;

/// LLM configuration
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Model name/ID
    pub model: String,
    /// API endpoint base (no trailing slash)
    pub endpoint: String,
    /// API key
    pub api_key: Option<String>,
    /// Maximum tokens to generate
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: "gpt-3.5-turbo".to_string(),
            endpoint: "https://api.openai.com".to_string(),
            api_key: None,
            max_tokens: 150,
            temperature: 0.7,
            timeout: Duration::from_secs(30),
        }
    }
}

/// OpenAI-compatible chat backend
#[derive(Clone)]
pub struct OpenAiBackend {
    client: Client,
    config: LlmConfig,
}

impl OpenAiBackend {
    /// Create a new backend.
    ///
    /// Fails if no API key is configured or the HTTP client cannot be
    /// built; the caller is expected to fall back to running without a
    /// backend in that case.
    pub fn new(config: LlmConfig) -> std::result::Result<Self, LlmError> {
        if config.api_key.as_deref().unwrap_or("").is_empty() {
            return Err(LlmError::NotConfigured);
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| LlmError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/v1{}", self.config.endpoint, path)
    }

    async fn execute(&self, messages: &[Message]) -> std::result::Result<String, LlmError> {
        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: messages.iter().map(|m| m.into()).collect(),
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        let response = self
            .client
            .post(self.api_url("/chat/completions"))
            .bearer_auth(self.config.api_key.as_deref().unwrap_or_default())
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, model = %self.config.model, "chat completion request failed");
            return Err(LlmError::Api(format!("{}: {}", status, body)));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| LlmError::InvalidResponse("empty choices".to_string()))
    }
}

#[async_trait]
impl ChatBackend for OpenAiBackend {
    async fn complete(&self, messages: &[Message]) -> Result<String> {
        let text = self.execute(messages).await?;
        Ok(text)
    }

    async fn is_available(&self) -> bool {
        self.client
            .get(self.api_url("/models"))
            .bearer_auth(self.config.api_key.as_deref().unwrap_or_default())
            .send()
            .await
            .map(|r| r.status().is_success())
            .unwrap_or(false)
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

// OpenAI wire types
#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<WireMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
struct WireMessage {
    role: String,
    content: String,
}

impl From<&Message> for WireMessage {
    fn from(msg: &Message) -> Self {
        Self {
            role: msg.role.to_string(),
            content: msg.content.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: WireMessage,
}

#[cfg(test)]
mod tests {
    use super::*;
    use support_agent_core::Role;

    #[test]
    fn test_config_default() {
        let config = LlmConfig::default();
        assert_eq!(config.max_tokens, 150);
        assert_eq!(config.temperature, 0.7);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_requires_api_key() {
        let result = OpenAiBackend::new(LlmConfig::default());
        assert!(matches!(result, Err(LlmError::NotConfigured)));
    }

    #[test]
    fn test_message_conversion() {
        let msg = Message {
            role: Role::User,
            content: "Hello".to_string(),
        };
        let wire: WireMessage = (&msg).into();
        assert_eq!(wire.role, "user");
        assert_eq!(wire.content, "Hello");
    }

    #[test]
    fn test_api_url() {
        let backend = OpenAiBackend::new(LlmConfig {
            api_key: Some("test-key".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            backend.api_url("/chat/completions"),
            "https://api.openai.com/v1/chat/completions"
        );
    }
}
