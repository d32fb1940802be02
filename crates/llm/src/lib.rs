//! LLM integration
//!
//! Chat-completion backend for the response synthesizer plus the prompt
//! builder that assembles the enriched system/context/user message list.
//! The agent only sees the `ChatBackend` trait; every failure here is
//! recovered by the fallback responder, never surfaced to the end user.

pub mod backend;
pub mod prompt;

pub use backend::{LlmConfig, OpenAiBackend};
pub use prompt::PromptBuilder;

use thiserror::Error;

/// LLM errors
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Backend not configured")]
    NotConfigured,

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LlmError::Timeout
        } else {
            LlmError::Network(err.to_string())
        }
    }
}

impl From<LlmError> for support_agent_core::Error {
    fn from(err: LlmError) -> Self {
        support_agent_core::Error::Llm(err.to_string())
    }
}
