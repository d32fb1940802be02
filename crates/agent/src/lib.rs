//! Support triage agent
//!
//! Orchestrates the per-message pipeline: normalize, extract entities,
//! score sentiment, classify intent, synthesize a response (LLM or
//! fallback table), generate follow-up suggestions, and record the
//! interaction in the bounded conversation store.

pub mod agent;
pub mod fallback;
pub mod history;
pub mod suggestions;

pub use agent::{AgentConfig, ChatReply, EntityRef, SupportAgent};
pub use fallback::FallbackResponder;
pub use history::{
    AnalyticsSnapshot, ConversationStore, RecentConversations, MAX_STORED_CONVERSATIONS,
};
pub use suggestions::generate_suggestions;

use thiserror::Error;

/// Agent errors
///
/// These never escape `SupportAgent::process`: a model failure is
/// recovered with the template responder, and anything reaching the
/// outermost boundary is converted into the fixed degraded reply.
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("LLM unavailable: {0}")]
    LlmUnavailable(String),

    #[error("Processing error: {0}")]
    Processing(String),
}

impl From<support_agent_core::Error> for AgentError {
    fn from(err: support_agent_core::Error) -> Self {
        match err {
            support_agent_core::Error::Llm(msg) => AgentError::LlmUnavailable(msg),
            other => AgentError::Processing(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_errors_map_to_llm_unavailable() {
        let err = AgentError::from(support_agent_core::Error::Llm("timeout".to_string()));
        assert!(matches!(err, AgentError::LlmUnavailable(msg) if msg == "timeout"));
    }

    #[test]
    fn test_other_core_errors_map_to_processing() {
        let err = AgentError::from(support_agent_core::Error::NoData);
        assert!(matches!(err, AgentError::Processing(_)));
    }
}
