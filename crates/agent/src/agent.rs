//! Message orchestrator.
//!
//! `SupportAgent::process` runs the full per-message pipeline and never
//! fails: language-model errors fall back to the template responder,
//! and any other pipeline failure produces a fixed degraded reply that
//! echoes the current query counter without claiming an id.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use support_agent_core::{ChatBackend, ConversationEntry, EntityMention, Message};
use support_agent_llm::PromptBuilder;
use support_agent_text_processing::{
    EntityExtractor, IntentClassifier, SentimentScorer, TextNormalizer,
};
use tracing::{debug, info, warn};

use crate::fallback::FallbackResponder;
use crate::history::ConversationStore;
use crate::suggestions::generate_suggestions;
use crate::AgentError;

/// Tuning knobs for the orchestrator.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// Prior context messages forwarded to the model, most recent kept
    pub context_window: usize,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self { context_window: 10 }
    }
}

/// Entity view returned to callers, without positions or confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRef {
    #[serde(rename = "type")]
    pub entity_type: String,
    pub text: String,
}

/// Complete reply for one processed message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
    pub intent: String,
    pub sentiment: String,
    pub entities: Vec<EntityRef>,
    /// Processing time in seconds
    pub response_time: f64,
    pub query_id: u64,
    /// RFC 3339 processing timestamp
    pub timestamp: String,
    pub suggestions: Vec<String>,
}

pub struct SupportAgent {
    normalizer: TextNormalizer,
    extractor: EntityExtractor,
    sentiment: SentimentScorer,
    intents: IntentClassifier,
    fallback: FallbackResponder,
    llm: Option<Arc<dyn ChatBackend>>,
    store: Arc<ConversationStore>,
    config: AgentConfig,
}

impl SupportAgent {
    pub fn new(llm: Option<Arc<dyn ChatBackend>>) -> Self {
        Self::with_config(llm, AgentConfig::default())
    }

    pub fn with_config(llm: Option<Arc<dyn ChatBackend>>, config: AgentConfig) -> Self {
        Self {
            normalizer: TextNormalizer::new(),
            extractor: EntityExtractor::new(),
            sentiment: SentimentScorer::new(),
            intents: IntentClassifier::new(),
            fallback: FallbackResponder::new(),
            llm,
            store: Arc::new(ConversationStore::new()),
            config,
        }
    }

    pub fn store(&self) -> &Arc<ConversationStore> {
        &self.store
    }

    pub fn llm_configured(&self) -> bool {
        self.llm.is_some()
    }

    /// Process one user message. Infallible: every failure mode maps to
    /// either a fallback response or the degraded reply.
    pub async fn process(
        &self,
        message: &str,
        context: &[Message],
        session_id: Option<String>,
    ) -> ChatReply {
        let start = Instant::now();
        match self.run_pipeline(message, context, session_id, start).await {
            Ok(reply) => reply,
            Err(err) => {
                warn!(error = %err, "pipeline failed, returning degraded reply");
                self.degraded_reply(start)
            }
        }
    }

    async fn run_pipeline(
        &self,
        message: &str,
        context: &[Message],
        session_id: Option<String>,
        start: Instant,
    ) -> Result<ChatReply, AgentError> {
        let normalized = self.normalizer.normalize(message);
        let entities = self.extractor.extract(&normalized);
        let sentiment = self.sentiment.analyze(&normalized);
        let intent = self.intents.classify(&normalized);
        debug!(
            intent = intent.as_str(),
            sentiment = sentiment.label.as_str(),
            entity_count = entities.len(),
            "analyzed message"
        );

        let response = match &self.llm {
            Some(backend) => {
                let rendered: Vec<String> = entities
                    .iter()
                    .map(|e| format!("{}: {}", e.entity_type.as_str(), e.text))
                    .collect();
                let skip = context.len().saturating_sub(self.config.context_window);
                let messages = PromptBuilder::new()
                    .system_prompt(
                        intent.as_str(),
                        sentiment.label.as_str(),
                        sentiment.confidence,
                        &rendered,
                    )
                    .with_history(&context[skip..])
                    .user_message(&normalized)
                    .build();

                match self.model_response(backend.as_ref(), &messages).await {
                    Ok(text) => {
                        info!(model = backend.model_name(), "using model response");
                        text
                    }
                    Err(err) => {
                        warn!(error = %err, "model call failed, using fallback response");
                        self.fallback.respond(&normalized, intent, sentiment.label)
                    }
                }
            }
            None => {
                info!("no model configured, using fallback response");
                self.fallback.respond(&normalized, intent, sentiment.label)
            }
        };

        let response_time = start.elapsed().as_secs_f64();
        let timestamp = Utc::now();
        let entry = ConversationEntry {
            timestamp,
            user_message: normalized,
            ai_response: response.clone(),
            intent: intent.as_str().to_string(),
            sentiment: sentiment.label.as_str().to_string(),
            sentiment_confidence: sentiment.confidence,
            entities: entities
                .iter()
                .map(|e| EntityMention {
                    entity_type: e.entity_type.as_str().to_string(),
                    text: e.text.clone(),
                    confidence: e.confidence,
                })
                .collect(),
            response_time,
            query_id: 0,
            session_id,
        };
        let query_id = self.store.record(entry);

        Ok(ChatReply {
            response,
            intent: intent.as_str().to_string(),
            sentiment: sentiment.label.as_str().to_string(),
            entities: entities
                .into_iter()
                .map(|e| EntityRef {
                    entity_type: e.entity_type.as_str().to_string(),
                    text: e.text,
                })
                .collect(),
            response_time,
            query_id,
            timestamp: timestamp.to_rfc3339(),
            suggestions: generate_suggestions(intent, sentiment.label),
        })
    }

    async fn model_response(
        &self,
        backend: &dyn ChatBackend,
        messages: &[Message],
    ) -> Result<String, AgentError> {
        let text = backend.complete(messages).await?;
        Ok(text)
    }

    fn degraded_reply(&self, start: Instant) -> ChatReply {
        ChatReply {
            response: "I apologize, but I'm experiencing technical difficulties. Please try again in a moment.".to_string(),
            intent: "error".to_string(),
            sentiment: "neutral".to_string(),
            entities: Vec::new(),
            response_time: start.elapsed().as_secs_f64(),
            query_id: self.store.query_count(),
            timestamp: Utc::now().to_rfc3339(),
            suggestions: vec![
                "Try rephrasing your question".to_string(),
                "Contact human support".to_string(),
                "Check your internet connection".to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fallback_without_model() {
        let agent = SupportAgent::new(None);
        let reply = agent.process("my bill is wrong", &[], None).await;
        assert_eq!(reply.intent, "billing");
        assert_eq!(reply.query_id, 1);
        assert!(reply.response.contains("billing question"));
        assert_eq!(reply.suggestions.len(), 3);
    }

    #[tokio::test]
    async fn test_normalization_feeds_pipeline() {
        let agent = SupportAgent::new(None);
        let reply = agent.process("  pls   help  ", &[], None).await;
        let recent = agent.store().recent(1);
        assert_eq!(recent.entries[0].user_message, "please help");
        assert_eq!(reply.query_id, 1);
    }

    #[tokio::test]
    async fn test_degraded_reply_shape() {
        let agent = SupportAgent::new(None);
        agent.process("hello", &[], None).await;
        let reply = agent.degraded_reply(Instant::now());
        assert_eq!(reply.intent, "error");
        assert_eq!(reply.sentiment, "neutral");
        // Echoes the current counter without claiming a new id.
        assert_eq!(reply.query_id, 1);
        assert_eq!(agent.store().len(), 1);
        assert_eq!(reply.suggestions[1], "Contact human support");
    }

    #[tokio::test]
    async fn test_reply_serialization_uses_type_key() {
        let agent = SupportAgent::new(None);
        let reply = agent
            .process("email me at user@example.com about my refund", &[], None)
            .await;
        let json = serde_json::to_string(&reply).unwrap();
        assert!(json.contains(r#""type":"email""#));
        assert!(json.contains("user@example.com"));
    }
}
