//! Conversation record types
//!
//! One `ConversationEntry` is created per processed message and appended
//! to the agent's bounded store. These types are shared between the store
//! and the HTTP layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Summary of one extracted entity, as stored in the log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityMention {
    /// Entity category (e.g. "email", "order_number")
    pub entity_type: String,
    /// Matched text
    pub text: String,
    /// Extraction confidence
    pub confidence: f32,
}

/// One processed interaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationEntry {
    /// When the message was processed
    pub timestamp: DateTime<Utc>,
    /// Normalized user message
    pub user_message: String,
    /// Generated or fallback response
    pub ai_response: String,
    /// Classified intent label
    pub intent: String,
    /// Dominant sentiment label
    pub sentiment: String,
    /// Confidence of the dominant sentiment
    pub sentiment_confidence: f32,
    /// Entities found in the normalized message
    pub entities: Vec<EntityMention>,
    /// Wall-clock processing time in seconds
    pub response_time: f64,
    /// Monotonic id shared across all sessions, starting at 1
    pub query_id: u64,
    /// Caller-supplied session grouping, if any
    pub session_id: Option<String>,
}

/// Aggregated view of one session's entries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub session_id: String,
    /// Number of entries recorded for this session
    pub conversations: usize,
    pub start_time: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
    /// Intents in log order
    pub intents: Vec<String>,
    /// Sentiments in log order
    pub sentiments: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_serialization() {
        let entry = ConversationEntry {
            timestamp: Utc::now(),
            user_message: "my app crashed".to_string(),
            ai_response: "Let me help with that.".to_string(),
            intent: "technical_support".to_string(),
            sentiment: "neutral".to_string(),
            sentiment_confidence: 0.0,
            entities: vec![EntityMention {
                entity_type: "error_code".to_string(),
                text: "error 500".to_string(),
                confidence: 0.8,
            }],
            response_time: 0.002,
            query_id: 1,
            session_id: Some("abc".to_string()),
        };

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains(r#""query_id":1"#));
        assert!(json.contains("technical_support"));
    }
}
