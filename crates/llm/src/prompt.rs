//! Prompt building
//!
//! Assembles the message list sent to the chat backend: one system
//! instruction carrying the detected intent, sentiment, and entities,
//! then the prior conversation context, then the current user message.

use support_agent_core::Message;

/// Prompt builder for the support agent
pub struct PromptBuilder {
    messages: Vec<Message>,
}

impl PromptBuilder {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Build the system instruction from the analysis of the current
    /// message. `entities` are pre-rendered "type: text" pairs.
    pub fn system_prompt(
        mut self,
        intent: &str,
        sentiment: &str,
        sentiment_confidence: f32,
        entities: &[String],
    ) -> Self {
        let system = format!(
            r#"You are a professional, helpful customer support AI assistant.

User's Intent: {intent}
Sentiment: {sentiment} (confidence: {confidence:.2})
Entities Detected: [{entities}]

CRITICAL GUIDELINES:
- ALWAYS address the user's specific intent first - don't give generic responses
- If intent is "return_refund" or mentions damage/defects, focus on helping with returns/refunds
- If intent is "technical_support", focus on troubleshooting and technical assistance
- If intent is "billing", focus on payment and account issues
- If intent is "product_info", provide specific product details, not generic help
- Keep responses concise and professional (under 150 words)
- If sentiment is negative, be extra empathetic and helpful
- Always ask for specific details needed to help (order numbers, account info, etc.)
- Offer to escalate to human support if needed
- Be conversational but professional
- NEVER give generic "how can I help" responses when user has a specific issue"#,
            intent = intent,
            sentiment = sentiment,
            confidence = sentiment_confidence,
            entities = entities.join(", "),
        );

        self.messages.push(Message::system(system));
        self
    }

    /// Add prior conversation context in order.
    pub fn with_history(mut self, history: &[Message]) -> Self {
        self.messages.extend(history.iter().cloned());
        self
    }

    /// Add the current user message.
    pub fn user_message(mut self, message: &str) -> Self {
        self.messages.push(Message::user(message));
        self
    }

    /// Build the final message list.
    pub fn build(self) -> Vec<Message> {
        self.messages
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use support_agent_core::Role;

    #[test]
    fn test_prompt_structure() {
        let history = vec![Message::user("hi"), Message::assistant("hello")];
        let messages = PromptBuilder::new()
            .system_prompt("billing", "negative", 0.25, &["email: a@b.co".to_string()])
            .with_history(&history)
            .user_message("my bill is wrong")
            .build();

        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[3].role, Role::User);
        assert!(messages[0].content.contains("User's Intent: billing"));
        assert!(messages[0].content.contains("(confidence: 0.25)"));
        assert!(messages[0].content.contains("email: a@b.co"));
    }

    #[test]
    fn test_empty_entities_rendered() {
        let messages = PromptBuilder::new()
            .system_prompt("general_inquiry", "neutral", 0.0, &[])
            .user_message("hello")
            .build();

        assert!(messages[0].content.contains("Entities Detected: []"));
    }
}
