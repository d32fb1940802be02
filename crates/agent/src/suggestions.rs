//! Canned follow-up suggestions attached to every reply.

use support_agent_text_processing::{Intent, SentimentLabel};

/// Up to three contextual suggestions for the given intent, with a
/// reassurance line appended on negative sentiment. The negative-sentiment
/// line only survives truncation when the intent contributed no
/// suggestions of its own.
pub fn generate_suggestions(intent: Intent, sentiment: SentimentLabel) -> Vec<String> {
    let mut suggestions: Vec<String> = match intent {
        Intent::ReturnRefund => vec![
            "Please provide your order number and reason for return/refund".to_string(),
            "Check your order history for return/refund policies".to_string(),
            "Contact our customer service for assistance".to_string(),
        ],
        Intent::TechnicalSupport => vec![
            "Provide error messages or screenshots".to_string(),
            "Describe what you were doing when the issue occurred".to_string(),
            "Check if the issue happens on different devices".to_string(),
        ],
        Intent::Billing => vec![
            "Have your account number ready".to_string(),
            "Check your recent invoices".to_string(),
            "Verify payment method details".to_string(),
        ],
        Intent::ProductInfo => vec![
            "Ask about specific features".to_string(),
            "Request product comparisons".to_string(),
            "Get pricing information".to_string(),
        ],
        _ => Vec::new(),
    };

    if sentiment == SentimentLabel::Negative {
        suggestions.push("I'm here to help resolve this issue".to_string());
    }

    suggestions.truncate(3);
    suggestions
}
