//! Template-based responder used when no language model is reachable.
//!
//! Rules are evaluated top to bottom and the first match wins, so the
//! ordering below is load-bearing: damage phrasing is answered before
//! generic product questions, greetings before everything else.
//! Matching is raw substring containment on the lowercased message,
//! which deliberately lets short tokens match inside longer words
//! ("hi" inside "shirt").

use support_agent_text_processing::{Intent, SentimentLabel};

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// Deterministic response generator keyed on message keywords, classified
/// intent, and sentiment.
#[derive(Debug, Default, Clone)]
pub struct FallbackResponder;

impl FallbackResponder {
    pub fn new() -> Self {
        Self
    }

    pub fn respond(&self, message: &str, intent: Intent, sentiment: SentimentLabel) -> String {
        let m = message.to_lowercase();

        // Greetings, with topic-aware sub-branches.
        if m.contains("hi") || m.contains("hello") {
            if m.contains("shirt") || m.contains("size") {
                return "Hello! I see you mentioned a shirt size issue. Let me help you with that specifically. What size did you order and what size did you receive? I'll get this sorted out right away.".to_string();
            }
            if m.contains("problem") || m.contains("issue") {
                return "Hello! I understand you're experiencing a problem. Let me help you resolve it. Can you tell me more about what's happening?".to_string();
            }
            return "Hello! I'm here to help you with any questions or concerns. How can I assist you today?".to_string();
        }

        // Shirt sizing.
        if m.contains("shirt") && m.contains("size") {
            if m.contains("small") {
                return "I see you're having an issue with a small shirt size. Let me help you get the right size:\n\n1. What size did you actually order?\n2. What size did you receive?\n3. What's your order number?\n\nI can help you get the correct size or process an exchange immediately.".to_string();
            }
            if m.contains("big") || m.contains("large") {
                return "I understand the shirt you received is too big. Let me help you get the right size:\n\n1. What size did you order?\n2. What size did you receive?\n3. What's your order number?\n\nI'll process a size exchange for you right away.".to_string();
            }
            return "I see you're having a shirt sizing issue. To help you quickly, I need:\n\n1. Your order number\n2. What size you ordered vs. received\n3. Whether you want an exchange or refund\n\nWhat's your order number?".to_string();
        }

        // Technical trouble.
        if contains_any(
            &m,
            &["app", "crash", "not working", "error", "bug", "problem", "crashing", "crashed"],
        ) {
            if m.contains("app") && contains_any(&m, &["crash", "crashing", "crashed"]) {
                return "I understand your app is crashing. Let me help troubleshoot this specific issue:\n\n1. What device are you using? (iOS/Android/Desktop)\n2. What's your app version?\n3. What were you doing when it crashed?\n4. Does this happen every time?\n\nThis will help me provide the right solution or escalate to our technical team.".to_string();
            }
            if m.contains("not working") {
                return "I see something isn't working for you. To help fix this quickly, I need to know:\n\n1. What exactly isn't working?\n2. What were you trying to do?\n3. What error messages do you see?\n4. When did this start happening?\n\nLet me get this resolved for you right away.".to_string();
            }
            return "I understand you're experiencing a technical issue. Our support team will help you resolve this. Please provide:\n\n1. What specific problem you're facing\n2. Any error messages you see\n3. What you were doing when it happened\n\nI'll make sure this gets resolved quickly.".to_string();
        }

        // Billing and payments.
        if contains_any(&m, &["bill", "payment", "charge", "cost", "price"]) {
            if m.contains("bill") {
                return "I can help with your billing question. To assist you effectively, I need:\n\n1. Your account number or email\n2. What specific billing issue you're experiencing\n3. When this occurred\n\nI'll look into this right away and get it resolved for you.".to_string();
            }
            if m.contains("payment") {
                return "I understand you have a payment question. Let me help you with that:\n\n1. What payment method are you using?\n2. What specific payment issue are you facing?\n3. When did this happen?\n\nI'll get this sorted out for you immediately.".to_string();
            }
            return "I can help with your billing/payment question. To assist you effectively, I need:\n\n1. Your account number or email\n2. What specific issue you're experiencing\n3. When this occurred\n\nI'll look into this right away.".to_string();
        }

        // Damaged goods.
        if contains_any(
            &m,
            &[
                "damaged",
                "broken",
                "defective",
                "faulty",
                "destroyed",
                "torn",
                "ripped",
                "scratched",
                "cracked",
            ],
        ) {
            if m.contains("product") {
                return "I'm sorry to hear your product arrived damaged! This is definitely not acceptable. Let me help you get this resolved immediately:\n\n1. Please provide your order number\n2. Describe the damage you see\n3. If possible, take photos of the damage\n4. I'll process a replacement or refund right away\n\nWhat's your order number? I want to make this right for you.".to_string();
            }
            return "I understand you have a damaged item. This is something we need to fix immediately. Please provide:\n\n1. Your order number\n2. Description of the damage\n3. When you received it\n4. I'll process a replacement or refund right away\n\nWhat's your order number?".to_string();
        }

        // Returns and refunds.
        if contains_any(&m, &["return", "refund", "exchange", "wrong"]) {
            if m.contains("wrong") && (m.contains("color") || m.contains("item")) {
                return "I see you received the wrong item/color. This is definitely something we need to fix right away. Please provide:\n\n1. Your order number\n2. What you ordered vs. what you received\n3. Any photos if possible\n\nI'll process an immediate replacement and return label for the incorrect item.".to_string();
            }
            if m.contains("shirt") || m.contains("clothing") {
                return "I understand you want to return the shirt/clothing you received. Here's how to proceed:\n\n1. Please provide your order number\n2. Explain the reason for return (wrong color, size, etc.)\n3. I'll generate a return label for you\n4. You'll receive a refund within 5-7 business days\n\nWhat's your order number?".to_string();
            }
            return "I can help you with your return/refund request. To process this quickly, I need:\n\n1. Your order number\n2. Reason for return\n3. Whether you want a refund or exchange\n\nWhat's your order number?".to_string();
        }

        // Product questions, unless the message is really about damage or a return.
        if contains_any(&m, &["product", "feature", "what is", "how to"]) {
            let damage_or_return = contains_any(
                &m,
                &["damaged", "broken", "defective", "faulty", "return", "refund", "exchange"],
            );
            if !damage_or_return {
                if m.contains("what is") {
                    return "I'd be happy to explain what you're asking about! To give you the most helpful information, could you specify:\n\n1. Which product or feature you're interested in?\n2. What specific details you need?\n3. Are you looking for pricing, features, or how-to instructions?\n\nLet me know what would be most helpful!".to_string();
                }
                if m.contains("how to") {
                    return "I'd be happy to show you how to do that! To provide the right guidance, I need to know:\n\n1. What specific task you want to accomplish?\n2. Which product or feature you're using?\n3. What step are you currently stuck on?\n\nI'll give you step-by-step instructions!".to_string();
                }
                return "I'd be happy to provide product information! What specific details would you like to know?\n\n- Product features and specifications\n- Pricing and packages\n- Comparison with other products\n- How to use specific features\n\nWhat would be most helpful for you?".to_string();
            }
        }

        // Account access.
        if contains_any(&m, &["account", "password", "login", "signin", "signup"]) {
            if m.contains("password") {
                return "I can help you with your password issue. To assist you quickly, I need to know:\n\n1. Are you trying to reset your password?\n2. Are you having trouble logging in?\n3. What's your email address?\n\nI'll help you get back into your account right away.".to_string();
            }
            if m.contains("login") || m.contains("signin") {
                return "I understand you're having trouble logging in. Let me help you with that:\n\n1. What happens when you try to log in?\n2. Do you see any error messages?\n3. Are you using the correct email?\n\nI'll get you logged in quickly.".to_string();
            }
            return "I can help you with account-related questions. What specific account issue are you experiencing?\n\n\u{2022} Password reset\n\u{2022} Profile updates\n\u{2022} Account settings\n\u{2022} Login issues\n\u{2022} Account creation\n\nLet me know what you need help with!".to_string();
        }

        // Order history.
        if contains_any(&m, &["past order", "previous order", "order history"]) {
            return "I'd be happy to help you with your past order! To assist you effectively, I need:\n\n1. Your order number or email address\n2. What specific information you need about the order\n3. When the order was placed\n\nWhat would you like to know about your order?".to_string();
        }

        if m.contains("help") {
            if m.contains("technical") {
                return "I'm here to help with your technical issue! To assist you effectively, I need:\n\n1. What specific technical problem are you facing?\n2. What device/software are you using?\n3. What error messages do you see?\n\nLet me get this resolved for you quickly.".to_string();
            }
            return "I'm here to help! I can assist you with:\n\n\u{2022} Technical support and troubleshooting\n\u{2022} Billing and payment questions\n\u{2022} Product information and features\n\u{2022} Returns and refunds\n\u{2022} Account management\n\nWhat specific help do you need today?".to_string();
        }

        if m.contains("question") || m.contains("ask") {
            return "I'm here to answer your questions! Feel free to ask me about:\n\n\u{2022} Our products and services\n\u{2022} Technical support\n\u{2022} Billing and payments\n\u{2022} Returns and refunds\n\u{2022} Account management\n\nWhat would you like to know?".to_string();
        }

        if contains_any(&m, &["complaint", "unhappy", "dissatisfied", "angry", "frustrated"]) {
            return "I'm sorry to hear about your experience. I want to help resolve this issue and ensure it doesn't happen again. Could you please provide more details about what happened? I'm here to make this right for you.".to_string();
        }

        if contains_any(&m, &["feedback", "suggest", "improve", "idea"]) {
            return "Thank you for your feedback! We value your input and use it to improve our services. Could you please elaborate on your suggestions? I'd love to hear your ideas for making our service better.".to_string();
        }

        // Intent-keyed responses when no keyword rule applied.
        match intent {
            Intent::ReturnRefund => {
                return "I understand you want to return or request a refund. Please provide your order number and the reason for your request. I'll help you with the process.".to_string();
            }
            Intent::TechnicalSupport => {
                return "I understand you're experiencing a technical issue. Our support team will be happy to help you resolve this. Please provide more details about the problem, including any error messages you're seeing.".to_string();
            }
            Intent::Billing => {
                return "I can help you with billing questions. Could you please provide your account number or describe the specific billing issue you're experiencing? I'll make sure to get this resolved for you.".to_string();
            }
            Intent::ProductInfo => {
                return "I'd be happy to provide information about our products. What specific details would you like to know? I can help with features, pricing, or comparisons.".to_string();
            }
            Intent::Complaint => {
                return "I'm sorry to hear about your experience. I want to help resolve this issue and ensure it doesn't happen again. Could you please provide more details about what happened?".to_string();
            }
            Intent::Feedback => {
                return "Thank you for your feedback! We value your input and use it to improve our services. Could you please elaborate on your suggestions?".to_string();
            }
            Intent::AccountManagement => {
                return "I can help you with account-related questions. What specific account issue are you experiencing? I'll guide you through the process.".to_string();
            }
            Intent::Error => {
                return "I apologize for the technical difficulties. Please try again in a moment, or contact our support team if the issue persists.".to_string();
            }
            Intent::GeneralInquiry => {}
        }

        // Sentiment-aware catch-all.
        let base =
            "Hello! I'm here to help you with any questions or concerns. How can I assist you today?";
        match sentiment {
            SentimentLabel::Negative => format!(
                "I understand this is frustrating and I want to help resolve it quickly. {base}"
            ),
            SentimentLabel::Positive => format!("I'm glad I can help! {base}"),
            SentimentLabel::Neutral => base.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn respond(message: &str, intent: Intent, sentiment: SentimentLabel) -> String {
        FallbackResponder::new().respond(message, intent, sentiment)
    }

    #[test]
    fn greeting_with_size_topic_routes_to_sizing() {
        let r = respond("hi, my shirt is the wrong size", Intent::ReturnRefund, SentimentLabel::Neutral);
        assert!(r.contains("shirt size issue"));
    }

    #[test]
    fn shirt_rule_matches_via_substring_hi_in_shirt() {
        // "shirt" contains "hi", so the greeting branch fires first.
        let r = respond("the shirt size is too small", Intent::ReturnRefund, SentimentLabel::Neutral);
        assert!(r.contains("shirt size issue"));
    }

    #[test]
    fn small_shirt_without_greeting_token() {
        let r = respond("order on your store: wrong small tee, need new size", Intent::ReturnRefund, SentimentLabel::Neutral);
        // No "hi"/"hello" substring and no "shirt", falls to return rule via "wrong".
        assert!(r.contains("return/refund request") || r.contains("wrong item/color"));
    }

    #[test]
    fn app_crash_sub_branch() {
        let r = respond("your app keeps crashing on my pad", Intent::TechnicalSupport, SentimentLabel::Negative);
        assert!(r.contains("app is crashing"));
    }

    #[test]
    fn damage_outranks_product_info() {
        let r = respond("my product arrived broken", Intent::ProductInfo, SentimentLabel::Negative);
        assert!(r.contains("arrived damaged"));
    }

    #[test]
    fn intent_keyed_response_when_no_keyword_matched() {
        let r = respond("refund my order", Intent::ReturnRefund, SentimentLabel::Neutral);
        // "refund" is a keyword, so exercise with a keyword-free message instead.
        assert!(r.contains("return/refund"));
        let r = respond("nothing matches these words", Intent::Billing, SentimentLabel::Neutral);
        assert!(r.contains("billing questions"));
    }

    #[test]
    fn negative_sentiment_prefixes_catch_all() {
        let r = respond("zzz", Intent::GeneralInquiry, SentimentLabel::Negative);
        assert!(r.starts_with("I understand this is frustrating"));
    }

    #[test]
    fn positive_sentiment_prefixes_catch_all() {
        let r = respond("zzz", Intent::GeneralInquiry, SentimentLabel::Positive);
        assert!(r.starts_with("I'm glad I can help!"));
    }

    #[test]
    fn neutral_catch_all_is_plain_greeting() {
        let r = respond("zzz", Intent::GeneralInquiry, SentimentLabel::Neutral);
        assert_eq!(
            r,
            "Hello! I'm here to help you with any questions or concerns. How can I assist you today?"
        );
    }
}
