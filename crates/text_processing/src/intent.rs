//! Intent classification
//!
//! An ordered table of keyword rules evaluated by substring containment
//! against the lowercased normalized text; the first matching rule wins.
//! Rule order carries the logic: several keyword lists overlap on
//! purpose ("refund" sits in both the return and billing lists; damage
//! words are checked ahead of generic product words), so reordering the
//! table changes behavior.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Support category assigned to a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    ReturnRefund,
    TechnicalSupport,
    Billing,
    ProductInfo,
    Complaint,
    Feedback,
    AccountManagement,
    GeneralInquiry,
    /// Assigned only by the degraded-response path, never by the rules
    Error,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::ReturnRefund => "return_refund",
            Intent::TechnicalSupport => "technical_support",
            Intent::Billing => "billing",
            Intent::ProductInfo => "product_info",
            Intent::Complaint => "complaint",
            Intent::Feedback => "feedback",
            Intent::AccountManagement => "account_management",
            Intent::GeneralInquiry => "general_inquiry",
            Intent::Error => "error",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const RETURN_REFUND_KEYWORDS: &[&str] = &[
    "return",
    "refund",
    "exchange",
    "wrong item",
    "wrong color",
    "wrong size",
    "not what i ordered",
    "send back",
    "ship back",
    "replace",
    "swap",
    "return policy",
    "refund policy",
];

const TECH_KEYWORDS: &[&str] = &[
    "error",
    "bug",
    "problem",
    "issue",
    "crash",
    "broken",
    "not working",
    "failed",
    "failure",
    "exception",
    "timeout",
    "slow",
    "performance",
    "lag",
    "freeze",
    "hang",
    "unresponsive",
];

// Overlaps with the return list ("refund") and the account list
// ("account"); resolved purely by rule order.
const BILLING_KEYWORDS: &[&str] = &[
    "bill",
    "payment",
    "charge",
    "cost",
    "price",
    "subscription",
    "refund",
    "invoice",
    "receipt",
    "billing",
    "account",
    "credit",
    "debit",
    "overcharge",
    "double charge",
];

// Checked before the product list so defect reports classify as
// return_refund, never product_info.
const DAMAGE_KEYWORDS: &[&str] = &[
    "damaged",
    "broken",
    "defective",
    "faulty",
    "not working",
    "problem",
    "issue",
    "damage",
    "destroyed",
    "torn",
    "ripped",
    "scratched",
    "cracked",
];

const PRODUCT_KEYWORDS: &[&str] = &[
    "product",
    "feature",
    "specification",
    "what is",
    "how to",
    "guide",
    "tutorial",
    "manual",
    "documentation",
    "capabilities",
    "functionality",
    "benefits",
    "comparison",
];

const COMPLAINT_KEYWORDS: &[&str] = &[
    "complaint",
    "unhappy",
    "dissatisfied",
    "angry",
    "frustrated",
    "bad",
    "terrible",
    "awful",
    "horrible",
    "disappointed",
    "upset",
    "annoyed",
    "irritated",
];

const FEEDBACK_KEYWORDS: &[&str] = &[
    "feedback",
    "suggest",
    "improve",
    "idea",
    "recommendation",
    "suggestion",
    "opinion",
    "thought",
    "review",
    "rating",
    "comment",
];

const ACCOUNT_KEYWORDS: &[&str] = &[
    "account",
    "profile",
    "settings",
    "preferences",
    "password",
    "login",
    "signin",
    "signup",
    "register",
    "create account",
    "delete account",
];

const GENERAL_KEYWORDS: &[&str] = &[
    "hello",
    "hi",
    "help",
    "support",
    "question",
    "info",
    "information",
    "assist",
    "assistance",
    "guide",
    "how",
    "what",
    "when",
    "where",
    "why",
];

/// The ordered rule table. First match wins.
const RULES: &[(&[&str], Intent)] = &[
    (RETURN_REFUND_KEYWORDS, Intent::ReturnRefund),
    (TECH_KEYWORDS, Intent::TechnicalSupport),
    (BILLING_KEYWORDS, Intent::Billing),
    (DAMAGE_KEYWORDS, Intent::ReturnRefund),
    (PRODUCT_KEYWORDS, Intent::ProductInfo),
    (COMPLAINT_KEYWORDS, Intent::Complaint),
    (FEEDBACK_KEYWORDS, Intent::Feedback),
    (ACCOUNT_KEYWORDS, Intent::AccountManagement),
    (GENERAL_KEYWORDS, Intent::GeneralInquiry),
];

/// Rule-based intent classifier
#[derive(Debug, Clone, Copy, Default)]
pub struct IntentClassifier;

impl IntentClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify normalized text into exactly one intent.
    ///
    /// Matching is substring containment (not word-boundary) on the
    /// lowercased text. Defaults to `general_inquiry` when no rule
    /// matches.
    pub fn classify(&self, text: &str) -> Intent {
        let lower = text.to_lowercase();

        for (keywords, intent) in RULES {
            if keywords.iter().any(|k| lower.contains(k)) {
                tracing::debug!(intent = intent.as_str(), "matched intent rule");
                return *intent;
            }
        }

        Intent::GeneralInquiry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_return_refund() {
        let c = IntentClassifier::new();
        assert_eq!(c.classify("I want to return this"), Intent::ReturnRefund);
        assert_eq!(c.classify("please send back my money"), Intent::ReturnRefund);
        assert_eq!(c.classify("I got the wrong item"), Intent::ReturnRefund);
    }

    #[test]
    fn test_refund_beats_billing() {
        let c = IntentClassifier::new();
        // "refund" is in both tables; the return rule is evaluated first.
        assert_eq!(
            c.classify("I need a refund for this payment"),
            Intent::ReturnRefund
        );
    }

    #[test]
    fn test_damage_beats_product_info() {
        let c = IntentClassifier::new();
        assert_eq!(
            c.classify("the product arrived damaged"),
            Intent::ReturnRefund
        );
        assert_eq!(c.classify("my item is scratched"), Intent::ReturnRefund);
    }

    #[test]
    fn test_technical_support() {
        let c = IntentClassifier::new();
        assert_eq!(c.classify("the app keeps crashing"), Intent::TechnicalSupport);
        assert_eq!(c.classify("I see an error"), Intent::TechnicalSupport);
    }

    #[test]
    fn test_billing() {
        let c = IntentClassifier::new();
        assert_eq!(c.classify("question about my bill"), Intent::Billing);
        assert_eq!(c.classify("I was double charged"), Intent::Billing);
    }

    #[test]
    fn test_product_info() {
        let c = IntentClassifier::new();
        assert_eq!(c.classify("what are the product specifications"), Intent::ProductInfo);
    }

    #[test]
    fn test_account_management() {
        let c = IntentClassifier::new();
        assert_eq!(c.classify("reset my password"), Intent::AccountManagement);
    }

    #[test]
    fn test_feedback() {
        let c = IntentClassifier::new();
        assert_eq!(c.classify("I have a suggestion to make"), Intent::Feedback);
    }

    #[test]
    fn test_general_default() {
        let c = IntentClassifier::new();
        assert_eq!(c.classify("hello there"), Intent::GeneralInquiry);
        assert_eq!(c.classify(""), Intent::GeneralInquiry);
        assert_eq!(c.classify("xyzzy"), Intent::GeneralInquiry);
    }

    #[test]
    fn test_substring_containment() {
        let c = IntentClassifier::new();
        // Containment, not word-boundary: "subscription" contains no
        // return keyword but does contain "subscription" from billing.
        assert_eq!(c.classify("my subscription"), Intent::Billing);
    }

    #[test]
    fn test_intent_serde() {
        let json = serde_json::to_string(&Intent::ReturnRefund).unwrap();
        assert_eq!(json, r#""return_refund""#);
    }
}
