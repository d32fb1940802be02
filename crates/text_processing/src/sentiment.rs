//! Keyword-based sentiment scoring
//!
//! Tokenizes on whitespace only (punctuation kept), lowercases, and
//! counts exact membership against three fixed lexicons. Per-category
//! scores are hit-count over total token count, so they need not sum
//! to 1. Ties, including the all-zero case, resolve to neutral.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

const POSITIVE_WORDS: &[&str] = &[
    "great",
    "excellent",
    "amazing",
    "love",
    "perfect",
    "wonderful",
    "fantastic",
    "awesome",
    "good",
    "helpful",
];

const NEGATIVE_WORDS: &[&str] = &[
    "terrible",
    "awful",
    "horrible",
    "hate",
    "worst",
    "disappointed",
    "frustrated",
    "angry",
    "bad",
    "poor",
];

const NEUTRAL_WORDS: &[&str] = &[
    "okay", "fine", "alright", "normal", "standard", "usual", "regular",
];

/// Coarse emotional-tone label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scoring result
///
/// `confidence` equals the score of `label`. `scores` is empty only for
/// the zero-token special case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub label: SentimentLabel,
    pub confidence: f32,
    pub scores: HashMap<SentimentLabel, f32>,
}

impl SentimentResult {
    /// Defined result for input with zero tokens
    pub fn empty() -> Self {
        Self {
            label: SentimentLabel::Neutral,
            confidence: 0.5,
            scores: HashMap::new(),
        }
    }
}

/// Lexicon-based sentiment scorer
#[derive(Debug, Clone, Copy, Default)]
pub struct SentimentScorer;

impl SentimentScorer {
    pub fn new() -> Self {
        Self
    }

    /// Score the normalized text.
    pub fn analyze(&self, text: &str) -> SentimentResult {
        let lower = text.to_lowercase();
        let tokens: Vec<&str> = lower.split_whitespace().collect();

        if tokens.is_empty() {
            return SentimentResult::empty();
        }

        let total = tokens.len() as f32;
        let hits = |lexicon: &[&str]| -> f32 {
            tokens.iter().filter(|t| lexicon.contains(t)).count() as f32
        };

        let positive = hits(POSITIVE_WORDS) / total;
        let negative = hits(NEGATIVE_WORDS) / total;
        let neutral = hits(NEUTRAL_WORDS) / total;

        // Strictly-greatest wins; any tie falls through to neutral.
        let (label, confidence) = if positive > negative && positive > neutral {
            (SentimentLabel::Positive, positive)
        } else if negative > positive && negative > neutral {
            (SentimentLabel::Negative, negative)
        } else {
            (SentimentLabel::Neutral, neutral)
        };

        let mut scores = HashMap::new();
        scores.insert(SentimentLabel::Positive, positive);
        scores.insert(SentimentLabel::Negative, negative);
        scores.insert(SentimentLabel::Neutral, neutral);

        SentimentResult {
            label,
            confidence,
            scores,
        }
    }
}
