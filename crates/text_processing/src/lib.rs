//! Text understanding pipeline for customer-support triage
//!
//! Pure, deterministic heuristics with no shared mutable state:
//! - Normalizer: whitespace cleanup and chat abbreviation expansion
//! - Entity extraction: pattern matching over 8 support-relevant categories
//! - Sentiment scoring: keyword lexicons with per-category ratios
//! - Intent classification: ordered keyword rules, first match wins
//!
//! All downstream positions and matches are relative to the normalized
//! text produced by [`normalizer::TextNormalizer`], not the raw input.

pub mod entities;
pub mod intent;
pub mod normalizer;
pub mod sentiment;

pub use entities::{Entity, EntityExtractor, EntityType};
pub use intent::{Intent, IntentClassifier};
pub use normalizer::TextNormalizer;
pub use sentiment::{SentimentLabel, SentimentResult, SentimentScorer};
