//! Entity extraction
//!
//! Scans normalized text against a fixed set of support-relevant
//! patterns (email, phone, order number, etc.). Every match is reported
//! with a fixed pattern-based confidence; overlapping categories are
//! intentionally not deduplicated (a digit run can be both an account
//! number and part of a phone number).

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed confidence for pattern-based matches
pub const PATTERN_CONFIDENCE: f32 = 0.8;

/// Entity categories recognized by the extractor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Email,
    Phone,
    OrderNumber,
    AccountNumber,
    Url,
    ProductName,
    ErrorCode,
    VersionNumber,
}

impl EntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Email => "email",
            EntityType::Phone => "phone",
            EntityType::OrderNumber => "order_number",
            EntityType::AccountNumber => "account_number",
            EntityType::Url => "url",
            EntityType::ProductName => "product_name",
            EntityType::ErrorCode => "error_code",
            EntityType::VersionNumber => "version_number",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One pattern match in the normalized text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Matched text, verbatim
    pub text: String,
    /// Category this match was found under
    pub entity_type: EntityType,
    /// Always [`PATTERN_CONFIDENCE`] for pattern matches
    pub confidence: f32,
    /// Byte offset of the match start in the normalized text
    pub start_pos: usize,
    /// Byte offset one past the match end
    pub end_pos: usize,
}

/// Per-category compiled patterns, in declaration order.
///
/// All patterns are case-insensitive. Categories are matched
/// independently; output order across categories only affects display
/// grouping, never correctness.
static ENTITY_PATTERNS: Lazy<Vec<(EntityType, Regex)>> = Lazy::new(|| {
    vec![
        (
            EntityType::Email,
            Regex::new(r"(?i)\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap(),
        ),
        (
            EntityType::Phone,
            Regex::new(r"(?i)\b\d{3}[-.]?\d{3}[-.]?\d{4}\b").unwrap(),
        ),
        (
            EntityType::OrderNumber,
            Regex::new(r"(?i)\b[A-Z]{2,3}\d{6,8}\b").unwrap(),
        ),
        (
            EntityType::AccountNumber,
            Regex::new(r"(?i)\b\d{8,12}\b").unwrap(),
        ),
        (
            EntityType::Url,
            Regex::new(r"(?i)https?://(?:[-\w.])+(?:[:\d]+)?(?:/(?:[\w/_.])*(?:\?(?:[\w&=%.])*)?(?:#(?:[\w.])*)?)?")
                .unwrap(),
        ),
        (
            EntityType::ProductName,
            Regex::new(r"(?i)\b(?:product|service|item|subscription|plan)\s+([A-Za-z0-9\s]+)")
                .unwrap(),
        ),
        (
            EntityType::ErrorCode,
            Regex::new(r"(?i)\b(?:error|error code|code)\s*[A-Z0-9]{3,8}\b").unwrap(),
        ),
        (
            EntityType::VersionNumber,
            Regex::new(r"(?i)\bv?\d+\.\d+(?:\.\d+)?\b").unwrap(),
        ),
    ]
});

/// Pattern-based entity extractor
#[derive(Debug, Clone, Copy, Default)]
pub struct EntityExtractor;

impl EntityExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract all entities from normalized text.
    ///
    /// Finds every non-overlapping match per category. The same
    /// substring may appear under multiple categories.
    pub fn extract(&self, text: &str) -> Vec<Entity> {
        let mut entities = Vec::new();

        for (entity_type, pattern) in ENTITY_PATTERNS.iter() {
            for m in pattern.find_iter(text) {
                entities.push(Entity {
                    text: m.as_str().to_string(),
                    entity_type: *entity_type,
                    confidence: PATTERN_CONFIDENCE,
                    start_pos: m.start(),
                    end_pos: m.end(),
                });
            }
        }

        if !entities.is_empty() {
            tracing::debug!(count = entities.len(), "extracted entities");
        }
        entities
    }

    /// Extract only entities of one category.
    pub fn extract_type(&self, text: &str, entity_type: EntityType) -> Vec<Entity> {
        self.extract(text)
            .into_iter()
            .filter(|e| e.entity_type == entity_type)
            .collect()
    }
}
