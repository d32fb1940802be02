//! Text preprocessing
//!
//! Trims, collapses whitespace, and expands a small set of chat
//! abbreviations. Output feeds every downstream component, so entity
//! positions are always offsets into the normalized string.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

static PLEASE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(?:pls|plz)\b").unwrap());
static THANKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(?:thx|tnx)\b").unwrap());
static YOU: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(?:u|ur)\b").unwrap());

/// Normalizes raw user messages before any other processing
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNormalizer;

impl TextNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Normalize a raw message.
    ///
    /// Steps, in order: trim, collapse whitespace runs to a single
    /// space, then word-boundary abbreviation expansion. Never fails;
    /// idempotent on its own output.
    pub fn normalize(&self, text: &str) -> String {
        let text = text.trim();
        let text = WHITESPACE.replace_all(text, " ");
        let text = PLEASE.replace_all(&text, "please");
        let text = THANKS.replace_all(&text, "thanks");
        let text = YOU.replace_all(&text, "you");
        text.into_owned()
    }
}
