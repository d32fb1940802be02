//! Core traits and types for the support agent
//!
//! This crate provides foundational types used across all other crates:
//! - The `ChatBackend` trait for pluggable LLM collaborators
//! - Chat message types (role/content pairs)
//! - Conversation record types shared by the store and the HTTP layer
//! - Error types

pub mod conversation;
pub mod error;
pub mod message;
pub mod traits;

pub use conversation::{ConversationEntry, EntityMention, SessionSummary};
pub use error::{Error, Result};
pub use message::{Message, Role};
pub use traits::ChatBackend;
