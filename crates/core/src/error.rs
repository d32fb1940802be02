//! Shared error type

use thiserror::Error;

/// Errors surfaced by the agent's public interface.
///
/// Note that `process()` itself is infallible by design; these variants
/// cover the read-side operations and internal plumbing.
#[derive(Error, Debug)]
pub enum Error {
    /// LLM collaborator failure (recovered internally, logged only)
    #[error("LLM error: {0}")]
    Llm(String),

    /// Configuration problem
    #[error("Configuration error: {0}")]
    Config(String),

    /// Analytics requested before any message was processed
    #[error("No data available")]
    NoData,

    /// No conversation entries for the requested session
    #[error("Session not found: {0}")]
    SessionNotFound(String),

    /// Unexpected internal processing fault
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;
