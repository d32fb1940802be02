//! Application State
//!
//! Shared state across all handlers.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use support_agent_agent::SupportAgent;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub agent: Arc<SupportAgent>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(agent: SupportAgent) -> Self {
        Self {
            agent: Arc::new(agent),
            started_at: Utc::now(),
        }
    }
}
