//! Bounded in-memory conversation store with on-demand analytics.
//!
//! A single mutex guards both the entry log and the query counter so
//! that ids are assigned gap-free in arrival order even under
//! concurrent callers. The log is FIFO-capped; the counter keeps
//! counting past evictions, so `total_queries` in analytics can exceed
//! `conversations_stored`.

use std::collections::{HashMap, HashSet, VecDeque};

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Serialize;
use support_agent_core::{ConversationEntry, Error, Result, SessionSummary};

/// Oldest entries are evicted once the log grows past this.
pub const MAX_STORED_CONVERSATIONS: usize = 1000;

/// Aggregated metrics recomputed from the log on every call.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsSnapshot {
    pub total_queries: u64,
    /// Mean processing time in seconds, over stored entries only
    pub average_response_time: f64,
    /// Same mean, rounded to whole milliseconds
    pub average_response_time_ms: f64,
    pub conversations_stored: usize,
    pub sentiment_distribution: HashMap<String, u64>,
    pub intent_distribution: HashMap<String, u64>,
    pub total_entities_extracted: usize,
    pub last_updated: DateTime<Utc>,
}

/// Recent-entries view with log-wide totals, for the conversations endpoint.
#[derive(Debug, Clone)]
pub struct RecentConversations {
    /// Last `limit` entries, oldest first
    pub entries: Vec<ConversationEntry>,
    /// Total entries currently stored
    pub total: usize,
    /// Distinct non-empty session ids across the whole log
    pub total_sessions: usize,
    /// Stored entries per distinct session
    pub avg_session_length: f64,
}

#[derive(Default)]
struct StoreInner {
    log: VecDeque<ConversationEntry>,
    query_count: u64,
}

/// Shared conversation log. Clone-free; wrap in `Arc` to share.
#[derive(Default)]
pub struct ConversationStore {
    inner: Mutex<StoreInner>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns the next query id to `entry`, appends it, and evicts the
    /// oldest entry if over capacity. Returns the assigned id.
    pub fn record(&self, mut entry: ConversationEntry) -> u64 {
        let mut inner = self.inner.lock();
        inner.query_count += 1;
        entry.query_id = inner.query_count;
        let id = entry.query_id;
        inner.log.push_back(entry);
        if inner.log.len() > MAX_STORED_CONVERSATIONS {
            inner.log.pop_front();
        }
        id
    }

    /// Current counter value. Does not advance it; degraded replies echo
    /// this without claiming an id.
    pub fn query_count(&self) -> u64 {
        self.inner.lock().query_count
    }

    pub fn len(&self) -> usize {
        self.inner.lock().log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().log.is_empty()
    }

    /// Recomputes analytics from the stored entries.
    pub fn analytics(&self) -> Result<AnalyticsSnapshot> {
        let inner = self.inner.lock();
        if inner.log.is_empty() {
            return Err(Error::NoData);
        }

        let stored = inner.log.len();
        let total_time: f64 = inner.log.iter().map(|e| e.response_time).sum();
        let mut sentiment_distribution: HashMap<String, u64> = HashMap::new();
        let mut intent_distribution: HashMap<String, u64> = HashMap::new();
        let mut total_entities_extracted = 0usize;
        for entry in &inner.log {
            *sentiment_distribution.entry(entry.sentiment.clone()).or_insert(0) += 1;
            *intent_distribution.entry(entry.intent.clone()).or_insert(0) += 1;
            total_entities_extracted += entry.entities.len();
        }

        let average_response_time = total_time / stored as f64;
        Ok(AnalyticsSnapshot {
            total_queries: inner.query_count,
            average_response_time,
            average_response_time_ms: (average_response_time * 1000.0).round(),
            conversations_stored: stored,
            sentiment_distribution,
            intent_distribution,
            total_entities_extracted,
            last_updated: Utc::now(),
        })
    }

    /// Last `limit` entries in log order plus session totals.
    pub fn recent(&self, limit: usize) -> RecentConversations {
        let inner = self.inner.lock();
        let total = inner.log.len();
        let skip = total.saturating_sub(limit);
        let entries: Vec<ConversationEntry> = inner.log.iter().skip(skip).cloned().collect();

        let sessions: HashSet<&str> = inner
            .log
            .iter()
            .filter_map(|e| e.session_id.as_deref())
            .collect();
        let total_sessions = sessions.len();
        let avg_session_length = total as f64 / total_sessions.max(1) as f64;

        RecentConversations {
            entries,
            total,
            total_sessions,
            avg_session_length,
        }
    }

    /// Aggregates all entries for one session id.
    pub fn session(&self, session_id: &str) -> Result<SessionSummary> {
        let inner = self.inner.lock();
        let mut conversations = 0usize;
        let mut start_time: Option<DateTime<Utc>> = None;
        let mut last_activity: Option<DateTime<Utc>> = None;
        let mut intents = Vec::new();
        let mut sentiments = Vec::new();

        for entry in &inner.log {
            if entry.session_id.as_deref() != Some(session_id) {
                continue;
            }
            conversations += 1;
            start_time = Some(match start_time {
                Some(t) if t <= entry.timestamp => t,
                _ => entry.timestamp,
            });
            last_activity = Some(match last_activity {
                Some(t) if t >= entry.timestamp => t,
                _ => entry.timestamp,
            });
            intents.push(entry.intent.clone());
            sentiments.push(entry.sentiment.clone());
        }

        match (start_time, last_activity) {
            (Some(start_time), Some(last_activity)) => Ok(SessionSummary {
                session_id: session_id.to_string(),
                conversations,
                start_time,
                last_activity,
                intents,
                sentiments,
            }),
            _ => Err(Error::SessionNotFound(session_id.to_string())),
        }
    }
}
