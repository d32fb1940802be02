//! HTTP Endpoints
//!
//! REST API for the support agent.

use std::time::Duration;

use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use support_agent_core::{Error, Message, Role};
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::state::AppState;

/// Create the application router
pub fn create_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/api/chat", post(chat))
        .route("/api/analytics", get(analytics))
        .route("/api/health", get(health_check))
        .route("/api/conversations", get(get_conversations))
        .route("/api/session/:session_id", get(get_session_data))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Chat request
#[derive(Debug, Deserialize)]
struct ChatRequest {
    #[serde(default)]
    message: String,
    /// Prior turns supplied by the client
    #[serde(default)]
    context: Vec<ContextMessage>,
    session_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ContextMessage {
    role: Role,
    content: String,
}

/// Chat response: the agent reply plus the session id in effect, so a
/// client that sent none can keep using the minted one.
#[derive(Debug, Serialize)]
struct ChatEnvelope {
    #[serde(flatten)]
    reply: support_agent_agent::ChatReply,
    session_id: String,
}

fn error_body(message: &str) -> Json<serde_json::Value> {
    Json(serde_json::json!({ "error": message }))
}

/// Chat endpoint
async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> impl IntoResponse {
    let message = request.message.trim().to_string();
    if message.is_empty() {
        return (StatusCode::BAD_REQUEST, error_body("Message cannot be empty")).into_response();
    }

    let session_id = request
        .session_id
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let context: Vec<Message> = request
        .context
        .into_iter()
        .map(|m| Message {
            role: m.role,
            content: m.content,
        })
        .collect();

    let reply = state
        .agent
        .process(&message, &context, Some(session_id.clone()))
        .await;

    Json(ChatEnvelope { reply, session_id }).into_response()
}

/// Analytics endpoint
async fn analytics(State(state): State<AppState>) -> impl IntoResponse {
    match state.agent.store().analytics() {
        Ok(snapshot) => Json(serde_json::to_value(snapshot).unwrap_or_default()).into_response(),
        Err(Error::NoData) => error_body("No data available").into_response(),
        Err(err) => {
            tracing::error!(error = %err, "analytics failed");
            (StatusCode::INTERNAL_SERVER_ERROR, error_body("Internal server error"))
                .into_response()
        }
    }
}

/// Health check endpoint
async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    let store = state.agent.store();
    let avg_response_time = store
        .analytics()
        .map(|a| a.average_response_time)
        .unwrap_or(0.0);

    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "started_at": state.started_at.to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "features": {
            "nlp_processing": true,
            "sentiment_analysis": true,
            "entity_extraction": true,
            "intent_classification": true,
            "llm_integration": state.agent.llm_configured(),
        },
        "performance": {
            "response_time_avg": avg_response_time,
            "total_queries": store.query_count(),
        }
    }))
}

#[derive(Debug, Deserialize)]
struct ConversationsQuery {
    limit: Option<usize>,
}

/// Recent conversations, redacted: message and response text stay private.
async fn get_conversations(
    State(state): State<AppState>,
    Query(query): Query<ConversationsQuery>,
) -> Json<serde_json::Value> {
    let limit = query.limit.unwrap_or(50).min(100);
    let recent = state.agent.store().recent(limit);

    let conversations: Vec<serde_json::Value> = recent
        .entries
        .iter()
        .map(|entry| {
            serde_json::json!({
                "timestamp": entry.timestamp.to_rfc3339(),
                "intent": entry.intent,
                "sentiment": entry.sentiment,
                "response_time": entry.response_time,
                "query_id": entry.query_id,
                "entities_count": entry.entities.len(),
                "session_id": entry.session_id,
            })
        })
        .collect();

    Json(serde_json::json!({
        "conversations": conversations,
        "total": recent.total,
        "summary": {
            "total_sessions": recent.total_sessions,
            "avg_session_length": recent.avg_session_length,
        }
    }))
}

/// Per-session summary
async fn get_session_data(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    match state.agent.store().session(&session_id) {
        Ok(summary) => Json(serde_json::to_value(summary).unwrap_or_default()).into_response(),
        Err(Error::SessionNotFound(_)) => {
            (StatusCode::NOT_FOUND, error_body("Session not found")).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "session lookup failed");
            (StatusCode::INTERNAL_SERVER_ERROR, error_body("Internal server error"))
                .into_response()
        }
    }
}
