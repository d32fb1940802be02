//! HTTP server for the support agent
//!
//! Exposes the chat pipeline and its analytics over a small REST API.

pub mod http;
pub mod state;

pub use http::create_router;
pub use state::AppState;
