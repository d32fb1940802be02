//! Capability traits

use async_trait::async_trait;

use crate::message::Message;
use crate::Result;

/// External chat-completion collaborator
///
/// The agent depends only on this interface; transport, vendor, and
/// credentials are the backend's concern. Any non-success outcome is
/// treated identically by the caller: the fallback responder takes over
/// and the error is never surfaced to the end user.
///
/// # Example
///
/// ```ignore
/// let llm: Arc<dyn ChatBackend> = Arc::new(OpenAiBackend::new(config)?);
/// let reply = llm.complete(&messages).await?;
/// ```
#[async_trait]
pub trait ChatBackend: Send + Sync + 'static {
    /// Generate a completion for the given messages.
    ///
    /// Implementations must apply a bounded timeout; callers treat
    /// timeout and error uniformly as "unavailable".
    async fn complete(&self, messages: &[Message]) -> Result<String>;

    /// Check whether the backend can currently serve requests.
    async fn is_available(&self) -> bool;

    /// Model name for logging.
    fn model_name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockBackend;

    #[async_trait]
    impl ChatBackend for MockBackend {
        async fn complete(&self, _messages: &[Message]) -> Result<String> {
            Ok("Mock response".to_string())
        }

        async fn is_available(&self) -> bool {
            true
        }

        fn model_name(&self) -> &str {
            "mock-llm"
        }
    }

    #[tokio::test]
    async fn test_mock_backend() {
        let llm = MockBackend;
        assert!(llm.is_available().await);
        assert_eq!(llm.model_name(), "mock-llm");

        let reply = llm.complete(&[Message::user("Hello")]).await.unwrap();
        assert_eq!(reply, "Mock response");
    }
}
