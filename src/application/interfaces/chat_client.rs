use async_trait::async_trait;

use crate::domain::{CompletionRequest, DomainError};

/// An interface for sending a single prompt to an LLM and receiving its text response.
///
/// Implementors encapsulate transport, serialization, and vendor-specific API
/// details. Every failure (transport, timeout, non-success status, malformed
/// body) is returned as [`DomainError::Completion`]; implementors never retry.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Run one completion and return the assistant's response text.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, DomainError>;

    /// Short provider name for logging.
    fn provider_name(&self) -> &str;
}
