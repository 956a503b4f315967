use async_trait::async_trait;

use crate::domain::{CompletionRequest, CompletionResponse, DomainError};

/// API credential sent with every completion call.
///
/// `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Returns `None` for an empty or whitespace-only key, which counts as missing.
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            None
        } else {
            Some(Self(key))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// An interface for sending one chat-completion request and receiving the decoded response.
///
/// Implementors encapsulate transport, serialization, and vendor-specific API
/// details. Consumers (e.g. [`crate::application::RunFeatureUseCase`]) remain
/// decoupled from any particular provider or HTTP client library.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Perform exactly one request/response exchange.
    ///
    /// Non-2xx statuses map to [`DomainError::UpstreamError`], network failures to
    /// [`DomainError::TransportError`], undecodable bodies to [`DomainError::ShapeError`].
    async fn complete(
        &self,
        api_key: &ApiKey,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, DomainError>;

    /// Name used in logs.
    fn provider_name(&self) -> &str;
}
