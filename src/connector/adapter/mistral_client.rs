use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use crate::application::{ApiKey, CompletionClient};
use crate::domain::{CompletionRequest, CompletionResponse, DomainError};

/// Default target: the hosted Mistral API.
pub const DEFAULT_BASE_URL: &str = "https://api.mistral.ai/v1";
const COMPLETIONS_PATH: &str = "/chat/completions";

/// HTTP client for the Mistral chat-completion API (and compatible endpoints).
///
/// Implements [`CompletionClient`] so the feature pipeline stays decoupled from
/// transport and serialization details. One call is one `POST`; the body is
/// buffered in full and there are no retries at this level.
///
/// Configuration is resolved by the caller; the relevant environment variables are:
///
/// | Variable           | Default                     | Purpose                    |
/// |--------------------|-----------------------------|----------------------------|
/// | `MISTRAL_BASE_URL` | `https://api.mistral.ai/v1` | API root                   |
/// | `MISTRAL_MODEL`    | `mistral-tiny`              | Chat model                 |
/// | `MISTRAL_API_KEY`  | none                        | Bearer credential          |
pub struct MistralClient {
    client: reqwest::Client,
    /// Full endpoint URL (base + COMPLETIONS_PATH).
    url: String,
}

impl MistralClient {
    /// Uses the transport's default timeouts.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, None)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Option<Duration>) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), COMPLETIONS_PATH);

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Self {
            client: builder.build().unwrap_or_default(),
            url,
        }
    }

    /// Base URL from `MISTRAL_BASE_URL`, or the hosted default.
    pub fn configured_base_url() -> String {
        std::env::var("MISTRAL_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CompletionClient for MistralClient {
    async fn complete(
        &self,
        api_key: &ApiKey,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, DomainError> {
        debug!(
            "MistralClient: POST {} (model {}, max_tokens {})",
            self.url,
            request.model(),
            request.max_tokens()
        );

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(api_key.expose())
            .json(request)
            .send()
            .await
            .map_err(|e| DomainError::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or_default();
            let text = response.text().await.unwrap_or_default();
            let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
            warn!("MistralClient: API returned {status}: {body}");
            return Err(DomainError::upstream(status.as_u16(), reason, body));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| DomainError::transport(format!("failed to read response body: {e}")))?;

        serde_json::from_slice(&bytes).map_err(|e| {
            warn!(
                "MistralClient: undecodable response body: {}",
                String::from_utf8_lossy(&bytes)
            );
            DomainError::shape(format!("failed to decode response: {e}"))
        })
    }

    fn provider_name(&self) -> &str {
        "mistral"
    }
}
