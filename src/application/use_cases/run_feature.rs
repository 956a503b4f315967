use std::sync::Arc;
use std::time::Instant;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::application::{ApiKey, CompletionClient, Feature, RetryPolicy};
use crate::domain::{CompletionRequest, CompletionResponse, DomainError, FeatureResult};

/// Default chat model.
pub const DEFAULT_MODEL: &str = "mistral-tiny";

/// Runs any [`Feature`]: credential check, prompt, one completion call, extraction.
///
/// Every failure is caught here and flattened into [`FeatureResult::Failure`]
/// carrying the error's message, so callers get the same result shape from
/// every feature.
pub struct RunFeatureUseCase {
    client: Arc<dyn CompletionClient>,
    api_key: Option<ApiKey>,
    model: String,
    retry_policy: RetryPolicy,
}

impl RunFeatureUseCase {
    pub fn new(
        client: Arc<dyn CompletionClient>,
        api_key: Option<ApiKey>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_key,
            model: model.into(),
            retry_policy: RetryPolicy::none(),
        }
    }

    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn execute<F: Feature>(&self, feature: &F) -> FeatureResult<F::Output> {
        self.execute_with_cancel(feature, &CancellationToken::new())
            .await
    }

    /// Like [`Self::execute`], but abandons the in-flight call once `cancel` fires.
    pub async fn execute_with_cancel<F: Feature>(
        &self,
        feature: &F,
        cancel: &CancellationToken,
    ) -> FeatureResult<F::Output> {
        let request_id = Uuid::new_v4();
        let start_time = Instant::now();
        info!("Running {} (request {})", feature.name(), request_id);

        let result = self.run(feature, cancel).await;

        let elapsed = start_time.elapsed().as_secs_f64();
        match &result {
            Ok(_) => info!(
                "{} completed in {:.2}s (request {})",
                feature.name(),
                elapsed,
                request_id
            ),
            Err(e) if e.is_cancelled() => info!(
                "{} cancelled after {:.2}s (request {})",
                feature.name(),
                elapsed,
                request_id
            ),
            Err(e) => warn!(
                "{} failed after {:.2}s (request {}): {}",
                feature.name(),
                elapsed,
                request_id,
                e
            ),
        }

        result.into()
    }

    async fn run<F: Feature>(
        &self,
        feature: &F,
        cancel: &CancellationToken,
    ) -> Result<F::Output, DomainError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(DomainError::missing_credential)?;

        let prompt = feature.build_prompt()?;
        debug!("{} system prompt: {}", feature.name(), prompt.system());
        debug!("{} user prompt: {}", feature.name(), prompt.user());

        let sampling = feature.sampling();
        let request = CompletionRequest::new(
            self.model.as_str(),
            prompt.into_messages(),
            sampling.temperature,
            sampling.max_tokens,
        )?;

        let response = self.complete_with_retry(api_key, &request, cancel).await?;
        if let Some(usage) = response.usage {
            debug!(
                "{} used {} prompt + {} completion tokens",
                feature.name(),
                usage.prompt_tokens,
                usage.completion_tokens
            );
        }

        let text = response.message_text().map_err(|e| {
            warn!("Unexpected API response structure: {:?}", response);
            e
        })?;

        let extraction = feature.extract(text)?;
        if extraction.is_fallback() {
            warn!(
                "{} returned unstructured text; using fallback payload",
                feature.name()
            );
        }

        Ok(extraction.into_inner())
    }

    async fn complete_with_retry(
        &self,
        api_key: &ApiKey,
        request: &CompletionRequest,
        cancel: &CancellationToken,
    ) -> Result<CompletionResponse, DomainError> {
        let mut attempt = 0;
        loop {
            let outcome = tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(DomainError::Cancelled),
                outcome = self.client.complete(api_key, request) => outcome,
            };

            match outcome {
                Err(e) if e.is_retryable() && attempt < self.retry_policy.max_retries() => {
                    let delay = self.retry_policy.delay_for_attempt(attempt);
                    attempt += 1;
                    warn!(
                        "{} call failed ({}); retry {}/{} in {}ms",
                        self.client.provider_name(),
                        e,
                        attempt,
                        self.retry_policy.max_retries(),
                        delay.as_millis()
                    );
                    tokio::select! {
                        biased;
                        _ = cancel.cancelled() => return Err(DomainError::Cancelled),
                        _ = tokio::time::sleep(delay) => {}
                    }
                }
                other => return other,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::application::{GetWritingAdvice, ReviewBook};
    use crate::connector::MockCompletionClient;

    fn review() -> ReviewBook {
        ReviewBook {
            book_title: "Gitanjali".to_string(),
        }
    }

    fn use_case(client: Arc<MockCompletionClient>) -> RunFeatureUseCase {
        RunFeatureUseCase::new(client, ApiKey::new("test-key"), DEFAULT_MODEL)
    }

    #[tokio::test]
    async fn missing_credential_fails_without_calling_the_client() {
        let client = Arc::new(MockCompletionClient::with_text("unused"));
        let use_case = RunFeatureUseCase::new(client.clone(), None, DEFAULT_MODEL);

        let result = use_case.execute(&review()).await;

        assert_eq!(
            result.error(),
            Some("MISTRAL_API_KEY is not set in the environment variables")
        );
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn success_carries_extracted_payload() {
        let client = Arc::new(MockCompletionClient::with_text("A luminous collection."));
        let result = use_case(client.clone()).execute(&review()).await;

        assert_eq!(result.payload().unwrap().review, "A luminous collection.");
        assert_eq!(client.call_count(), 1);

        let sent = client.last_request().unwrap();
        assert_eq!(sent.model(), "mistral-tiny");
        assert_eq!(sent.messages().len(), 2);
        assert_eq!(sent.max_tokens(), 1000);
    }

    #[tokio::test]
    async fn empty_choices_surface_shape_message() {
        let client = Arc::new(MockCompletionClient::with_response(
            CompletionResponse::default(),
        ));
        let result = use_case(client).execute(&review()).await;

        assert_eq!(result.error(), Some("Unexpected API response structure"));
    }

    #[tokio::test]
    async fn invalid_input_fails_before_any_call() {
        let client = Arc::new(MockCompletionClient::with_text("unused"));
        let result = use_case(client.clone())
            .execute(&ReviewBook {
                book_title: String::new(),
            })
            .await;

        assert!(!result.is_success());
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn fallback_is_still_a_success() {
        let client = Arc::new(MockCompletionClient::with_text("Show, don't tell."));
        let result = use_case(client)
            .execute(&GetWritingAdvice {
                content: "He was sad.".to_string(),
            })
            .await;

        let advice = &result.payload().unwrap().advice;
        assert_eq!(advice.len(), 1);
        assert_eq!(advice[0].suggestion, "Show, don't tell.");
    }

    #[tokio::test]
    async fn retriable_errors_are_retried_within_budget() {
        let client = Arc::new(MockCompletionClient::scripted(vec![
            Err(DomainError::upstream(503, "Service Unavailable", serde_json::Value::Null)),
            Err(DomainError::transport("connection reset")),
            Ok(CompletionResponse::from_text("Third time lucky.")),
        ]));
        let policy = RetryPolicy::none()
            .with_max_retries(2)
            .with_delays(Duration::from_millis(1), Duration::from_millis(2));

        let result = use_case(client.clone())
            .with_retry_policy(policy)
            .execute(&review())
            .await;

        assert_eq!(result.payload().unwrap().review, "Third time lucky.");
        assert_eq!(client.call_count(), 3);
    }

    #[tokio::test]
    async fn client_errors_are_not_retried() {
        let client = Arc::new(MockCompletionClient::scripted(vec![
            Err(DomainError::upstream(401, "Unauthorized", serde_json::Value::Null)),
            Ok(CompletionResponse::from_text("never reached")),
        ]));
        let policy = RetryPolicy::none()
            .with_max_retries(3)
            .with_delays(Duration::from_millis(1), Duration::from_millis(2));

        let result = use_case(client.clone())
            .with_retry_policy(policy)
            .execute(&review())
            .await;

        assert_eq!(result.error(), Some("API call failed: 401 Unauthorized"));
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn without_retry_budget_first_failure_is_final() {
        let client = Arc::new(MockCompletionClient::scripted(vec![
            Err(DomainError::transport("dns lookup failed")),
            Ok(CompletionResponse::from_text("never reached")),
        ]));

        let result = use_case(client.clone()).execute(&review()).await;

        assert_eq!(result.error(), Some("API request failed: dns lookup failed"));
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn cancellation_abandons_pending_call() {
        let client = Arc::new(
            MockCompletionClient::with_text("too late").with_delay(Duration::from_secs(30)),
        );
        let use_case = use_case(client);
        let cancel = CancellationToken::new();

        let canceller = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            canceller.cancel();
        });

        let result = use_case.execute_with_cancel(&review(), &cancel).await;
        assert_eq!(result.error(), Some("Request cancelled"));
    }
}
