use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::application::{ApiKey, CompletionClient};
use crate::domain::{CompletionRequest, CompletionResponse, DomainError};

enum Fallback {
    Fixed(CompletionResponse),
    /// Answer with the last message's content.
    Echo,
    Exhausted,
}

/// In-process [`CompletionClient`] that never touches the network.
///
/// Scripted outcomes are returned in order; once they run out the client
/// falls back to a fixed response, echoes the prompt, or fails.
pub struct MockCompletionClient {
    script: Mutex<VecDeque<Result<CompletionResponse, DomainError>>>,
    fallback: Fallback,
    delay: Option<Duration>,
    calls: AtomicUsize,
    last_request: Mutex<Option<CompletionRequest>>,
}

impl MockCompletionClient {
    fn build(script: Vec<Result<CompletionResponse, DomainError>>, fallback: Fallback) -> Self {
        Self {
            script: Mutex::new(script.into()),
            fallback,
            delay: None,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Always answer with `text` as the assistant message.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self::with_response(CompletionResponse::from_text(text))
    }

    pub fn with_response(response: CompletionResponse) -> Self {
        Self::build(Vec::new(), Fallback::Fixed(response))
    }

    /// Answer with the user prompt itself; handy for inspecting prompts offline.
    pub fn echo() -> Self {
        Self::build(Vec::new(), Fallback::Echo)
    }

    pub fn scripted(script: Vec<Result<CompletionResponse, DomainError>>) -> Self {
        Self::build(script, Fallback::Exhausted)
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.last_request
            .lock()
            .ok()
            .and_then(|guard| guard.clone())
    }
}

#[async_trait]
impl CompletionClient for MockCompletionClient {
    async fn complete(
        &self,
        _api_key: &ApiKey,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_request.lock() {
            *last = Some(request.clone());
        }

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let scripted = self
            .script
            .lock()
            .map_err(|_| DomainError::internal("mock script lock poisoned"))?
            .pop_front();
        if let Some(outcome) = scripted {
            return outcome;
        }

        match &self.fallback {
            Fallback::Fixed(response) => Ok(response.clone()),
            Fallback::Echo => {
                let last = request
                    .messages()
                    .last()
                    .map(|m| m.content.clone())
                    .unwrap_or_default();
                Ok(CompletionResponse::from_text(last))
            }
            Fallback::Exhausted => Err(DomainError::internal("mock script exhausted")),
        }
    }

    fn provider_name(&self) -> &str {
        "mock"
    }
}
