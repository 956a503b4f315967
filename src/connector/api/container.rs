use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::application::{ApiKey, CompletionClient, RetryPolicy, RunFeatureUseCase};
use crate::connector::{FeatureServer, MistralClient, MockCompletionClient};

/// Credential used in mock mode when none is configured.
const MOCK_API_KEY: &str = "mock";

pub struct ContainerConfig {
    /// `None` (or blank) leaves every feature failing with a configuration error.
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    /// Answer from an in-process client that echoes the prompt.
    pub mock: bool,
    pub retries: u32,
    /// Per-request timeout; `None` keeps the HTTP client's default.
    pub timeout_secs: Option<u64>,
}

pub struct Container {
    run_feature_use_case: Arc<RunFeatureUseCase>,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Self {
        let client: Arc<dyn CompletionClient> = if config.mock {
            debug!("Using mock completion client");
            Arc::new(MockCompletionClient::echo())
        } else {
            debug!("Using Mistral completion client at {}", config.base_url);
            Arc::new(MistralClient::with_timeout(
                config.base_url.as_str(),
                config.timeout_secs.map(Duration::from_secs),
            ))
        };

        let api_key = match config.api_key.as_deref().and_then(ApiKey::new) {
            Some(key) => Some(key),
            None if config.mock => ApiKey::new(MOCK_API_KEY),
            None => None,
        };

        Self::with_client(client, api_key, config)
    }

    /// Wire the container around an explicit client.
    pub fn with_client(
        client: Arc<dyn CompletionClient>,
        api_key: Option<ApiKey>,
        config: ContainerConfig,
    ) -> Self {
        let use_case = RunFeatureUseCase::new(client, api_key, config.model.as_str())
            .with_retry_policy(RetryPolicy::none().with_max_retries(config.retries));

        Self {
            run_feature_use_case: Arc::new(use_case),
            config,
        }
    }

    pub fn run_feature_use_case(&self) -> Arc<RunFeatureUseCase> {
        self.run_feature_use_case.clone()
    }

    pub fn feature_server(&self) -> FeatureServer {
        FeatureServer::new(self.run_feature_use_case())
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn is_mock(&self) -> bool {
        self.config.mock
    }
}
