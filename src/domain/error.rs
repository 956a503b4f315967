use thiserror::Error;

/// Message surfaced when the upstream body does not match the chat-completion schema.
pub const SHAPE_ERROR_MESSAGE: &str = "Unexpected API response structure";

/// Message surfaced when the API credential is absent.
pub const MISSING_CREDENTIAL_MESSAGE: &str =
    "MISTRAL_API_KEY is not set in the environment variables";

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    ConfigError(String),

    #[error("API request failed: {0}")]
    TransportError(String),

    #[error("API call failed: {status} {reason}")]
    UpstreamError {
        status: u16,
        reason: String,
        body: serde_json::Value,
    },

    #[error("Unexpected API response structure")]
    ShapeError(String),

    #[error("{0}")]
    ParseError(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("Request cancelled")]
    Cancelled,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn missing_credential() -> Self {
        Self::ConfigError(MISSING_CREDENTIAL_MESSAGE.to_string())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::TransportError(msg.into())
    }

    pub fn upstream(status: u16, reason: impl Into<String>, body: serde_json::Value) -> Self {
        Self::UpstreamError {
            status,
            reason: reason.into(),
            body,
        }
    }

    /// The detail is kept for logs only; the displayed message is fixed.
    pub fn shape(detail: impl Into<String>) -> Self {
        Self::ShapeError(detail.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError(_))
    }

    pub fn is_shape_error(&self) -> bool {
        matches!(self, Self::ShapeError(_))
    }

    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::ParseError(_))
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Transport failures, rate limiting and 5xx responses may succeed on a later attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::TransportError(_) => true,
            Self::UpstreamError { status, .. } => *status == 429 || (500..600).contains(status),
            _ => false,
        }
    }
}
