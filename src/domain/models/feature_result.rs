use serde::{Serialize, Serializer};

use crate::domain::DomainError;

/// Outcome handed back to callers of every feature.
///
/// Serialises as `{"success": true, ...payload}` or
/// `{"success": false, "error": "..."}`, so the payload type must serialise to
/// a JSON object.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureResult<T> {
    Success(T),
    Failure { error: String },
}

impl<T> FeatureResult<T> {
    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure {
            error: error.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn payload(&self) -> Option<&T> {
        match self {
            Self::Success(payload) => Some(payload),
            Self::Failure { .. } => None,
        }
    }

    pub fn into_payload(self) -> Option<T> {
        match self {
            Self::Success(payload) => Some(payload),
            Self::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure { error } => Some(error),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FeatureResult<U> {
        match self {
            Self::Success(payload) => FeatureResult::Success(f(payload)),
            Self::Failure { error } => FeatureResult::Failure { error },
        }
    }
}

impl<T> From<Result<T, DomainError>> for FeatureResult<T> {
    fn from(result: Result<T, DomainError>) -> Self {
        match result {
            Ok(payload) => Self::Success(payload),
            Err(e) => Self::failure(e.to_string()),
        }
    }
}

impl<T: Serialize> Serialize for FeatureResult<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct SuccessEnvelope<'a, P> {
            success: bool,
            #[serde(flatten)]
            payload: &'a P,
        }

        #[derive(Serialize)]
        struct FailureEnvelope<'a> {
            success: bool,
            error: &'a str,
        }

        match self {
            Self::Success(payload) => SuccessEnvelope {
                success: true,
                payload,
            }
            .serialize(serializer),
            Self::Failure { error } => FailureEnvelope {
                success: false,
                error,
            }
            .serialize(serializer),
        }
    }
}
