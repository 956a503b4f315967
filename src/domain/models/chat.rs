use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Body of `POST {base}/chat/completions`.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

impl CompletionRequest {
    /// Rejects an empty message list, a temperature outside `[0, 1]` and a zero token budget.
    pub fn new(
        model: impl Into<String>,
        messages: Vec<ChatMessage>,
        temperature: f32,
        max_tokens: u32,
    ) -> Result<Self, DomainError> {
        if messages.is_empty() {
            return Err(DomainError::invalid_input(
                "A completion request needs at least one message",
            ));
        }
        if !(0.0..=1.0).contains(&temperature) {
            return Err(DomainError::invalid_input(format!(
                "Temperature must be between 0 and 1, got {temperature}"
            )));
        }
        if max_tokens == 0 {
            return Err(DomainError::invalid_input("max_tokens must be positive"));
        }

        Ok(Self {
            model: model.into(),
            messages,
            temperature,
            max_tokens,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }
}

/// Decoded chat-completion response.
///
/// Every field is optional on the wire so that a structurally odd but valid JSON
/// body still decodes; [`CompletionResponse::message_text`] is the single place
/// that decides whether the response is usable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompletionResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default)]
    pub choices: Vec<Choice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<TokenUsage>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Choice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<ResponseMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TokenUsage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
}

impl CompletionResponse {
    /// Build a single-choice assistant response.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            choices: vec![Choice {
                message: Some(ResponseMessage {
                    role: Some(Role::Assistant),
                    content: Some(text.into()),
                }),
                finish_reason: Some("stop".to_string()),
            }],
            ..Self::default()
        }
    }

    /// Text of the first choice's message.
    ///
    /// Fails with [`DomainError::ShapeError`] when there are no choices, the first
    /// choice carries no message, or the message has no content.
    pub fn message_text(&self) -> Result<&str, DomainError> {
        let choice = self
            .choices
            .first()
            .ok_or_else(|| DomainError::shape("response has no choices"))?;
        let message = choice
            .message
            .as_ref()
            .ok_or_else(|| DomainError::shape("first choice has no message"))?;
        message
            .content
            .as_deref()
            .ok_or_else(|| DomainError::shape("first message has no content"))
    }
}
