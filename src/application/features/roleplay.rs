use serde::{Deserialize, Serialize};

use crate::application::{Extraction, Feature, PlainText};
use crate::domain::{DomainError, Prompt, Sampling};

use super::require;

const ROLEPLAY_SYSTEM_PROMPT: &str = "You are an AI storyteller engaged in an interactive roleplaying scenario. \
Respond to the user's input to create an engaging and dynamic story.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleplayAction {
    Start,
    Continue,
}

/// One turn of an interactive story.
///
/// No conversation state is kept between turns; on `continue` the caller sends
/// the transcript so far as `context`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleplayTurn {
    pub input: String,
    pub action: RoleplayAction,
    #[serde(default)]
    pub context: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleplayReply {
    pub response: String,
}

impl PlainText for RoleplayReply {
    fn plain_text(&self) -> String {
        self.response.clone()
    }
}

impl Feature for RoleplayTurn {
    type Output = RoleplayReply;

    fn name(&self) -> &'static str {
        "roleplay"
    }

    fn build_prompt(&self) -> Result<Prompt, DomainError> {
        require("Input", &self.input)?;

        let user = match self.action {
            RoleplayAction::Start => format!(
                "Start a new interactive story based on this scenario: {}",
                self.input
            ),
            RoleplayAction::Continue => {
                let context = match self.context.as_deref().map(str::trim) {
                    Some(c) if !c.is_empty() => format!(" Previous context:\n{c}"),
                    _ => String::new(),
                };
                format!(
                    "Continue the story.{context}\n\nUser's latest input: {}\n\nRespond to the user's input and progress the story:",
                    self.input
                )
            }
        };

        Ok(Prompt::new(ROLEPLAY_SYSTEM_PROMPT, user))
    }

    fn sampling(&self) -> Sampling {
        Sampling::new(0.7, 500)
    }

    fn extract(&self, text: &str) -> Result<Extraction<RoleplayReply>, DomainError> {
        Ok(Extraction::Parsed(RoleplayReply {
            response: text.to_string(),
        }))
    }
}
