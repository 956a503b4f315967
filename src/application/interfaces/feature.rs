use serde::Serialize;

use crate::application::Extraction;
use crate::domain::{DomainError, Prompt, Sampling};

/// A single content-generation feature: how to ask the model and how to read its answer.
///
/// Implemented by every request type; [`crate::application::RunFeatureUseCase`]
/// drives the prompt → completion → extraction pipeline for any implementor.
pub trait Feature: Send + Sync {
    /// Success payload, flattened next to `"success": true` in the result envelope.
    type Output: Serialize + PlainText + Send;

    /// Stable identifier, also the CLI subcommand and HTTP route segment.
    fn name(&self) -> &'static str;

    fn build_prompt(&self) -> Result<Prompt, DomainError>;

    fn sampling(&self) -> Sampling;

    /// Turn the assistant's text into the payload.
    fn extract(&self, text: &str) -> Result<Extraction<Self::Output>, DomainError>;
}

/// Human-readable rendering of a payload, used for `--format text` and saved files.
pub trait PlainText {
    fn plain_text(&self) -> String;
}
