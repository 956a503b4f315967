use serde::{Deserialize, Serialize};

use crate::application::{Extraction, Feature};
use crate::domain::{DomainError, Prompt, Sampling};

use super::{require, StoryContinuation, StoryText};

/// Closing formula of a Bengali grandmother's tale.
pub const CLOSING_LINE: &str = "Amar golpo ti furalo, note gaach ti murolo";

const THAKUMA_PERSONA: &str = "You are AI Thakuma, a storyteller specializing in fantasy, \
fairy tales like Harry Potter and Lord of the Rings, as well as local Bengali horror tales.";

const THAKUMA_SAMPLING: Sampling = Sampling::new(0.7, 500);

/// Ask Thakuma to begin a new tale.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThakumaStory {}

impl Feature for ThakumaStory {
    type Output = StoryText;

    fn name(&self) -> &'static str {
        "thakuma-story"
    }

    fn build_prompt(&self) -> Result<Prompt, DomainError> {
        Ok(Prompt::new(
            format!(
                "{THAKUMA_PERSONA} Start a story in this style. When you will finish the story, \
                 add this line as the final line: {CLOSING_LINE}."
            ),
            "Tell me a story, Thakuma!",
        ))
    }

    fn sampling(&self) -> Sampling {
        THAKUMA_SAMPLING
    }

    fn extract(&self, text: &str) -> Result<Extraction<StoryText>, DomainError> {
        Ok(Extraction::Parsed(StoryText {
            story: text.to_string(),
        }))
    }
}

/// Continue a tale in answer to the listener's question.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinueThakumaStory {
    pub current_story: String,
    pub question: String,
}

impl Feature for ContinueThakumaStory {
    type Output = StoryContinuation;

    fn name(&self) -> &'static str {
        "continue-thakuma-story"
    }

    fn build_prompt(&self) -> Result<Prompt, DomainError> {
        require("Current story", &self.current_story)?;
        require("Question", &self.question)?;

        Ok(Prompt::new(
            format!("{THAKUMA_PERSONA} Continue the story based on the question asked."),
            format!(
                "Here's the current story: \"{}\". The listener asks: \"{}\". Please continue the story.",
                self.current_story, self.question
            ),
        ))
    }

    fn sampling(&self) -> Sampling {
        THAKUMA_SAMPLING
    }

    fn extract(&self, text: &str) -> Result<Extraction<StoryContinuation>, DomainError> {
        Ok(Extraction::Parsed(StoryContinuation {
            continuation: close_story(text),
        }))
    }
}

/// Whether the text contains the closing formula, in any letter case.
pub fn is_finished(text: &str) -> bool {
    text.to_lowercase().contains(&CLOSING_LINE.to_lowercase())
}

/// A finished tale ends with the closing formula as its own final paragraph.
///
/// The formula is appended only when the last line is not already the formula,
/// so a tale the model closed itself is not closed twice. Unfinished text is
/// returned unchanged.
pub fn close_story(text: &str) -> String {
    if !is_finished(text) {
        return text.to_string();
    }

    let trimmed = text.trim_end();
    let last_line = trimmed
        .lines()
        .last()
        .unwrap_or_default()
        .trim()
        .trim_end_matches(['.', '!']);

    if last_line.eq_ignore_ascii_case(CLOSING_LINE) {
        trimmed.to_string()
    } else {
        format!("{trimmed}\n\n{CLOSING_LINE}")
    }
}
