use serde::{Deserialize, Serialize};

use crate::application::{Extraction, Feature, PlainText};
use crate::domain::{join_sentences, optional_clause, DomainError, Mood, Prompt, Sampling};

use super::require;

const STORYTELLER_SYSTEM_PROMPT: &str = "You are a creative storyteller fluent in both English and Bengali. \
Generate engaging stories based on the provided parameters in the specified language.";

const CONTINUATION_SYSTEM_PROMPT: &str = "You are a creative storyteller fluent in both English and Bengali. \
Continue and expand the given story with new developments and details in the same language as the original story.";

pub const DARK_STORY_MOOD: &str = "darker and more serious";
pub const LIGHT_STORY_MOOD: &str = "lighter and more cheerful";

const STORY_SAMPLING: Sampling = Sampling::new(0.7, 1000);

/// Parameters of a freshly generated story.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateStory {
    pub genre: String,
    #[serde(default)]
    pub sub_genre: Option<String>,
    pub character_name: String,
    pub setting: String,
    #[serde(default)]
    pub additional_details: Option<String>,
    /// e.g. `short_story`, `novella`
    pub story_format: String,
    /// e.g. `first_person`, `third_person`
    pub narrative_style: String,
    pub language: String,
    #[serde(default)]
    pub mood: Mood,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryText {
    pub story: String,
}

impl PlainText for StoryText {
    fn plain_text(&self) -> String {
        self.story.clone()
    }
}

impl Feature for GenerateStory {
    type Output = StoryText;

    fn name(&self) -> &'static str {
        "generate-story"
    }

    fn build_prompt(&self) -> Result<Prompt, DomainError> {
        require("Genre", &self.genre)?;
        require("Character name", &self.character_name)?;
        require("Setting", &self.setting)?;

        let sub_genre = optional_clause(self.sub_genre.as_deref(), |s| format!(" ({s})"));
        let user = join_sentences([
            format!(
                "Write a {}{} story in {} format, using {} narrative style, about a character named {} in {}.",
                self.genre,
                sub_genre,
                self.story_format,
                self.narrative_style,
                self.character_name,
                self.setting
            ),
            format!(
                "The mood should be {}.",
                self.mood.describe(DARK_STORY_MOOD, LIGHT_STORY_MOOD)
            ),
            optional_clause(self.additional_details.as_deref(), str::to_string),
            format!("Write the story in {}.", self.language),
        ]);

        Ok(Prompt::new(STORYTELLER_SYSTEM_PROMPT, user))
    }

    fn sampling(&self) -> Sampling {
        STORY_SAMPLING
    }

    fn extract(&self, text: &str) -> Result<Extraction<StoryText>, DomainError> {
        Ok(Extraction::Parsed(StoryText {
            story: text.to_string(),
        }))
    }
}

/// Continue a story the caller already holds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpandStory {
    pub current_story: String,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryContinuation {
    pub continuation: String,
}

impl PlainText for StoryContinuation {
    fn plain_text(&self) -> String {
        self.continuation.clone()
    }
}

impl Feature for ExpandStory {
    type Output = StoryContinuation;

    fn name(&self) -> &'static str {
        "expand-story"
    }

    fn build_prompt(&self) -> Result<Prompt, DomainError> {
        require("Current story", &self.current_story)?;

        Ok(Prompt::new(
            CONTINUATION_SYSTEM_PROMPT,
            format!("Continue this story in {}: {}", self.language, self.current_story),
        ))
    }

    fn sampling(&self) -> Sampling {
        STORY_SAMPLING
    }

    fn extract(&self, text: &str) -> Result<Extraction<StoryContinuation>, DomainError> {
        Ok(Extraction::Parsed(StoryContinuation {
            continuation: text.to_string(),
        }))
    }
}
