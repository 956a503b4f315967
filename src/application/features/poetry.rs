use serde::{Deserialize, Serialize};

use crate::application::{Extraction, Feature, PlainText};
use crate::domain::{optional_clause, DomainError, Mood, Prompt, Sampling};

use super::require;

const POET_SYSTEM_PROMPT: &str = "You are a skilled poet who can write in various styles and forms.";

pub const DARK_POEM_MOOD: &str = "more melancholic";
pub const LIGHT_POEM_MOOD: &str = "more uplifting";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePoetry {
    pub genre: String,
    #[serde(default)]
    pub poetic_style: Option<String>,
    /// Poet whose voice should be imitated.
    #[serde(default)]
    pub poet: Option<String>,
    pub number_of_lines: u32,
    #[serde(default)]
    pub mood: Mood,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoemText {
    pub poem: String,
}

impl PlainText for PoemText {
    fn plain_text(&self) -> String {
        self.poem.clone()
    }
}

impl Feature for GeneratePoetry {
    type Output = PoemText;

    fn name(&self) -> &'static str {
        "generate-poetry"
    }

    fn build_prompt(&self) -> Result<Prompt, DomainError> {
        require("Genre", &self.genre)?;
        if self.number_of_lines == 0 {
            return Err(DomainError::invalid_input("Number of lines must be positive"));
        }

        let style = optional_clause(self.poetic_style.as_deref(), |s| format!(" in the style of {s}"));
        let poet = optional_clause(self.poet.as_deref(), |p| format!(" specifically mimicking {p}"));
        let user = format!(
            "Write a {} poem in {}{}{} with exactly {} lines. The mood should be {}.",
            self.genre,
            self.language,
            style,
            poet,
            self.number_of_lines,
            self.mood.describe(DARK_POEM_MOOD, LIGHT_POEM_MOOD)
        );

        Ok(Prompt::new(POET_SYSTEM_PROMPT, user))
    }

    fn sampling(&self) -> Sampling {
        Sampling::new(0.8, 500)
    }

    fn extract(&self, text: &str) -> Result<Extraction<PoemText>, DomainError> {
        Ok(Extraction::Parsed(PoemText {
            poem: text.to_string(),
        }))
    }
}
