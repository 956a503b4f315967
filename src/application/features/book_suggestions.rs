use serde::{Deserialize, Serialize};

use crate::application::extraction::split_lines;
use crate::application::{Extraction, Feature, PlainText};
use crate::domain::{DomainError, Prompt, Sampling};

const LIBRARIAN_SYSTEM_PROMPT: &str =
    "You are a knowledgeable librarian capable of suggesting books based on mood or custom queries.";

/// Five book picks for a mood or a free-form query. Mood wins when both are given.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SuggestBooks {
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub query: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookSuggestions {
    pub suggestions: Vec<String>,
}

impl PlainText for BookSuggestions {
    fn plain_text(&self) -> String {
        self.suggestions.join("\n")
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl Feature for SuggestBooks {
    type Output = BookSuggestions;

    fn name(&self) -> &'static str {
        "suggest-books"
    }

    fn build_prompt(&self) -> Result<Prompt, DomainError> {
        let user = if let Some(mood) = non_blank(&self.mood) {
            format!(
                "Suggest 5 books that would be suitable for someone feeling {mood}. Provide only the titles and authors."
            )
        } else if let Some(query) = non_blank(&self.query) {
            format!(
                "Suggest 5 books based on the following query: \"{query}\". Provide only the titles and authors."
            )
        } else {
            return Err(DomainError::invalid_input("Either mood or query must be provided"));
        };

        Ok(Prompt::new(LIBRARIAN_SYSTEM_PROMPT, user))
    }

    fn sampling(&self) -> Sampling {
        Sampling::new(0.7, 500)
    }

    fn extract(&self, text: &str) -> Result<Extraction<BookSuggestions>, DomainError> {
        Ok(Extraction::Parsed(BookSuggestions {
            suggestions: split_lines(text),
        }))
    }
}
