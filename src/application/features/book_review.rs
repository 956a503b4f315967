use serde::{Deserialize, Serialize};

use crate::application::{Extraction, Feature, PlainText};
use crate::domain::{DomainError, Prompt, Sampling};

use super::require;

const CRITIC_SYSTEM_PROMPT: &str =
    "You are a knowledgeable book critic capable of providing insightful reviews of books.";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewBook {
    pub book_title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookReview {
    pub review: String,
}

impl PlainText for BookReview {
    fn plain_text(&self) -> String {
        self.review.clone()
    }
}

impl Feature for ReviewBook {
    type Output = BookReview;

    fn name(&self) -> &'static str {
        "review-book"
    }

    fn build_prompt(&self) -> Result<Prompt, DomainError> {
        require("Book title", &self.book_title)?;

        Ok(Prompt::new(
            CRITIC_SYSTEM_PROMPT,
            format!(
                "Provide a brief review of the book \"{}\". Include information about its plot, themes, \
                 writing style, and your overall opinion. Also, mention its price range, availability, and \
                 if there are any legal sources for downloading a PDF version.",
                self.book_title
            ),
        ))
    }

    fn sampling(&self) -> Sampling {
        Sampling::new(0.7, 1000)
    }

    fn extract(&self, text: &str) -> Result<Extraction<BookReview>, DomainError> {
        Ok(Extraction::Parsed(BookReview {
            review: text.to_string(),
        }))
    }
}
