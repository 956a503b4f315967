//! The feature catalogue.
//!
//! Each request type implements [`crate::application::Feature`]: it renders its
//! prompt templates, chooses its sampling parameters and reads its payload out
//! of the assistant text.

mod book_review;
mod book_suggestions;
mod email;
mod enhance_writing;
mod grammar;
mod literature;
mod paraphrase;
mod philosophy;
mod poetry;
mod roleplay;
mod scientific_article;
mod social_media;
mod story;
mod thakuma;
mod writing_advice;

pub use book_review::*;
pub use book_suggestions::*;
pub use email::*;
pub use enhance_writing::*;
pub use grammar::*;
pub use literature::*;
pub use paraphrase::*;
pub use philosophy::*;
pub use poetry::*;
pub use roleplay::*;
pub use scientific_article::*;
pub use social_media::*;
pub use story::*;
pub use thakuma::*;
pub use writing_advice::*;

use crate::domain::DomainError;

/// Reject a blank value for a field the templates cannot do without.
pub(crate) fn require(field: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::invalid_input(format!("{field} must not be empty")));
    }
    Ok(())
}
