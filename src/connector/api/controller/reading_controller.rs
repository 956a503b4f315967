use anyhow::{bail, Result};

use crate::application::{AnalyzeLiterature, ExplainPhilosophy, ReviewBook, SuggestBooks};

use super::feature_runner::FeatureRunner;
use super::output::{parse_choice, read_text_arg, Rendered};

/// Literature analysis, philosophy, book reviews and suggestions.
pub struct ReadingController<'a> {
    runner: FeatureRunner<'a>,
}

impl<'a> ReadingController<'a> {
    pub fn new(runner: FeatureRunner<'a>) -> Self {
        Self { runner }
    }

    pub async fn analyze(&self, content: String, mode: &str, kind: &str) -> Result<Rendered> {
        let feature = AnalyzeLiterature {
            content: read_text_arg(content)?,
            mode: parse_choice(mode)?,
            content_type: parse_choice(kind)?,
        };
        self.runner.run(feature).await
    }

    pub async fn philosophy(
        &self,
        concept: Option<String>,
        philosopher: Option<String>,
        quote: Option<String>,
    ) -> Result<Rendered> {
        let feature = match (concept, quote) {
            (_, Some(quote)) => ExplainPhilosophy::Quote { quote },
            (Some(concept), None) => ExplainPhilosophy::Concept {
                philosopher,
                concept,
            },
            (None, None) => bail!("Either --concept or --quote must be provided"),
        };
        self.runner.run(feature).await
    }

    pub async fn review(&self, title: String) -> Result<Rendered> {
        self.runner.run(ReviewBook { book_title: title }).await
    }

    pub async fn books(&self, mood: Option<String>, query: Option<String>) -> Result<Rendered> {
        self.runner.run(SuggestBooks { mood, query }).await
    }
}
