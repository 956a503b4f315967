use anyhow::Result;

use crate::application::{CheckGrammar, EnhanceWriting, GetWritingAdvice, ParaphraseText};

use super::feature_runner::FeatureRunner;
use super::output::{parse_choice, read_text_arg, Rendered};

/// Grammar checks, writing advice, enhancement and paraphrasing.
pub struct EditingController<'a> {
    runner: FeatureRunner<'a>,
}

impl<'a> EditingController<'a> {
    pub fn new(runner: FeatureRunner<'a>) -> Self {
        Self { runner }
    }

    pub async fn grammar(&self, content: String, style: String) -> Result<Rendered> {
        let feature = CheckGrammar {
            content: read_text_arg(content)?,
            writing_style: style,
        };
        self.runner.run(feature).await
    }

    pub async fn advice(&self, content: String) -> Result<Rendered> {
        let feature = GetWritingAdvice {
            content: read_text_arg(content)?,
        };
        self.runner.run(feature).await
    }

    pub async fn enhance(&self, content: String, kind: &str, language: &str) -> Result<Rendered> {
        let feature = EnhanceWriting {
            content: read_text_arg(content)?,
            content_type: parse_choice(kind)?,
            language: parse_choice(language)?,
        };
        self.runner.run(feature).await
    }

    pub async fn paraphrase(&self, text: String) -> Result<Rendered> {
        let feature = ParaphraseText {
            text: read_text_arg(text)?,
        };
        self.runner.run(feature).await
    }
}
