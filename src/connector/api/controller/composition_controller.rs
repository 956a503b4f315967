use anyhow::Result;

use crate::application::{
    ExpandScientificArticle, GenerateEmail, GenerateScientificArticle,
    GenerateSocialMediaContent,
};

use super::feature_runner::FeatureRunner;
use super::output::{parse_choice, read_text_arg, Rendered};

/// Emails, social media posts and scientific articles.
pub struct CompositionController<'a> {
    runner: FeatureRunner<'a>,
}

pub struct ArticleOptions {
    pub topic: String,
    pub field: String,
    pub length: String,
    pub tone: String,
    pub keywords: Option<String>,
    pub suggestions: Option<String>,
}

impl<'a> CompositionController<'a> {
    pub fn new(runner: FeatureRunner<'a>) -> Self {
        Self { runner }
    }

    pub async fn email(
        &self,
        purpose: String,
        kind: String,
        details: Option<String>,
    ) -> Result<Rendered> {
        let feature = GenerateEmail {
            purpose,
            email_type: kind,
            additional_details: details,
        };
        self.runner.run(feature).await
    }

    pub async fn social(&self, prompt: String, kind: String, tone: String) -> Result<Rendered> {
        let feature = GenerateSocialMediaContent {
            content_type: kind,
            tone,
            prompt,
        };
        self.runner.run(feature).await
    }

    pub async fn article(&self, options: ArticleOptions) -> Result<Rendered> {
        let feature = GenerateScientificArticle {
            topic: options.topic,
            keywords: options.keywords,
            field: options.field,
            length: parse_choice(&options.length)?,
            tone: options.tone,
            additional_suggestions: options.suggestions,
        };
        self.runner.run(feature).await
    }

    pub async fn expand_article(
        &self,
        article: String,
        suggestions: Option<String>,
    ) -> Result<Rendered> {
        let feature = ExpandScientificArticle {
            current_article: read_text_arg(article)?,
            additional_suggestions: suggestions,
        };
        self.runner.run(feature).await
    }
}
