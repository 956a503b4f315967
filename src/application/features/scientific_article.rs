use serde::{Deserialize, Serialize};

use crate::application::{Extraction, Feature, PlainText};
use crate::domain::{join_sentences, optional_clause, DomainError, Prompt, Sampling};

use super::require;

const ARTICLE_SYSTEM_PROMPT: &str = "You are an expert scientific writer capable of generating well-structured \
and accurate scientific articles across various fields.";

const EXPANSION_SYSTEM_PROMPT: &str =
    "You are an expert scientific writer capable of expanding and improving existing scientific articles.";

const ARTICLE_STRUCTURE: &str = "Structure the article with an abstract, introduction, main body with sections, \
conclusion, and placeholder references.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleLength {
    Short,
    Medium,
    Long,
}

impl ArticleLength {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleLength::Short => "short",
            ArticleLength::Medium => "medium",
            ArticleLength::Long => "long",
        }
    }

    pub fn max_tokens(&self) -> u32 {
        match self {
            ArticleLength::Short => 800,
            ArticleLength::Medium => 1500,
            ArticleLength::Long => 2500,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateScientificArticle {
    pub topic: String,
    #[serde(default)]
    pub keywords: Option<String>,
    pub field: String,
    pub length: ArticleLength,
    pub tone: String,
    #[serde(default)]
    pub additional_suggestions: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScientificArticle {
    pub article: String,
}

impl PlainText for ScientificArticle {
    fn plain_text(&self) -> String {
        self.article.clone()
    }
}

impl Feature for GenerateScientificArticle {
    type Output = ScientificArticle;

    fn name(&self) -> &'static str {
        "scientific-article"
    }

    fn build_prompt(&self) -> Result<Prompt, DomainError> {
        require("Topic", &self.topic)?;
        require("Field", &self.field)?;

        let user = join_sentences([
            format!(
                "Generate a {} scientific article on the topic \"{}\" in the field of {}.",
                self.length.as_str(),
                self.topic,
                self.field
            ),
            format!("Use a {} tone.", self.tone),
            optional_clause(self.keywords.as_deref(), |k| format!("Include these keywords: {k}.")),
            optional_clause(self.additional_suggestions.as_deref(), |s| {
                format!("Additional requirements: {s}")
            }),
            ARTICLE_STRUCTURE.to_string(),
        ]);

        Ok(Prompt::new(ARTICLE_SYSTEM_PROMPT, user))
    }

    fn sampling(&self) -> Sampling {
        Sampling::new(0.7, self.length.max_tokens())
    }

    fn extract(&self, text: &str) -> Result<Extraction<ScientificArticle>, DomainError> {
        Ok(Extraction::Parsed(ScientificArticle {
            article: text.to_string(),
        }))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpandScientificArticle {
    pub current_article: String,
    #[serde(default)]
    pub additional_suggestions: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpandedArticle {
    pub expanded_article: String,
}

impl PlainText for ExpandedArticle {
    fn plain_text(&self) -> String {
        self.expanded_article.clone()
    }
}

impl Feature for ExpandScientificArticle {
    type Output = ExpandedArticle;

    fn name(&self) -> &'static str {
        "expand-scientific-article"
    }

    fn build_prompt(&self) -> Result<Prompt, DomainError> {
        require("Current article", &self.current_article)?;

        let header = join_sentences([
            "Expand and improve the following scientific article.".to_string(),
            optional_clause(self.additional_suggestions.as_deref(), |s| {
                format!("Consider these additional suggestions: {s}")
            }),
            "Here's the current article:".to_string(),
        ]);

        Ok(Prompt::new(
            EXPANSION_SYSTEM_PROMPT,
            format!(
                "{header}\n\n{}\n\nPlease provide an expanded and improved version of this article.",
                self.current_article
            ),
        ))
    }

    fn sampling(&self) -> Sampling {
        Sampling::new(0.7, 2500)
    }

    fn extract(&self, text: &str) -> Result<Extraction<ExpandedArticle>, DomainError> {
        Ok(Extraction::Parsed(ExpandedArticle {
            expanded_article: text.to_string(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(length: ArticleLength) -> GenerateScientificArticle {
        GenerateScientificArticle {
            topic: "Coral bleaching".to_string(),
            keywords: None,
            field: "marine biology".to_string(),
            length,
            tone: "academic".to_string(),
            additional_suggestions: None,
        }
    }

    #[test]
    fn token_budget_follows_length() {
        assert_eq!(request(ArticleLength::Short).sampling().max_tokens, 800);
        assert_eq!(request(ArticleLength::Medium).sampling().max_tokens, 1500);
        assert_eq!(request(ArticleLength::Long).sampling().max_tokens, 2500);
    }

    #[test]
    fn optional_clauses_appear_only_when_given() {
        let user = request(ArticleLength::Short).build_prompt().unwrap().user().to_string();
        assert_eq!(
            user,
            format!(
                "Generate a short scientific article on the topic \"Coral bleaching\" in the field of marine biology. \
                 Use a academic tone. {ARTICLE_STRUCTURE}"
            )
        );

        let mut detailed = request(ArticleLength::Long);
        detailed.keywords = Some("ocean warming, symbiosis".to_string());
        detailed.additional_suggestions = Some("Cite the 2016 event".to_string());
        let user = detailed.build_prompt().unwrap().user().to_string();
        assert!(user.contains("Include these keywords: ocean warming, symbiosis."));
        assert!(user.contains("Additional requirements: Cite the 2016 event"));
    }

    #[test]
    fn expansion_embeds_current_article() {
        let request = ExpandScientificArticle {
            current_article: "Abstract: ...".to_string(),
            additional_suggestions: Some("Add a methods section".to_string()),
        };
        let user = request.build_prompt().unwrap().user().to_string();
        assert!(user.starts_with(
            "Expand and improve the following scientific article. Consider these additional suggestions: Add a methods section Here's the current article:\n\nAbstract: ..."
        ));
        assert_eq!(request.sampling().max_tokens, 2500);
    }
}
