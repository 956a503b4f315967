use serde::{Deserialize, Serialize};

use crate::application::{Extraction, Feature, PlainText};
use crate::domain::{DomainError, Prompt, Sampling};

use super::require;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkKind {
    Story,
    Poem,
    Screenplay,
    Play,
}

impl WorkKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkKind::Story => "story",
            WorkKind::Poem => "poem",
            WorkKind::Screenplay => "screenplay",
            WorkKind::Play => "play",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WritingLanguage {
    English,
    Bengali,
}

impl WritingLanguage {
    pub fn as_str(&self) -> &'static str {
        match self {
            WritingLanguage::English => "english",
            WritingLanguage::Bengali => "bengali",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhanceWriting {
    pub content: String,
    pub content_type: WorkKind,
    pub language: WritingLanguage,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedWriting {
    pub enhanced_content: String,
}

impl PlainText for EnhancedWriting {
    fn plain_text(&self) -> String {
        self.enhanced_content.clone()
    }
}

impl Feature for EnhanceWriting {
    type Output = EnhancedWriting;

    fn name(&self) -> &'static str {
        "enhance-writing"
    }

    fn build_prompt(&self) -> Result<Prompt, DomainError> {
        require("Content", &self.content)?;

        let kind = self.content_type.as_str();
        let language = self.language.as_str();
        Ok(Prompt::new(
            format!(
                "You are an expert {kind} writer and editor, fluent in both English and Bengali. \
                 Enhance the given {kind} in {language}, improving its quality, style, and impact \
                 while maintaining the original language."
            ),
            format!("Enhance this {kind} in {language}:\n\n{}", self.content),
        ))
    }

    fn sampling(&self) -> Sampling {
        Sampling::new(0.7, 2000)
    }

    fn extract(&self, text: &str) -> Result<Extraction<EnhancedWriting>, DomainError> {
        Ok(Extraction::Parsed(EnhancedWriting {
            enhanced_content: text.to_string(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompts_name_kind_and_language() {
        let request = EnhanceWriting {
            content: "The river sleeps.".to_string(),
            content_type: WorkKind::Poem,
            language: WritingLanguage::Bengali,
        };
        let prompt = request.build_prompt().unwrap();
        assert!(prompt.system().starts_with("You are an expert poem writer and editor"));
        assert!(prompt.system().contains("Enhance the given poem in bengali"));
        assert_eq!(prompt.user(), "Enhance this poem in bengali:\n\nThe river sleeps.");
    }

    #[test]
    fn unknown_work_kind_is_rejected() {
        let json = r#"{"content":"x","contentType":"novel","language":"english"}"#;
        assert!(serde_json::from_str::<EnhanceWriting>(json).is_err());
    }
}
