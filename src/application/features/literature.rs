use serde::{Deserialize, Serialize};

use crate::application::{Extraction, Feature, PlainText};
use crate::domain::{DomainError, Prompt, Sampling};

use super::require;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    Explain,
    Summarize,
    Criticize,
}

impl AnalysisMode {
    fn system_prompt(&self) -> &'static str {
        match self {
            AnalysisMode::Explain => "You are a literary expert who explains poems and stories in detail, covering themes, symbolism, and meaning.",
            AnalysisMode::Summarize => "You are a skilled summarizer who can concisely capture the essence of literary works.",
            AnalysisMode::Criticize => "You are a constructive literary critic who analyzes works and provides specific suggestions for improvement.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiteraryForm {
    Poem,
    Story,
}

impl LiteraryForm {
    pub fn as_str(&self) -> &'static str {
        match self {
            LiteraryForm::Poem => "poem",
            LiteraryForm::Story => "story",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeLiterature {
    pub content: String,
    #[serde(rename = "type")]
    pub mode: AnalysisMode,
    pub content_type: LiteraryForm,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiteratureAnalysis {
    pub analysis: String,
}

impl PlainText for LiteratureAnalysis {
    fn plain_text(&self) -> String {
        self.analysis.clone()
    }
}

impl Feature for AnalyzeLiterature {
    type Output = LiteratureAnalysis;

    fn name(&self) -> &'static str {
        "analyze-literature"
    }

    fn build_prompt(&self) -> Result<Prompt, DomainError> {
        require("Content", &self.content)?;

        let form = self.content_type.as_str();
        let user = match self.mode {
            AnalysisMode::Explain => format!(
                "Please explain this {form} in detail, covering its themes, symbolism, and deeper meaning:\n\n{}",
                self.content
            ),
            AnalysisMode::Summarize => format!(
                "Please provide a concise summary of this {form}:\n\n{}",
                self.content
            ),
            AnalysisMode::Criticize => format!(
                "Please analyze this {form} and provide specific suggestions for improvement:\n\n{}",
                self.content
            ),
        };

        Ok(Prompt::new(self.mode.system_prompt(), user))
    }

    fn sampling(&self) -> Sampling {
        Sampling::new(0.7, 1000)
    }

    fn extract(&self, text: &str) -> Result<Extraction<LiteratureAnalysis>, DomainError> {
        Ok(Extraction::Parsed(LiteratureAnalysis {
            analysis: text.to_string(),
        }))
    }
}
