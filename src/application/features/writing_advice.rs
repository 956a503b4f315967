use serde::{Deserialize, Serialize};

use crate::application::extraction::{best_effort, decode_json};
use crate::application::{Extraction, Feature, PlainText};
use crate::domain::{DomainError, Prompt, Sampling, WritingAdvice};

use super::require;

const COACH_SYSTEM_PROMPT: &str = "You are an expert writing coach. Analyze the given text and provide actionable \
advice for improving writing style, structure, and impact. Focus on enhancing clarity, engagement, and overall \
quality. Provide suggestions in JSON format with type, suggestion, and explanation fields. The response should be \
a valid JSON array of advice objects.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetWritingAdvice {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdviceReport {
    pub advice: Vec<WritingAdvice>,
}

impl PlainText for AdviceReport {
    fn plain_text(&self) -> String {
        self.advice
            .iter()
            .enumerate()
            .map(|(i, a)| format!("{}. [{}] {}\n   {}", i + 1, a.kind, a.suggestion, a.explanation))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Feature for GetWritingAdvice {
    type Output = AdviceReport;

    fn name(&self) -> &'static str {
        "writing-advice"
    }

    fn build_prompt(&self) -> Result<Prompt, DomainError> {
        require("Content", &self.content)?;

        Ok(Prompt::new(
            COACH_SYSTEM_PROMPT,
            format!("Analyze this text and provide writing advice: \"{}\"", self.content),
        ))
    }

    fn sampling(&self) -> Sampling {
        Sampling::new(0.3, 1000)
    }

    fn extract(&self, text: &str) -> Result<Extraction<AdviceReport>, DomainError> {
        let extraction = best_effort(
            text,
            |raw| decode_json::<Vec<WritingAdvice>>(raw, '[', ']'),
            |raw| {
                vec![WritingAdvice {
                    kind: "general".to_string(),
                    suggestion: raw.to_string(),
                    explanation: "General writing advice".to_string(),
                }]
            },
        );
        Ok(extraction.map(|advice| AdviceReport { advice }))
    }
}
