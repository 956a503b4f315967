use serde::{Deserialize, Serialize};

use crate::application::{Extraction, Feature, PlainText};
use crate::domain::{DomainError, Prompt, Sampling};

use super::require;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParaphraseText {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paraphrased {
    pub paraphrased_text: String,
}

impl PlainText for Paraphrased {
    fn plain_text(&self) -> String {
        self.paraphrased_text.clone()
    }
}

impl ParaphraseText {
    /// Text without any full stop is treated as one sentence.
    pub fn is_single_sentence(&self) -> bool {
        !self.text.contains('.')
    }
}

impl Feature for ParaphraseText {
    type Output = Paraphrased;

    fn name(&self) -> &'static str {
        "paraphrase"
    }

    fn build_prompt(&self) -> Result<Prompt, DomainError> {
        require("Text", &self.text)?;

        let (scope, unit) = if self.is_single_sentence() {
            ("You are paraphrasing a single sentence.", "sentence")
        } else {
            ("You are paraphrasing a full text.", "text")
        };

        Ok(Prompt::new(
            format!(
                "You are an expert at paraphrasing text while maintaining its original meaning but \
                 improving clarity, tone, and style. {scope}"
            ),
            format!(
                "Please paraphrase this {unit} while maintaining its meaning: \"{}\"",
                self.text
            ),
        ))
    }

    fn sampling(&self) -> Sampling {
        if self.is_single_sentence() {
            Sampling::new(0.7, 100)
        } else {
            Sampling::new(0.7, 1000)
        }
    }

    fn extract(&self, text: &str) -> Result<Extraction<Paraphrased>, DomainError> {
        Ok(Extraction::Parsed(Paraphrased {
            paraphrased_text: text.to_string(),
        }))
    }
}
