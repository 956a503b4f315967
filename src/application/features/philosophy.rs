use serde::{Deserialize, Serialize};

use crate::application::{Extraction, Feature, PlainText};
use crate::domain::{optional_clause, DomainError, Prompt, Sampling};

use super::require;

const PHILOSOPHY_SYSTEM_PROMPT: &str = "You are a knowledgeable philosophy expert capable of explaining complex \
philosophical concepts and quotes in simple terms.";

/// Either a named concept (optionally tied to a philosopher) or a quote to interpret.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ExplainPhilosophy {
    Concept {
        #[serde(default)]
        philosopher: Option<String>,
        concept: String,
    },
    Quote {
        quote: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhilosophyExplanation {
    pub explanation: String,
}

impl PlainText for PhilosophyExplanation {
    fn plain_text(&self) -> String {
        self.explanation.clone()
    }
}

impl Feature for ExplainPhilosophy {
    type Output = PhilosophyExplanation;

    fn name(&self) -> &'static str {
        "explain-philosophy"
    }

    fn build_prompt(&self) -> Result<Prompt, DomainError> {
        let user = match self {
            ExplainPhilosophy::Concept {
                philosopher,
                concept,
            } => {
                require("Concept", concept)?;
                let by = optional_clause(philosopher.as_deref(), |p| format!(" by philosopher {p}"));
                format!(
                    "Explain the concept of \"{concept}\"{by} in simple terms. Provide context, key ideas, \
                     and its significance in philosophy."
                )
            }
            ExplainPhilosophy::Quote { quote } => {
                require("Quote", quote)?;
                format!(
                    "Explain the meaning and significance of this philosophical quote: \"{quote}\". \
                     Provide context and interpretation."
                )
            }
        };

        Ok(Prompt::new(PHILOSOPHY_SYSTEM_PROMPT, user))
    }

    fn sampling(&self) -> Sampling {
        Sampling::new(0.7, 500)
    }

    fn extract(&self, text: &str) -> Result<Extraction<PhilosophyExplanation>, DomainError> {
        Ok(Extraction::Parsed(PhilosophyExplanation {
            explanation: text.to_string(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concept_prompt_names_the_philosopher() {
        let request: ExplainPhilosophy = serde_json::from_str(
            r#"{"type":"concept","philosopher":"Immanuel Kant","concept":"Categorical Imperative"}"#,
        )
        .unwrap();
        let user = request.build_prompt().unwrap().user().to_string();
        assert!(user.starts_with(
            "Explain the concept of \"Categorical Imperative\" by philosopher Immanuel Kant in simple terms."
        ));
    }

    #[test]
    fn concept_without_philosopher_drops_the_clause() {
        let request = ExplainPhilosophy::Concept {
            philosopher: None,
            concept: "Stoicism".to_string(),
        };
        let user = request.build_prompt().unwrap().user().to_string();
        assert!(user.starts_with("Explain the concept of \"Stoicism\" in simple terms."));
    }

    #[test]
    fn quote_prompt_quotes_the_text() {
        let request: ExplainPhilosophy =
            serde_json::from_str(r#"{"type":"quote","quote":"I think, therefore I am"}"#).unwrap();
        let user = request.build_prompt().unwrap().user().to_string();
        assert!(user.contains("philosophical quote: \"I think, therefore I am\"."));
    }
}
