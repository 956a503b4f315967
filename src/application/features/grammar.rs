use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::application::extraction::{best_effort, decode_json_where};
use crate::application::{Extraction, Feature, PlainText};
use crate::domain::{DomainError, GrammarSuggestion, Prompt, Sampling};

use super::require;

const GRAMMAR_SYSTEM_PROMPT: &str = "You are an expert writing assistant specializing in grammar, spelling, \
punctuation, and style improvements. Analyze text and provide detailed suggestions in JSON format with type \
(grammar/spelling/style/punctuation), text (original), suggestion (correction), and explanation fields. Also \
provide a fully corrected version of the text. Your response should be a valid JSON object with 'suggestions' \
and 'correctedText' fields.";

const FALLBACK_KIND: &str = "style";
const FALLBACK_EXPLANATION: &str = "General improvement suggestion";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckGrammar {
    pub content: String,
    /// e.g. academic, casual, business
    pub writing_style: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrammarReport {
    pub suggestions: Vec<GrammarSuggestion>,
    pub corrected_text: String,
}

impl PlainText for GrammarReport {
    fn plain_text(&self) -> String {
        let mut output = format!("Corrected text:\n{}\n", self.corrected_text);
        if !self.suggestions.is_empty() {
            output.push_str("\nSuggestions:\n");
            for (i, s) in self.suggestions.iter().enumerate() {
                output.push_str(&format!(
                    "{}. [{}] {} -> {}\n   {}\n",
                    i + 1,
                    s.kind,
                    s.text,
                    s.suggestion,
                    s.explanation
                ));
            }
        }
        output
    }
}

/// A braced span lifted out of prose must carry at least one report field.
fn is_grammar_report(value: &Value) -> bool {
    matches!(value.get("suggestions"), Some(Value::Array(_)))
        || matches!(value.get("correctedText"), Some(Value::String(_)))
}

impl CheckGrammar {
    fn decode_report(&self, raw: &str) -> Result<GrammarReport, DomainError> {
        let value: Value = decode_json_where(raw, '{', '}', is_grammar_report)?;
        let object = value
            .as_object()
            .ok_or_else(|| DomainError::parse("grammar response is not a JSON object"))?;

        let suggestions = match object.get("suggestions") {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| match serde_json::from_value(item.clone()) {
                    Ok(s) => Some(s),
                    Err(e) => {
                        warn!("Skipping malformed grammar suggestion {item}: {e}");
                        None
                    }
                })
                .collect(),
            _ => Vec::new(),
        };

        let corrected_text = match object.get("correctedText") {
            Some(Value::String(text)) => text.clone(),
            _ => self.content.clone(),
        };

        Ok(GrammarReport {
            suggestions,
            corrected_text,
        })
    }

    fn fallback_report(&self, raw: &str) -> GrammarReport {
        GrammarReport {
            suggestions: vec![GrammarSuggestion {
                kind: FALLBACK_KIND.to_string(),
                text: self.content.clone(),
                suggestion: raw.to_string(),
                explanation: FALLBACK_EXPLANATION.to_string(),
            }],
            corrected_text: self.content.clone(),
        }
    }
}

impl Feature for CheckGrammar {
    type Output = GrammarReport;

    fn name(&self) -> &'static str {
        "check-grammar"
    }

    fn build_prompt(&self) -> Result<Prompt, DomainError> {
        require("Content", &self.content)?;

        Ok(Prompt::new(
            GRAMMAR_SYSTEM_PROMPT,
            format!(
                "Check this {} text and provide suggestions for improvement: \"{}\"",
                self.writing_style, self.content
            ),
        ))
    }

    fn sampling(&self) -> Sampling {
        Sampling::new(0.3, 1000)
    }

    fn extract(&self, text: &str) -> Result<Extraction<GrammarReport>, DomainError> {
        Ok(best_effort(
            text,
            |raw| self.decode_report(raw),
            |raw| self.fallback_report(raw),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CheckGrammar {
        CheckGrammar {
            content: "Their going to the park".to_string(),
            writing_style: "casual".to_string(),
        }
    }

    #[test]
    fn well_formed_json_is_returned_exactly() {
        let raw = r#"{"suggestions":[{"type":"grammar","text":"Their","suggestion":"They're","explanation":"Contraction of they are"}],"correctedText":"X"}"#;
        let extraction = request().extract(raw).unwrap();
        assert!(!extraction.is_fallback());

        let report = extraction.into_inner();
        assert_eq!(report.corrected_text, "X");
        let expected: Value = serde_json::from_str(raw).unwrap();
        assert_eq!(serde_json::to_value(&report.suggestions).unwrap(), expected["suggestions"]);
    }

    #[test]
    fn non_json_text_falls_back_to_single_suggestion() {
        let raw = "You should write \"They're going to the park\".";
        let extraction = request().extract(raw).unwrap();
        assert!(extraction.is_fallback());

        let report = extraction.into_inner();
        assert_eq!(report.suggestions.len(), 1);
        assert_eq!(report.suggestions[0].suggestion, raw);
        assert_eq!(report.suggestions[0].kind, "style");
        assert_eq!(report.suggestions[0].text, "Their going to the park");
        assert_eq!(report.corrected_text, "Their going to the park");
    }

    #[test]
    fn prose_with_empty_braces_falls_back_verbatim() {
        let raw = "Replace the placeholder {} with \"They're going\" for correctness.";
        let extraction = request().extract(raw).unwrap();
        assert!(extraction.is_fallback());

        let report = extraction.into_inner();
        assert_eq!(report.suggestions.len(), 1);
        assert_eq!(report.suggestions[0].suggestion, raw);
        assert_eq!(report.corrected_text, "Their going to the park");
    }

    #[test]
    fn prose_with_unrelated_object_falls_back_verbatim() {
        let raw = r#"Use a mapping like {"their": "they're"} to remember it."#;
        let extraction = request().extract(raw).unwrap();
        assert!(extraction.is_fallback());
        assert_eq!(extraction.value().suggestions[0].suggestion, raw);
    }

    #[test]
    fn fenced_report_is_still_decoded() {
        let raw = "Here you go:\n```json\n{\"suggestions\":[],\"correctedText\":\"They're going to the park\"}\n```";
        let extraction = request().extract(raw).unwrap();
        assert!(!extraction.is_fallback());
        assert_eq!(extraction.value().corrected_text, "They're going to the park");
    }

    #[test]
    fn missing_fields_default_to_empty_list_and_original_text() {
        let report = request().extract(r#"{"notes":"fine"}"#).unwrap().into_inner();
        assert!(report.suggestions.is_empty());
        assert_eq!(report.corrected_text, "Their going to the park");
    }

    #[test]
    fn fenced_json_is_decoded() {
        let raw = "```json\n{\"suggestions\":[],\"correctedText\":\"They're going to the park\"}\n```";
        let extraction = request().extract(raw).unwrap();
        assert!(!extraction.is_fallback());
        assert_eq!(extraction.value().corrected_text, "They're going to the park");
    }

    #[test]
    fn report_serializes_with_camel_case_field() {
        let report = request().extract(r#"{"suggestions":[],"correctedText":"ok"}"#).unwrap().into_inner();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["correctedText"], "ok");
    }
}
