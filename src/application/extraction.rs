//! Turning assistant text into typed payloads.
//!
//! Structured features try a strict decode first and fall back to a synthetic
//! record that wraps the raw text, so a malformed but non-empty answer still
//! produces output. The fallback is reported as [`Extraction::Fallback`], not as
//! an error.

use std::sync::OnceLock;

use regex::Regex;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::domain::{DomainError, EmailDraft};

/// Result of reading a payload out of model text.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction<T> {
    /// The text matched the expected structure.
    Parsed(T),
    /// Structured decoding failed and the payload was synthesised from the raw text.
    Fallback(T),
}

impl<T> Extraction<T> {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }

    pub fn value(&self) -> &T {
        match self {
            Self::Parsed(v) | Self::Fallback(v) => v,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            Self::Parsed(v) | Self::Fallback(v) => v,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Extraction<U> {
        match self {
            Self::Parsed(v) => Extraction::Parsed(f(v)),
            Self::Fallback(v) => Extraction::Fallback(f(v)),
        }
    }
}

/// Run `decode` on `raw`; when it fails, build the payload with `fallback` instead.
pub fn best_effort<T>(
    raw: &str,
    decode: impl FnOnce(&str) -> Result<T, DomainError>,
    fallback: impl FnOnce(&str) -> T,
) -> Extraction<T> {
    match decode(raw) {
        Ok(value) => Extraction::Parsed(value),
        Err(e) => {
            warn!("Structured extraction failed ({e}); wrapping raw model text instead");
            Extraction::Fallback(fallback(raw))
        }
    }
}

/// Decode JSON from model text.
///
/// The whole (trimmed) text is parsed first. If that fails, the span from the
/// first `open` to the last `close` delimiter is tried, which tolerates code
/// fences and a sentence of prose around the payload. A recovered span must be
/// a non-empty object or array.
pub fn decode_json<T: DeserializeOwned>(
    raw: &str,
    open: char,
    close: char,
) -> Result<T, DomainError> {
    decode_json_where(raw, open, close, |_| true)
}

/// Like [`decode_json`], but a recovered span is also checked with `accept`.
///
/// `accept` never applies to a strict parse of the whole text.
pub fn decode_json_where<T: DeserializeOwned>(
    raw: &str,
    open: char,
    close: char,
    accept: impl Fn(&Value) -> bool,
) -> Result<T, DomainError> {
    let trimmed = raw.trim();
    let strict_err = match serde_json::from_str::<T>(trimmed) {
        Ok(value) => return Ok(value),
        Err(e) => e,
    };

    if let (Some(s), Some(e)) = (trimmed.find(open), trimmed.rfind(close)) {
        if s < e {
            if let Ok(value) = serde_json::from_str::<Value>(&trimmed[s..=e]) {
                if is_populated(&value) && accept(&value) {
                    if let Ok(decoded) = serde_json::from_value::<T>(value) {
                        return Ok(decoded);
                    }
                }
            }
        }
    }

    Err(DomainError::parse(format!("model text is not valid JSON: {strict_err}")))
}

/// `{}` and `[]` inside prose are punctuation, not a payload.
fn is_populated(value: &Value) -> bool {
    match value {
        Value::Object(map) => !map.is_empty(),
        Value::Array(items) => !items.is_empty(),
        _ => false,
    }
}

fn subject_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)Subject:\s*(.*)").expect("valid subject pattern"))
}

fn body_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?is)Body:\s*(.*)").expect("valid body pattern"))
}

/// Split an email draft on its `Subject:` and `Body:` labels.
///
/// The subject is the rest of its line, the body everything after its label.
/// Both labels are required; there is no fallback.
pub fn extract_email(raw: &str) -> Result<EmailDraft, DomainError> {
    let subject = subject_pattern().captures(raw).and_then(|c| c.get(1));
    let body = body_pattern().captures(raw).and_then(|c| c.get(1));

    match (subject, body) {
        (Some(subject), Some(body)) => Ok(EmailDraft {
            subject: subject.as_str().trim().to_string(),
            body: body.as_str().trim().to_string(),
        }),
        _ => {
            warn!("Failed to parse email content: {raw}");
            Err(DomainError::parse("Failed to parse email content properly"))
        }
    }
}

/// Non-blank lines of the text, in order.
pub fn split_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn best_effort_marks_fallback() {
        let parsed = best_effort("7", |s| s.parse::<i32>().map_err(|e| DomainError::parse(e.to_string())), |_| 0);
        assert_eq!(parsed, Extraction::Parsed(7));

        let fallback = best_effort("seven", |s| s.parse::<i32>().map_err(|e| DomainError::parse(e.to_string())), |s| s.len() as i32);
        assert_eq!(fallback, Extraction::Fallback(5));
    }

    #[test]
    fn decode_json_tolerates_code_fences() {
        let text = "```json\n[\"a\", \"b\"]\n```";
        let values: Vec<String> = decode_json(text, '[', ']').unwrap();
        assert_eq!(values, vec!["a", "b"]);
    }

    #[test]
    fn decode_json_ignores_empty_delimiters_in_prose() {
        let result = decode_json::<Vec<String>>("Your list [] is empty; add detail.", '[', ']');
        assert!(result.unwrap_err().is_parse_error());

        let result = decode_json::<Value>("Replace the placeholder {} with a name.", '{', '}');
        assert!(result.unwrap_err().is_parse_error());
    }

    #[test]
    fn strict_parse_accepts_empty_payloads() {
        let values: Vec<String> = decode_json("[]", '[', ']').unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn decode_json_where_checks_only_recovered_spans() {
        let has_name = |v: &Value| v.get("name").is_some();

        let strict: Value = decode_json_where(r#"{"other":1}"#, '{', '}', has_name).unwrap();
        assert_eq!(strict["other"], 1);

        let rejected = decode_json_where::<Value>(r#"See {"other":1} above"#, '{', '}', has_name);
        assert!(rejected.is_err());

        let accepted: Value =
            decode_json_where(r#"See {"name":"x"} above"#, '{', '}', has_name).unwrap();
        assert_eq!(accepted["name"], "x");
    }

    #[test]
    fn decode_json_rejects_prose() {
        let result = decode_json::<Vec<String>>("no structure here", '[', ']');
        assert!(result.unwrap_err().is_parse_error());
    }

    #[test]
    fn email_splits_on_labels() {
        let email = extract_email("Subject: Hello\nBody: World").unwrap();
        assert_eq!(email.subject, "Hello");
        assert_eq!(email.body, "World");
    }

    #[test]
    fn email_labels_are_case_insensitive_and_body_spans_lines() {
        let email =
            extract_email("subject:  Team lunch \n\nBODY:\nHi all,\n\nSee you at noon.\n").unwrap();
        assert_eq!(email.subject, "Team lunch");
        assert_eq!(email.body, "Hi all,\n\nSee you at noon.");
    }

    #[test]
    fn email_without_body_label_is_a_parse_error() {
        let err = extract_email("Subject: Hello\nWorld").unwrap_err();
        assert!(err.is_parse_error());
        assert_eq!(err.to_string(), "Failed to parse email content properly");
    }

    #[test]
    fn split_lines_drops_blank_lines() {
        let lines = split_lines("1. Dune - Frank Herbert\n\n2. Emma - Jane Austen\n   \n");
        assert_eq!(lines, vec!["1. Dune - Frank Herbert", "2. Emma - Jane Austen"]);
    }
}
