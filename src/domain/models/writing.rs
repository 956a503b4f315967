use serde::{Deserialize, Serialize};

/// One correction proposed by the grammar checker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarSuggestion {
    /// grammar, spelling, style or punctuation
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Original passage
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub suggestion: String,
    #[serde(default)]
    pub explanation: String,
}

/// One item of writing-coach advice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WritingAdvice {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub suggestion: String,
    #[serde(default)]
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailDraft {
    pub subject: String,
    pub body: String,
}

impl std::fmt::Display for EmailDraft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Subject: {}\n\n{}", self.subject, self.body)
    }
}
