use serde::{Deserialize, Serialize};

use super::ChatMessage;

/// The system/user message pair every feature sends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    system: String,
    user: String,
}

impl Prompt {
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
        }
    }

    pub fn system(&self) -> &str {
        &self.system
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn into_messages(self) -> Vec<ChatMessage> {
        vec![ChatMessage::system(self.system), ChatMessage::user(self.user)]
    }
}

/// Sampling parameters a feature requests from the model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sampling {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Sampling {
    pub const fn new(temperature: f32, max_tokens: u32) -> Self {
        Self {
            temperature,
            max_tokens,
        }
    }
}

/// Render an optional clause, or nothing when the value is absent or blank.
pub fn optional_clause(value: Option<&str>, render: impl FnOnce(&str) -> String) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => render(v),
        _ => String::new(),
    }
}

/// Join sentences with single spaces, skipping empty ones.
pub fn join_sentences<I, S>(sentences: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    sentences
        .into_iter()
        .filter(|s| !s.as_ref().trim().is_empty())
        .map(|s| s.as_ref().trim().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_clause_vanishes_when_absent_or_blank() {
        assert_eq!(optional_clause(None, |v| format!(" ({v})")), "");
        assert_eq!(optional_clause(Some("   "), |v| format!(" ({v})")), "");
        assert_eq!(optional_clause(Some("Epic"), |v| format!(" ({v})")), " (Epic)");
    }

    #[test]
    fn join_sentences_leaves_no_double_spaces() {
        let joined = join_sentences(["The mood is calm.", "", "Write in english."]);
        assert_eq!(joined, "The mood is calm. Write in english.");
    }

    #[test]
    fn prompt_becomes_system_then_user_message() {
        let messages = Prompt::new("sys", "usr").into_messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0], ChatMessage::system("sys"));
        assert_eq!(messages[1], ChatMessage::user("usr"));
    }
}
