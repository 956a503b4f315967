use serde::{Deserialize, Serialize};

use crate::application::extraction::extract_email;
use crate::application::{Extraction, Feature, PlainText};
use crate::domain::{join_sentences, optional_clause, DomainError, EmailDraft, Prompt, Sampling};

use super::require;

const EMAIL_SYSTEM_PROMPT: &str = "You are an expert email writer. Format your response with \"Subject:\" on the \
first line, followed by the subject, then \"Body:\" on a new line, followed by the email content.";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateEmail {
    pub purpose: String,
    /// e.g. formal, friendly, follow-up
    pub email_type: String,
    #[serde(default)]
    pub additional_details: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedEmail {
    pub email: EmailDraft,
}

impl PlainText for GeneratedEmail {
    fn plain_text(&self) -> String {
        self.email.to_string()
    }
}

impl Feature for GenerateEmail {
    type Output = GeneratedEmail;

    fn name(&self) -> &'static str {
        "generate-email"
    }

    fn build_prompt(&self) -> Result<Prompt, DomainError> {
        require("Purpose", &self.purpose)?;

        let user = join_sentences([
            format!(
                "Write a {} email for the following purpose: \"{}\".",
                self.email_type, self.purpose
            ),
            optional_clause(self.additional_details.as_deref(), |d| {
                format!("Additional details: {d}")
            }),
        ]);

        Ok(Prompt::new(EMAIL_SYSTEM_PROMPT, user))
    }

    fn sampling(&self) -> Sampling {
        Sampling::new(0.7, 1000)
    }

    fn extract(&self, text: &str) -> Result<Extraction<GeneratedEmail>, DomainError> {
        let email = extract_email(text)?;
        Ok(Extraction::Parsed(GeneratedEmail { email }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> GenerateEmail {
        GenerateEmail {
            purpose: "Ask for a deadline extension".to_string(),
            email_type: "formal".to_string(),
            additional_details: None,
        }
    }

    #[test]
    fn details_clause_is_optional() {
        let user = request().build_prompt().unwrap().user().to_string();
        assert_eq!(
            user,
            "Write a formal email for the following purpose: \"Ask for a deadline extension\"."
        );

        let mut with_details = request();
        with_details.additional_details = Some("Two more days".to_string());
        let user = with_details.build_prompt().unwrap().user().to_string();
        assert!(user.ends_with("\". Additional details: Two more days"));
    }

    #[test]
    fn extraction_splits_subject_and_body() {
        let email = request()
            .extract("Subject: Extension request\nBody: Dear Professor,\nCould I have two more days?")
            .unwrap()
            .into_inner()
            .email;
        assert_eq!(email.subject, "Extension request");
        assert_eq!(email.body, "Dear Professor,\nCould I have two more days?");
    }

    #[test]
    fn unlabeled_text_is_a_parse_error() {
        let err = request().extract("Dear Professor, ...").unwrap_err();
        assert!(err.is_parse_error());
    }

    #[test]
    fn payload_nests_email_object() {
        let output = GeneratedEmail {
            email: EmailDraft {
                subject: "Hello".to_string(),
                body: "World".to_string(),
            },
        };
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json, serde_json::json!({"email": {"subject": "Hello", "body": "World"}}));
    }
}
