use serde::{Deserialize, Serialize};

use crate::application::{Extraction, Feature, PlainText};
use crate::domain::{DomainError, Prompt, Sampling};

use super::require;

const SOCIAL_SYSTEM_PROMPT: &str = "You are an expert social media content creator capable of generating engaging \
content for various platforms and purposes.";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSocialMediaContent {
    /// e.g. tweet, caption, thread
    pub content_type: String,
    pub tone: String,
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialMediaPost {
    pub content: String,
}

impl PlainText for SocialMediaPost {
    fn plain_text(&self) -> String {
        self.content.clone()
    }
}

impl Feature for GenerateSocialMediaContent {
    type Output = SocialMediaPost;

    fn name(&self) -> &'static str {
        "social-media"
    }

    fn build_prompt(&self) -> Result<Prompt, DomainError> {
        require("Prompt", &self.prompt)?;

        Ok(Prompt::new(
            SOCIAL_SYSTEM_PROMPT,
            format!(
                "Generate a {} for social media with a {} tone based on the following prompt: \"{}\".",
                self.content_type, self.tone, self.prompt
            ),
        ))
    }

    fn sampling(&self) -> Sampling {
        Sampling::new(0.7, 500)
    }

    fn extract(&self, text: &str) -> Result<Extraction<SocialMediaPost>, DomainError> {
        Ok(Extraction::Parsed(SocialMediaPost {
            content: text.to_string(),
        }))
    }
}
