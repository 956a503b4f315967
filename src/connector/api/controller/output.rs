use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::application::PlainText;
use crate::cli::OutputFormat;
use crate::domain::FeatureResult;

/// Argument value that means "read this text from stdin".
pub const STDIN_MARKER: &str = "-";

/// A feature result rendered for the terminal or a saved file.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub text: String,
    pub success: bool,
}

pub fn render<T>(result: &FeatureResult<T>, format: OutputFormat) -> Result<Rendered>
where
    T: Serialize + PlainText,
{
    let text = match format {
        OutputFormat::Json => serde_json::to_string_pretty(result)?,
        OutputFormat::Text => match result {
            FeatureResult::Success(payload) => payload.plain_text(),
            FeatureResult::Failure { error } => format!("Error: {error}"),
        },
    };

    Ok(Rendered {
        text,
        success: result.is_success(),
    })
}

/// Write a successful result to `path`. Failures are never saved.
pub fn save(path: &Path, rendered: &Rendered) -> Result<bool> {
    if !rendered.success {
        return Ok(false);
    }
    std::fs::write(path, &rendered.text)
        .with_context(|| format!("Failed to write output to {}", path.display()))?;
    Ok(true)
}

/// Resolve a text argument, reading stdin when it is `-`.
pub fn read_text_arg(value: String) -> Result<String> {
    if value != STDIN_MARKER {
        return Ok(value);
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read text from stdin")?;
    Ok(buffer)
}

/// Parse a lowercase choice (`"poem"`, `"long"`, ...) into its serde enum.
pub fn parse_choice<T: DeserializeOwned>(value: &str) -> Result<T> {
    serde_json::from_value(serde_json::Value::String(value.to_string()))
        .with_context(|| format!("Unsupported value: {value}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ArticleLength, BookReview};

    fn review() -> FeatureResult<BookReview> {
        FeatureResult::Success(BookReview {
            review: "A desert epic.".to_string(),
        })
    }

    #[test]
    fn json_format_renders_the_envelope() {
        let rendered = render(&review(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered.text).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["review"], "A desert epic.");
        assert!(rendered.success);
    }

    #[test]
    fn text_format_renders_plain_payload_or_error() {
        let rendered = render(&review(), OutputFormat::Text).unwrap();
        assert_eq!(rendered.text, "A desert epic.");

        let failed: FeatureResult<BookReview> = FeatureResult::failure("boom");
        let rendered = render(&failed, OutputFormat::Text).unwrap();
        assert_eq!(rendered.text, "Error: boom");
        assert!(!rendered.success);
    }

    #[test]
    fn save_writes_only_successful_results() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("review.txt");

        let failed = Rendered {
            text: "Error: boom".to_string(),
            success: false,
        };
        assert!(!save(&path, &failed).unwrap());
        assert!(!path.exists());

        let rendered = render(&review(), OutputFormat::Text).unwrap();
        assert!(save(&path, &rendered).unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "A desert epic.");
    }

    #[test]
    fn choices_use_wire_names() {
        let length: ArticleLength = parse_choice("long").unwrap();
        assert_eq!(length, ArticleLength::Long);
        assert!(parse_choice::<ArticleLength>("epic").is_err());
    }
}
