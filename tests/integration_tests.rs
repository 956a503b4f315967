//! Integration tests for the feature pipeline.
//!
//! These run every layer above the HTTP transport against an in-process
//! completion client.

use std::sync::Arc;

use serde_json::{json, Value};

use thakumar_jhuli::{
    ApiKey, CheckGrammar, CompletionClient, DomainError, GenerateEmail, GenerateStory,
    MockCompletionClient, Mood, ParaphraseText, Role, RunFeatureUseCase, SuggestBooks,
    ThakumaStory, DEFAULT_MODEL,
};

fn use_case(client: Arc<MockCompletionClient>) -> RunFeatureUseCase {
    let client: Arc<dyn CompletionClient> = client;
    RunFeatureUseCase::new(client, ApiKey::new("test-key"), DEFAULT_MODEL)
}

fn story_request(mood: u8) -> GenerateStory {
    GenerateStory {
        genre: "Fantasy".to_string(),
        sub_genre: None,
        character_name: "Mira".to_string(),
        setting: "a floating city".to_string(),
        additional_details: None,
        story_format: "short_story".to_string(),
        narrative_style: "third_person".to_string(),
        language: "english".to_string(),
        mood: Mood::new(mood).unwrap(),
    }
}

#[tokio::test]
async fn test_story_prompt_carries_every_parameter() {
    let client = Arc::new(MockCompletionClient::with_text("Once upon a time..."));
    let result = use_case(client.clone()).execute(&story_request(80)).await;

    assert_eq!(result.payload().unwrap().story, "Once upon a time...");

    let request = client.last_request().expect("client was called");
    assert_eq!(request.model(), "mistral-tiny");
    assert_eq!(request.temperature(), 0.7);
    assert_eq!(request.max_tokens(), 1000);

    let user = request
        .messages()
        .iter()
        .find(|m| m.role == Role::User)
        .expect("user message");
    for expected in [
        "Fantasy",
        "Mira",
        "a floating city",
        "short_story",
        "third_person",
        "english",
        "lighter and more cheerful",
    ] {
        assert!(
            user.content.contains(expected),
            "prompt {:?} is missing {expected:?}",
            user.content
        );
    }
}

#[tokio::test]
async fn test_mood_threshold_switches_descriptor() {
    let client = Arc::new(MockCompletionClient::echo());
    let use_case = use_case(client);

    let dark = use_case.execute(&story_request(49)).await;
    assert!(dark.payload().unwrap().story.contains("darker and more serious"));

    let light = use_case.execute(&story_request(50)).await;
    assert!(light.payload().unwrap().story.contains("lighter and more cheerful"));
}

#[tokio::test]
async fn test_missing_credential_fails_every_feature_without_calling_out() {
    let client = Arc::new(MockCompletionClient::with_text("unused"));
    let dyn_client: Arc<dyn CompletionClient> = client.clone();
    let use_case = RunFeatureUseCase::new(dyn_client, None, DEFAULT_MODEL);

    let expected = json!({
        "success": false,
        "error": "MISTRAL_API_KEY is not set in the environment variables",
    });

    let story = serde_json::to_value(use_case.execute(&story_request(50)).await).unwrap();
    let thakuma = serde_json::to_value(use_case.execute(&ThakumaStory::default()).await).unwrap();
    let paraphrase = serde_json::to_value(
        use_case
            .execute(&ParaphraseText {
                text: "Hello there".to_string(),
            })
            .await,
    )
    .unwrap();

    assert_eq!(story, expected);
    assert_eq!(thakuma, expected);
    assert_eq!(paraphrase, expected);
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn test_grammar_envelope_round_trips_model_json() {
    let raw = r#"{"suggestions":[{"type":"grammar","text":"i is","suggestion":"I am","explanation":"Agreement"}],"correctedText":"I am here."}"#;
    let client = Arc::new(MockCompletionClient::with_text(raw));

    let result = use_case(client)
        .execute(&CheckGrammar {
            content: "i is here.".to_string(),
            writing_style: "casual".to_string(),
        })
        .await;

    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["success"], true);
    assert_eq!(value["correctedText"], "I am here.");
    assert_eq!(
        value["suggestions"],
        json!([{"type":"grammar","text":"i is","suggestion":"I am","explanation":"Agreement"}])
    );
}

#[tokio::test]
async fn test_grammar_falls_back_on_prose() {
    let client = Arc::new(MockCompletionClient::with_text("Looks fine, maybe vary sentence length."));

    let result = use_case(client)
        .execute(&CheckGrammar {
            content: "The cat sat.".to_string(),
            writing_style: "formal".to_string(),
        })
        .await;

    let report = result.payload().unwrap();
    assert_eq!(report.corrected_text, "The cat sat.");
    assert_eq!(report.suggestions.len(), 1);
    assert_eq!(
        report.suggestions[0].suggestion,
        "Looks fine, maybe vary sentence length."
    );
}

#[tokio::test]
async fn test_email_envelope_nests_subject_and_body() {
    let client = Arc::new(MockCompletionClient::with_text("Subject: Hello\nBody: World"));

    let result = use_case(client)
        .execute(&GenerateEmail {
            purpose: "Greeting".to_string(),
            email_type: "formal".to_string(),
            additional_details: None,
        })
        .await;

    let value: Value = serde_json::to_value(&result).unwrap();
    assert_eq!(
        value,
        json!({"success": true, "email": {"subject": "Hello", "body": "World"}})
    );
}

#[tokio::test]
async fn test_email_without_body_label_is_a_failure() {
    let client = Arc::new(MockCompletionClient::with_text("Subject: Hello\nWorld"));

    let result = use_case(client)
        .execute(&GenerateEmail {
            purpose: "Greeting".to_string(),
            email_type: "formal".to_string(),
            additional_details: None,
        })
        .await;

    assert_eq!(result.error(), Some("Failed to parse email content properly"));
}

#[tokio::test]
async fn test_book_suggestions_split_lines() {
    let client = Arc::new(MockCompletionClient::with_text(
        "1. Gitanjali\n\n2. Pather Panchali\n   \n3. Chokher Bali\n",
    ));

    let result = use_case(client)
        .execute(&SuggestBooks {
            mood: Some("wistful".to_string()),
            query: None,
        })
        .await;

    assert_eq!(
        result.payload().unwrap().suggestions,
        vec!["1. Gitanjali", "2. Pather Panchali", "3. Chokher Bali"]
    );
}

#[tokio::test]
async fn test_upstream_failure_message_reaches_the_envelope() {
    let client = Arc::new(MockCompletionClient::scripted(vec![Err(
        DomainError::upstream(401, "Unauthorized", json!({"message": "bad key"})),
    )]));

    let result = use_case(client.clone()).execute(&ThakumaStory::default()).await;

    assert_eq!(result.error(), Some("API call failed: 401 Unauthorized"));
    assert_eq!(client.call_count(), 1);
}
