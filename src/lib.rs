pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    ApiKey, CompletionClient, Extraction, Feature, PlainText, RetryPolicy, RunFeatureUseCase,
    DEFAULT_MODEL,
};

pub use application::{
    AnalyzeLiterature, CheckGrammar, ContinueThakumaStory, EnhanceWriting,
    ExpandScientificArticle, ExpandStory, ExplainPhilosophy, GenerateEmail, GeneratePoetry,
    GenerateScientificArticle, GenerateSocialMediaContent, GenerateStory, GetWritingAdvice,
    ParaphraseText, ReviewBook, RoleplayTurn, SuggestBooks, ThakumaStory,
};

pub use cli::{Commands, OutputFormat};

pub use connector::{FeatureServer, MistralClient, MockCompletionClient};

pub use domain::{
    ChatMessage, CompletionRequest, CompletionResponse, DomainError, EmailDraft, FeatureResult,
    GrammarSuggestion, Mood, Prompt, Role, Sampling, WritingAdvice,
};
