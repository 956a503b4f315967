use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::de::DeserializeOwned;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::application::{
    AnalyzeLiterature, CheckGrammar, ContinueThakumaStory, EnhanceWriting, ExpandScientificArticle,
    ExpandStory, ExplainPhilosophy, Feature, GenerateEmail, GeneratePoetry,
    GenerateScientificArticle, GenerateSocialMediaContent, GenerateStory, GetWritingAdvice,
    ParaphraseText, ReviewBook, RoleplayTurn, RunFeatureUseCase, StoryText, SuggestBooks,
    ThakumaStory,
};
use crate::domain::FeatureResult;

type SharedUseCase = Arc<RunFeatureUseCase>;

/// JSON-over-HTTP front for every feature.
///
/// `POST /api/{feature}` takes the camelCase request body and always answers
/// `200` with the uniform result envelope, for failures too. Bodies that do not
/// decode into the request type are rejected by the extractor with a 4xx.
#[derive(Clone)]
pub struct FeatureServer {
    use_case: SharedUseCase,
}

impl FeatureServer {
    pub fn new(use_case: SharedUseCase) -> Self {
        Self { use_case }
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(health))
            .route("/api/generate-story", post(run_feature::<GenerateStory>))
            .route("/api/expand-story", post(run_feature::<ExpandStory>))
            .route("/api/generate-poetry", post(run_feature::<GeneratePoetry>))
            .route("/api/thakuma-story", post(start_thakuma_story))
            .route(
                "/api/continue-thakuma-story",
                post(run_feature::<ContinueThakumaStory>),
            )
            .route("/api/roleplay", post(run_feature::<RoleplayTurn>))
            .route("/api/check-grammar", post(run_feature::<CheckGrammar>))
            .route("/api/writing-advice", post(run_feature::<GetWritingAdvice>))
            .route("/api/enhance-writing", post(run_feature::<EnhanceWriting>))
            .route("/api/paraphrase", post(run_feature::<ParaphraseText>))
            .route(
                "/api/analyze-literature",
                post(run_feature::<AnalyzeLiterature>),
            )
            .route(
                "/api/explain-philosophy",
                post(run_feature::<ExplainPhilosophy>),
            )
            .route("/api/review-book", post(run_feature::<ReviewBook>))
            .route("/api/suggest-books", post(run_feature::<SuggestBooks>))
            .route("/api/generate-email", post(run_feature::<GenerateEmail>))
            .route(
                "/api/social-media",
                post(run_feature::<GenerateSocialMediaContent>),
            )
            .route(
                "/api/scientific-article",
                post(run_feature::<GenerateScientificArticle>),
            )
            .route(
                "/api/expand-scientific-article",
                post(run_feature::<ExpandScientificArticle>),
            )
            .with_state(self.use_case.clone())
    }

    /// Serve until `shutdown` is cancelled.
    pub async fn serve(
        &self,
        listener: TcpListener,
        shutdown: CancellationToken,
    ) -> std::io::Result<()> {
        if let Ok(addr) = listener.local_addr() {
            info!("Feature server listening on http://{addr}");
        }

        axum::serve(listener, self.router())
            .with_graceful_shutdown(async move { shutdown.cancelled().await })
            .await
    }
}

async fn health() -> &'static str {
    "ok"
}

/// A dropped connection drops this future, which abandons the upstream call.
async fn run_feature<F>(
    State(use_case): State<SharedUseCase>,
    Json(feature): Json<F>,
) -> Json<FeatureResult<F::Output>>
where
    F: Feature + DeserializeOwned + 'static,
{
    Json(use_case.execute(&feature).await)
}

async fn start_thakuma_story(
    State(use_case): State<SharedUseCase>,
) -> Json<FeatureResult<StoryText>> {
    Json(use_case.execute(&ThakumaStory::default()).await)
}
