use anyhow::Result;
use tokio_util::sync::CancellationToken;

use crate::cli::{Commands, OutputFormat};

use super::container::Container;
use super::controller::{
    ArticleOptions, CompositionController, EditingController, FeatureRunner, PoetryOptions,
    ReadingController, Rendered, StoryController, StoryOptions,
};

pub struct Router<'a> {
    story_controller: StoryController<'a>,
    editing_controller: EditingController<'a>,
    reading_controller: ReadingController<'a>,
    composition_controller: CompositionController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container, format: OutputFormat, cancel: CancellationToken) -> Self {
        let runner = FeatureRunner::new(container, format, cancel);
        Self {
            story_controller: StoryController::new(runner.clone()),
            editing_controller: EditingController::new(runner.clone()),
            reading_controller: ReadingController::new(runner.clone()),
            composition_controller: CompositionController::new(runner),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<Rendered> {
        match command {
            Commands::Story {
                genre,
                character,
                setting,
                sub_genre,
                details,
                story_format,
                narrative_style,
                language,
                mood,
            } => {
                self.story_controller
                    .story(StoryOptions {
                        genre,
                        character,
                        setting,
                        sub_genre,
                        details,
                        story_format,
                        narrative_style,
                        language,
                        mood,
                    })
                    .await
            }
            Commands::ExpandStory { story, language } => {
                self.story_controller.expand(story, language).await
            }
            Commands::Poetry {
                genre,
                style,
                poet,
                lines,
                mood,
                language,
            } => {
                self.story_controller
                    .poetry(PoetryOptions {
                        genre,
                        style,
                        poet,
                        lines,
                        mood,
                        language,
                    })
                    .await
            }
            Commands::Thakuma => self.story_controller.thakuma().await,
            Commands::ContinueThakuma { story, question } => {
                self.story_controller.continue_thakuma(story, question).await
            }
            Commands::Roleplay {
                input,
                continue_story,
                context,
            } => {
                self.story_controller
                    .roleplay(input, continue_story, context)
                    .await
            }
            Commands::Grammar { content, style } => {
                self.editing_controller.grammar(content, style).await
            }
            Commands::Advice { content } => self.editing_controller.advice(content).await,
            Commands::Enhance {
                content,
                kind,
                language,
            } => {
                self.editing_controller
                    .enhance(content, &kind, &language)
                    .await
            }
            Commands::Paraphrase { text } => self.editing_controller.paraphrase(text).await,
            Commands::Analyze {
                content,
                mode,
                kind,
            } => self.reading_controller.analyze(content, &mode, &kind).await,
            Commands::Philosophy {
                concept,
                philosopher,
                quote,
            } => {
                self.reading_controller
                    .philosophy(concept, philosopher, quote)
                    .await
            }
            Commands::Review { title } => self.reading_controller.review(title).await,
            Commands::Books { mood, query } => self.reading_controller.books(mood, query).await,
            Commands::Email {
                purpose,
                kind,
                details,
            } => {
                self.composition_controller
                    .email(purpose, kind, details)
                    .await
            }
            Commands::Social { prompt, kind, tone } => {
                self.composition_controller.social(prompt, kind, tone).await
            }
            Commands::Article {
                topic,
                field,
                length,
                tone,
                keywords,
                suggestions,
            } => {
                self.composition_controller
                    .article(ArticleOptions {
                        topic,
                        field,
                        length,
                        tone,
                        keywords,
                        suggestions,
                    })
                    .await
            }
            Commands::ExpandArticle {
                article,
                suggestions,
            } => {
                self.composition_controller
                    .expand_article(article, suggestions)
                    .await
            }
            Commands::Serve { .. } => unreachable!("Serve command is handled separately in main"),
        }
    }
}
