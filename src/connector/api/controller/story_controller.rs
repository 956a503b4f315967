use anyhow::Result;

use crate::application::{
    ContinueThakumaStory, ExpandStory, GeneratePoetry, GenerateStory, RoleplayAction,
    RoleplayTurn, ThakumaStory,
};
use crate::domain::Mood;

use super::feature_runner::FeatureRunner;
use super::output::{read_text_arg, Rendered};

/// Story, poetry, Thakuma tales and roleplay.
pub struct StoryController<'a> {
    runner: FeatureRunner<'a>,
}

pub struct StoryOptions {
    pub genre: String,
    pub character: String,
    pub setting: String,
    pub sub_genre: Option<String>,
    pub details: Option<String>,
    pub story_format: String,
    pub narrative_style: String,
    pub language: String,
    pub mood: u8,
}

pub struct PoetryOptions {
    pub genre: String,
    pub style: Option<String>,
    pub poet: Option<String>,
    pub lines: u32,
    pub mood: u8,
    pub language: String,
}

impl<'a> StoryController<'a> {
    pub fn new(runner: FeatureRunner<'a>) -> Self {
        Self { runner }
    }

    pub async fn story(&self, options: StoryOptions) -> Result<Rendered> {
        let feature = GenerateStory {
            genre: options.genre,
            sub_genre: options.sub_genre,
            character_name: options.character,
            setting: options.setting,
            additional_details: options.details,
            story_format: options.story_format,
            narrative_style: options.narrative_style,
            language: options.language,
            mood: Mood::new(options.mood)?,
        };
        self.runner.run(feature).await
    }

    pub async fn expand(&self, story: String, language: String) -> Result<Rendered> {
        let feature = ExpandStory {
            current_story: read_text_arg(story)?,
            language,
        };
        self.runner.run(feature).await
    }

    pub async fn poetry(&self, options: PoetryOptions) -> Result<Rendered> {
        let feature = GeneratePoetry {
            genre: options.genre,
            poetic_style: options.style,
            poet: options.poet,
            number_of_lines: options.lines,
            mood: Mood::new(options.mood)?,
            language: options.language,
        };
        self.runner.run(feature).await
    }

    pub async fn thakuma(&self) -> Result<Rendered> {
        self.runner.run(ThakumaStory::default()).await
    }

    pub async fn continue_thakuma(&self, story: String, question: String) -> Result<Rendered> {
        let feature = ContinueThakumaStory {
            current_story: read_text_arg(story)?,
            question,
        };
        self.runner.run(feature).await
    }

    pub async fn roleplay(
        &self,
        input: String,
        continue_story: bool,
        context: Option<String>,
    ) -> Result<Rendered> {
        let action = if continue_story {
            RoleplayAction::Continue
        } else {
            RoleplayAction::Start
        };
        let context = context.map(read_text_arg).transpose()?;
        self.runner
            .run(RoleplayTurn {
                input,
                action,
                context,
            })
            .await
    }
}
