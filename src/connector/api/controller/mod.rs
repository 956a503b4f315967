pub mod composition_controller;
pub mod editing_controller;
pub mod feature_runner;
pub mod output;
pub mod reading_controller;
pub mod story_controller;

pub use composition_controller::{ArticleOptions, CompositionController};
pub use editing_controller::EditingController;
pub use feature_runner::FeatureRunner;
pub use output::{render, save, Rendered};
pub use reading_controller::ReadingController;
pub use story_controller::{PoetryOptions, StoryController, StoryOptions};
