//! # Domain Layer
//!
//! Chat-completion wire shapes, prompts, moods and the uniform feature result.
//! This layer is independent of external frameworks and infrastructure.

mod error;
pub mod models;

pub use error::*;
pub use models::*;
