mod chat;
mod feature_result;
mod mood;
mod prompt;
mod writing;

pub use chat::*;
pub use feature_result::*;
pub use mood::*;
pub use prompt::*;
pub use writing::*;
