mod completion_client;
mod feature;

pub use completion_client::*;
pub use feature::*;
