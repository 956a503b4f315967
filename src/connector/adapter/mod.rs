mod http_server;
mod mistral_client;
mod mock_completion;

pub use http_server::*;
pub use mistral_client::*;
pub use mock_completion::*;
