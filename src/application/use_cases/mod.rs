mod retry_policy;
mod run_feature;

pub use retry_policy::*;
pub use run_feature::*;
