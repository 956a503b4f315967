//! # Application Layer
//!
//! The feature catalogue, response extraction, and the use case that runs a
//! feature against a completion client.

pub mod extraction;
pub mod features;
pub mod interfaces;
pub mod use_cases;

pub use extraction::Extraction;
pub use features::*;
pub use interfaces::*;
pub use use_cases::*;
