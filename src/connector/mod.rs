//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Completion clients (Mistral over HTTP, in-process mock)
//! - HTTP service exposing the features
//! - CLI wiring (container, router, controllers)

pub mod adapter;
pub mod api;

pub use adapter::*;
