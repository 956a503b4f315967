use anyhow::Result;
use tokio_util::sync::CancellationToken;

use crate::application::Feature;
use crate::cli::OutputFormat;

use super::super::Container;
use super::output::{render, Rendered};

/// Runs one feature through the container's use case and renders the result.
#[derive(Clone)]
pub struct FeatureRunner<'a> {
    container: &'a Container,
    format: OutputFormat,
    cancel: CancellationToken,
}

impl<'a> FeatureRunner<'a> {
    pub fn new(container: &'a Container, format: OutputFormat, cancel: CancellationToken) -> Self {
        Self {
            container,
            format,
            cancel,
        }
    }

    pub async fn run<F: Feature>(&self, feature: F) -> Result<Rendered> {
        let use_case = self.container.run_feature_use_case();
        let result = use_case.execute_with_cancel(&feature, &self.cancel).await;
        render(&result, self.format)
    }
}
