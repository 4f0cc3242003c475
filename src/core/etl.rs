use crate::core::{GenerationReport, Pipeline};
use crate::utils::error::Result;

pub struct GenerationEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> GenerationEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs fetch, render and write in order. The first error ends the run;
    /// files written before it stay on disk.
    pub async fn run(&self) -> Result<GenerationReport> {
        tracing::info!("Fetching conference feed...");
        let conferences = self.pipeline.extract().await?;
        tracing::info!("Fetched {} conferences", conferences.len());

        let feed = self.pipeline.transform(conferences).await?;
        tracing::info!(
            "Normalized {} conferences ({} without editions)",
            feed.series.len(),
            feed.skipped_series
        );

        let report = self.pipeline.load(feed).await?;
        tracing::debug!(
            "{} pages written to: {}",
            report.page_paths.len(),
            report.output_dir
        );

        Ok(report)
    }
}
