use crate::domain::model::{ConferenceSeries, GenerationReport, RawConference};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    /// Makes sure the storage root exists. Safe to call repeatedly.
    fn prepare(&self) -> impl std::future::Future<Output = Result<()>> + Send;

    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;

    /// Human-readable location of `path` inside the storage, used for logs
    /// and the generation report.
    fn location(&self, path: &str) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn feed_url(&self) -> &str;
    fn output_dir(&self) -> &str;
    fn stylesheet(&self) -> &str;
    fn page_template(&self) -> &str;
    fn escape_html(&self) -> bool;
}

/// The output of the transform step: series with at least one edition, in
/// feed order. Pages are rendered from it one at a time during load.
#[derive(Debug, Clone, Default)]
pub struct NormalizedFeed {
    pub series: Vec<ConferenceSeries>,
    pub skipped_series: usize,
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<RawConference>>;
    async fn transform(&self, data: Vec<RawConference>) -> Result<NormalizedFeed>;
    async fn load(&self, feed: NormalizedFeed) -> Result<GenerationReport>;
}
