use crate::core::normalize::normalize;
use crate::core::render::render;
use crate::core::sanitize::file_name;
use crate::core::{
    ConferenceSeries, ConfigProvider, GenerationReport, NormalizedFeed, Pipeline, RawConference,
    RenderedPage, Storage, YearInstance,
};
use crate::utils::error::{PagesError, Result};
use reqwest::Client;
use std::collections::HashSet;

pub const STYLESHEET_FILE: &str = "style.css";

/// Fetches the conference feed, renders one page per conference edition and
/// writes the pages plus the shared stylesheet to storage.
pub struct ConferencePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> ConferencePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            client: Client::new(),
        }
    }

    /// Renders one conference edition into a page named after it.
    pub fn render_page(&self, series: &ConferenceSeries, instance: &YearInstance) -> RenderedPage {
        RenderedPage {
            file_name: file_name(&series.file_title, &instance.year),
            html: render(
                self.config.page_template(),
                series,
                instance,
                self.config.escape_html(),
            ),
        }
    }
}

/// Decodes a feed body: UTF-8, optional byte-order mark, YAML list of
/// conference mappings. Entries that are not mappings are skipped.
pub fn parse_feed(body: Vec<u8>) -> Result<Vec<RawConference>> {
    let text = String::from_utf8(body)?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);
    let entries: Vec<serde_yaml::Value> = serde_yaml::from_str(text)?;

    Ok(entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_yaml::from_value(entry) {
            Ok(conference) => Some(conference),
            Err(e) => {
                tracing::warn!("Skipping feed entry {}: {}", index, e);
                None
            }
        })
        .collect())
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ConferencePipeline<S, C> {
    async fn extract(&self) -> Result<Vec<RawConference>> {
        let url = self.config.feed_url();
        tracing::debug!("Fetching conference feed from: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| PagesError::Fetch {
                url: url.to_string(),
                source,
            })?;

        tracing::debug!("Feed response status: {}", response.status());
        if !response.status().is_success() {
            return Err(PagesError::HttpStatus {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|source| PagesError::Fetch {
            url: url.to_string(),
            source,
        })?;
        tracing::debug!("Feed body is {} bytes", body.len());

        parse_feed(body.to_vec())
    }

    async fn transform(&self, data: Vec<RawConference>) -> Result<NormalizedFeed> {
        let mut feed = NormalizedFeed::default();

        for raw in &data {
            let series = normalize(raw);
            if series.instances.is_empty() {
                tracing::debug!("Skipping '{}': no editions listed", series.title);
                feed.skipped_series += 1;
                continue;
            }
            feed.series.push(series);
        }

        Ok(feed)
    }

    /// Writes the stylesheet, then renders and writes each edition in turn so
    /// only one page is held in memory at a time.
    async fn load(&self, feed: NormalizedFeed) -> Result<GenerationReport> {
        self.storage.prepare().await?;

        self.storage
            .write_file(STYLESHEET_FILE, self.config.stylesheet().as_bytes())
            .await?;
        let stylesheet_path = self.storage.location(STYLESHEET_FILE);
        tracing::info!("CSS file saved: {}", stylesheet_path);

        let mut seen = HashSet::new();
        let mut page_paths = Vec::new();
        for series in &feed.series {
            for instance in &series.instances {
                let page = self.render_page(series, instance);
                if !seen.insert(page.file_name.clone()) {
                    // Known limitation: the later page replaces the earlier one.
                    tracing::debug!("File name collision on '{}', overwriting", page.file_name);
                }

                self.storage
                    .write_file(&page.file_name, page.html.as_bytes())
                    .await?;
                let path = self.storage.location(&page.file_name);
                tracing::info!("Generated: {}", path);
                page_paths.push(path);
            }
        }

        Ok(GenerationReport {
            output_dir: self.config.output_dir().to_string(),
            stylesheet_path,
            page_paths,
            skipped_series: feed.skipped_series,
        })
    }
}
