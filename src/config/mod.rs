#[cfg(feature = "cli")]
pub mod cli;
pub mod file;

use crate::core::render::{DEFAULT_PAGE_TEMPLATE, DEFAULT_STYLESHEET, PLACEHOLDERS};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_url, Validate};

pub const DEFAULT_FEED_URL: &str = "https://ccfddl.com/conference/allconf.yml";
pub const DEFAULT_OUTPUT_DIR: &str = "conference_htmls";

/// Everything a generation run needs, resolved up front and handed to the
/// pipeline.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub feed_url: String,
    pub output_dir: String,
    pub stylesheet: String,
    pub page_template: String,
    pub escape_html: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            stylesheet: DEFAULT_STYLESHEET.to_string(),
            page_template: DEFAULT_PAGE_TEMPLATE.to_string(),
            escape_html: false,
        }
    }
}

impl ConfigProvider for SiteConfig {
    fn feed_url(&self) -> &str {
        &self.feed_url
    }

    fn output_dir(&self) -> &str {
        &self.output_dir
    }

    fn stylesheet(&self) -> &str {
        &self.stylesheet
    }

    fn page_template(&self) -> &str {
        &self.page_template
    }

    fn escape_html(&self) -> bool {
        self.escape_html
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        validate_url("feed_url", &self.feed_url)?;
        validate_path("output_dir", &self.output_dir)?;
        validate_non_empty_string("page_template", &self.page_template)?;

        let uses_placeholder = PLACEHOLDERS
            .iter()
            .any(|name| self.page_template.contains(&format!("{{{{{}}}}}", name)));
        if !uses_placeholder {
            tracing::warn!("Page template has no placeholders; every page will be identical");
        }

        Ok(())
    }
}
