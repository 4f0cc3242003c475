use crate::config::SiteConfig;
use crate::utils::error::{PagesError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Optional TOML configuration file. Every key is optional; missing keys keep
/// the built-in defaults.
///
/// ```toml
/// feed_url = "https://ccfddl.com/conference/allconf.yml"
/// output_dir = "conference_htmls"
/// stylesheet = "theme/style.css"
/// template = "theme/page.html"
/// escape_html = false
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub feed_url: Option<String>,
    pub output_dir: Option<String>,
    pub stylesheet: Option<PathBuf>,
    pub template: Option<PathBuf>,
    pub escape_html: Option<bool>,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| PagesError::Config {
            message: format!("Cannot read config file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| PagesError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Layers this file over `base`. Stylesheet and template paths are read
    /// here so the resulting [`SiteConfig`] holds their contents.
    pub fn apply(self, mut base: SiteConfig) -> Result<SiteConfig> {
        if let Some(feed_url) = self.feed_url {
            base.feed_url = feed_url;
        }
        if let Some(output_dir) = self.output_dir {
            base.output_dir = output_dir;
        }
        if let Some(path) = self.stylesheet {
            base.stylesheet = read_asset("stylesheet", &path)?;
        }
        if let Some(path) = self.template {
            base.page_template = read_asset("template", &path)?;
        }
        if let Some(escape_html) = self.escape_html {
            base.escape_html = escape_html;
        }
        Ok(base)
    }
}

pub(crate) fn read_asset(kind: &str, path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| PagesError::Config {
        message: format!("Cannot read {} '{}': {}", kind, path.display(), e),
    })
}
