use crate::config::file::{read_asset, FileConfig};
use crate::config::SiteConfig;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "conference-pages")]
#[command(about = "Generate one HTML page per conference edition from the CCF deadline feed")]
pub struct CliConfig {
    /// Feed URL [default: https://ccfddl.com/conference/allconf.yml]
    #[arg(long)]
    pub feed_url: Option<String>,

    /// Output directory [default: conference_htmls]
    #[arg(long)]
    pub output_dir: Option<String>,

    /// TOML configuration file; command line flags take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Replace the built-in stylesheet
    #[arg(long)]
    pub stylesheet: Option<PathBuf>,

    /// Replace the built-in page template
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// HTML-escape feed values before inserting them into pages
    #[arg(long)]
    pub escape_html: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Resolves defaults, then the config file, then command line flags.
    pub fn resolve(&self) -> Result<SiteConfig> {
        let mut config = match &self.config {
            Some(path) => FileConfig::from_file(path)?.apply(SiteConfig::default())?,
            None => SiteConfig::default(),
        };

        if let Some(feed_url) = &self.feed_url {
            config.feed_url = feed_url.clone();
        }
        if let Some(output_dir) = &self.output_dir {
            config.output_dir = output_dir.clone();
        }
        if let Some(path) = &self.stylesheet {
            config.stylesheet = read_asset("stylesheet", path)?;
        }
        if let Some(path) = &self.template {
            config.page_template = read_asset("template", path)?;
        }
        if self.escape_html {
            config.escape_html = true;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_gives_defaults() {
        let cli = CliConfig::parse_from(["conference-pages"]);
        let config = cli.resolve().unwrap();
        assert_eq!(config.feed_url, crate::config::DEFAULT_FEED_URL);
        assert_eq!(config.output_dir, crate::config::DEFAULT_OUTPUT_DIR);
        assert!(!config.escape_html);
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("pages.toml");
        std::fs::write(
            &path,
            "feed_url = \"http://file.example/allconf.yml\"\noutput_dir = \"from-file\"\n",
        )
        .unwrap();

        let cli = CliConfig::parse_from([
            "conference-pages",
            "--config",
            path.to_str().unwrap(),
            "--output-dir",
            "from-flag",
            "--escape-html",
        ]);
        let config = cli.resolve().unwrap();

        assert_eq!(config.feed_url, "http://file.example/allconf.yml");
        assert_eq!(config.output_dir, "from-flag");
        assert!(config.escape_html);
    }
}
