use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PagesError {
    #[error("Feed request to {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Feed request to {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Feed body is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    #[error("Feed body is not a valid conference listing: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl PagesError {
    /// Process exit code for this failure. Configuration problems are
    /// reported separately from failures of the run itself.
    pub fn exit_code(&self) -> i32 {
        match self {
            PagesError::Config { .. } | PagesError::InvalidConfigValue { .. } => 2,
            PagesError::Fetch { .. } | PagesError::HttpStatus { .. } => 3,
            PagesError::Decode(_) | PagesError::Parse(_) => 4,
            PagesError::Write { .. } => 5,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PagesError::Fetch { .. } => "Check the network connection and the feed URL",
            PagesError::HttpStatus { .. } => "Check that the feed URL is still served",
            PagesError::Decode(_) | PagesError::Parse(_) => {
                "Make sure the feed URL points at the YAML conference listing"
            }
            PagesError::Write { .. } => "Check permissions and free space of the output directory",
            PagesError::Config { .. } | PagesError::InvalidConfigValue { .. } => {
                "Fix the command line flags or the TOML configuration file"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PagesError>;
