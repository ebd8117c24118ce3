use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while harvesting a site or loading a snapshot
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("{failed} image(s) of {url} could not be downloaded")]
    ImageDownloads { url: String, failed: usize },

    #[error("Timed out fetching {0}")]
    Timeout(String),

    #[error("WebDriver command failed: {0}")]
    WebDriver(#[from] fantoccini::error::CmdError),

    #[error("No WebDriver server reachable (tried {0})")]
    WebDriverUnavailable(String),

    #[error("Invalid CSS selector: {0}")]
    Selector(String),
}

pub type Result<T> = std::result::Result<T, Error>;
