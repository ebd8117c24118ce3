use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// How the harvester retrieves page HTML
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetcherKind {
    /// Plain HTTP GET
    #[default]
    Http,
    /// Drive a browser through a WebDriver server (for script-rendered pages)
    WebDriver,
}

/// Configuration for the harvester
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarvestConfig {
    /// URL to start crawling from; also defines the allowed origin
    pub start_url: String,

    /// Directory receiving `site-content.json` and `images/`
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Pause between two pages, in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    /// Maximum number of simultaneous image downloads for one page
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,

    #[serde(default)]
    pub fetcher: FetcherKind,

    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Elements whose text becomes a content block
    #[serde(default = "default_content_selectors")]
    pub content_selectors: Vec<String>,

    /// Regex patterns for links that are never queued
    #[serde(default = "default_exclude_patterns")]
    pub exclude_patterns: Vec<String>,
}

impl HarvestConfig {
    /// Create a new configuration with default values
    pub fn new(start_url: &str) -> Self {
        Self {
            start_url: start_url.to_string(),
            output_dir: default_output_dir(),
            delay_ms: default_delay_ms(),
            max_concurrency: default_max_concurrency(),
            fetcher: FetcherKind::default(),
            webdriver_url: default_webdriver_url(),
            content_selectors: default_content_selectors(),
            exclude_patterns: default_exclude_patterns(),
        }
    }

    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Apply `WEBDRIVER_URL` if it is set and non-empty
    pub fn apply_env(mut self) -> Self {
        if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") {
            if !webdriver_url.is_empty() {
                self.webdriver_url = webdriver_url;
            }
        }
        self
    }

    pub fn images_dir(&self) -> PathBuf {
        self.output_dir.join("images")
    }

    pub fn snapshot_path(&self) -> PathBuf {
        self.output_dir.join(SNAPSHOT_FILE_NAME)
    }
}

/// Configuration for loading and presenting a snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Location of the harvested JSON snapshot
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: PathBuf,

    /// Origin of the harvested site; its page is the home page
    #[serde(default = "default_site_url")]
    pub site_url: String,

    /// Name appended to page titles
    #[serde(default = "default_site_name")]
    pub site_name: String,

    #[serde(default = "default_description")]
    pub default_description: String,

    #[serde(default = "default_keywords")]
    pub default_keywords: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            snapshot_path: default_snapshot_path(),
            site_url: default_site_url(),
            site_name: default_site_name(),
            default_description: default_description(),
            default_keywords: default_keywords(),
        }
    }
}

impl SiteConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Apply `SNAPSHOT_PATH` if it is set and non-empty
    pub fn apply_env(mut self) -> Self {
        if let Ok(path) = std::env::var("SNAPSHOT_PATH") {
            if !path.is_empty() {
                self.snapshot_path = PathBuf::from(path);
            }
        }
        self
    }
}

pub const SNAPSHOT_FILE_NAME: &str = "site-content.json";

pub const DEFAULT_SITE_URL: &str = "http://chokilindberg.com";

fn default_output_dir() -> PathBuf {
    PathBuf::from("./scraped-content")
}

fn default_delay_ms() -> u64 {
    500
}

fn default_max_concurrency() -> usize {
    8
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

fn default_content_selectors() -> Vec<String> {
    ["main", ".main-content", "[role=\"main\"]", ".content-wrapper"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_exclude_patterns() -> Vec<String> {
    vec![r"\.(jpg|jpeg|png|gif|css|js|ico|woff|woff2|ttf|eot|svg|pdf)$".to_string()]
}

fn default_snapshot_path() -> PathBuf {
    default_output_dir().join(SNAPSHOT_FILE_NAME)
}

fn default_site_url() -> String {
    DEFAULT_SITE_URL.to_string()
}

fn default_site_name() -> String {
    "Choki Lindberg".to_string()
}

fn default_description() -> String {
    "Photography portfolio of Choki Lindberg".to_string()
}

fn default_keywords() -> String {
    "photography, art, portfolio, Choki Lindberg".to_string()
}
