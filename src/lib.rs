pub mod config;
pub mod content;
pub mod crawlers;
pub mod error;
pub mod filter;
pub mod parsers;
pub mod records;
pub mod snapshot;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::{FetcherKind, HarvestConfig, SiteConfig};
pub use content::{
    AboutStatement, ExhibitionEntity, ExhibitionKind, NavigationEntity, ProjectEntity,
    SiteContent, SiteIndex,
};
pub use crawlers::HarvestReport;
pub use error::{Error, Result};
pub use records::{ContentBlock, ImageRef, PageMeta, PageRecord};

use crawlers::{HttpSource, WebDriverSource};
use std::path::{Path, PathBuf};

/// Main builder for a one-shot harvest of a site
pub struct Harvest {
    config: HarvestConfig,
}

impl Harvest {
    /// Create a new Harvest builder for the given start URL
    pub fn new(start_url: &str) -> Self {
        Self {
            config: HarvestConfig::new(start_url),
        }
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: HarvestConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a file
    pub fn with_config_file(self, path: impl AsRef<Path>) -> Result<Self> {
        let config = HarvestConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Load configuration from a string
    pub fn with_config_str(self, config_str: &str) -> Result<Self> {
        let config = HarvestConfig::from_json(config_str)?;
        Ok(self.with_config(config))
    }

    pub fn with_start_url(mut self, start_url: &str) -> Self {
        self.config.start_url = start_url.to_string();
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = output_dir.into();
        self
    }

    /// Set the pause between pages
    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.config.delay_ms = delay_ms;
        self
    }

    /// Set the maximum number of simultaneous image downloads
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.config.max_concurrency = max_concurrency;
        self
    }

    pub fn with_fetcher(mut self, fetcher: FetcherKind) -> Self {
        self.config.fetcher = fetcher;
        self
    }

    pub fn config(&self) -> &HarvestConfig {
        &self.config
    }

    /// Crawl the site, download its images and write the snapshot
    pub async fn run(self) -> Result<HarvestReport> {
        let config = self.config.apply_env();
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        match config.fetcher {
            FetcherKind::Http => {
                let source = HttpSource::new(http.clone());
                crawlers::web::run(&config, source, http).await
            }
            FetcherKind::WebDriver => {
                let source = WebDriverSource::new(&config.webdriver_url);
                crawlers::web::run(&config, source, http).await
            }
        }
    }
}
