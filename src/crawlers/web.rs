use crate::config::HarvestConfig;
use crate::crawlers::download::ImageDownloader;
use crate::crawlers::source::PageSource;
use crate::error::{Error, Result};
use crate::filter::{LinkFilter, normalize_url};
use crate::parsers::{PageExtractor, ParsedPage};
use crate::records::PageRecord;
use crate::snapshot;
use std::collections::{HashSet, VecDeque};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use url::Url;

/// Summary of a finished harvest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarvestReport {
    pub pages: usize,
    pub failed_pages: usize,
    pub images_saved: usize,
    pub images_failed: usize,
    pub snapshot_path: PathBuf,
}

/// Pages visited and pages still to visit.
///
/// Only the crawl loop touches this, so it needs no locking.
#[derive(Debug, Default)]
pub struct Worklist {
    visited: HashSet<String>,
    to_visit: VecDeque<Url>,
}

impl Worklist {
    pub fn new(start: Url) -> Self {
        let mut worklist = Self::default();
        worklist.to_visit.push_back(start);
        worklist
    }

    /// Next URL that has not been visited yet, marking it visited
    pub fn next_unvisited(&mut self) -> Option<Url> {
        while let Some(url) = self.to_visit.pop_front() {
            if self.visited.insert(url.to_string()) {
                return Some(url);
            }
            ::log::trace!("Skipping already visited: {}", url);
        }
        None
    }

    /// Queue `url` unless it has been visited already
    pub fn enqueue(&mut self, url: Url) -> bool {
        if self.visited.contains(url.as_str()) {
            ::log::debug!("Skipping already visited link: {}", url);
            return false;
        }
        ::log::debug!("Queuing link for crawling: {}", url);
        self.to_visit.push_back(url);
        true
    }

    pub fn is_empty(&self) -> bool {
        self.to_visit.is_empty()
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}

/// Breadth-first crawl of one origin into a list of page records
pub struct Harvester<S: PageSource> {
    source: S,
    root_url: Url,
    extractor: PageExtractor,
    filter: LinkFilter,
    downloader: Option<ImageDownloader>,
    delay: Duration,
}

impl<S: PageSource> Harvester<S> {
    /// Build a harvester that downloads images with `http`
    pub fn new(config: &HarvestConfig, source: S, http: reqwest::Client) -> Result<Self> {
        let downloader =
            ImageDownloader::new(http, config.images_dir(), config.max_concurrency);
        Ok(Self::without_downloads(config, source)?.with_downloader(downloader))
    }

    /// Build a harvester that records images but never fetches them
    pub fn without_downloads(config: &HarvestConfig, source: S) -> Result<Self> {
        let root_url = normalize_url(&Url::parse(&config.start_url)?);
        let filter = LinkFilter::new(&root_url, &config.exclude_patterns)?;

        Ok(Self {
            source,
            root_url,
            extractor: PageExtractor::new(&config.content_selectors)?,
            filter,
            downloader: None,
            delay: Duration::from_millis(config.delay_ms),
        })
    }

    fn with_downloader(mut self, downloader: ImageDownloader) -> Self {
        self.downloader = Some(downloader);
        self
    }

    /// Fetch one page and save its images.
    ///
    /// A page with any failed image yields nothing, links included.
    async fn scrape(&mut self, url: &Url, stats: &mut HarvestStats) -> Result<ParsedPage> {
        let html = self.source.fetch(url).await?;
        let parsed = self.extractor.extract(&html, url);

        if let Some(downloader) = &self.downloader {
            let downloads = downloader.download_all(&parsed.record.images).await;
            stats.images_saved += downloads.saved;
            stats.images_failed += downloads.failed;

            if !downloads.is_complete() {
                return Err(Error::ImageDownloads {
                    url: url.to_string(),
                    failed: downloads.failed,
                });
            }
        }
        Ok(parsed)
    }

    /// Crawl until the worklist is empty and return every harvested page
    pub async fn crawl(mut self) -> (Vec<PageRecord>, HarvestStats) {
        ::log::info!("Starting harvest of {}", self.root_url);
        let started = Instant::now();

        let mut worklist = Worklist::new(self.root_url.clone());
        let mut pages = Vec::new();
        let mut stats = HarvestStats::default();

        while let Some(url) = worklist.next_unvisited() {
            ::log::info!("Scraping: {}", url);

            match self.scrape(&url, &mut stats).await {
                Ok(parsed) => {
                    for href in &parsed.links {
                        if let Some(link) = self.filter.accept(&url, href) {
                            worklist.enqueue(link);
                        }
                    }
                    pages.push(parsed.record);
                }
                Err(e) => {
                    ::log::error!("Error scraping {}: {}", url, e);
                    stats.failed_pages += 1;
                }
            }

            if !worklist.is_empty() && !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
        }

        self.source.close().await;

        ::log::info!(
            "Harvest complete - {} pages ({} visited) in {:.2} seconds",
            pages.len(),
            worklist.visited_count(),
            started.elapsed().as_secs_f64()
        );
        (pages, stats)
    }
}

/// Counters collected while crawling
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HarvestStats {
    pub failed_pages: usize,
    pub images_saved: usize,
    pub images_failed: usize,
}

/// Crawl the configured site and write the snapshot once at the end
pub async fn run<S: PageSource>(
    config: &HarvestConfig,
    source: S,
    http: reqwest::Client,
) -> Result<HarvestReport> {
    let images_dir = config.images_dir();
    tokio::fs::create_dir_all(&images_dir)
        .await
        .map_err(|source| Error::Write {
            path: images_dir.clone(),
            source,
        })?;

    let harvester = Harvester::new(config, source, http)?;
    let (pages, stats) = harvester.crawl().await;

    let snapshot_path = config.snapshot_path();
    snapshot::write(&snapshot_path, &pages)?;

    Ok(HarvestReport {
        pages: pages.len(),
        failed_pages: stats.failed_pages,
        images_saved: stats.images_saved,
        images_failed: stats.images_failed,
        snapshot_path,
    })
}
