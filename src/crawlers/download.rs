use crate::error::{Error, Result};
use crate::records::ImageRef;
use crate::utils;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use url::Url;

/// Outcome of downloading one page's images
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DownloadStats {
    pub saved: usize,
    pub failed: usize,
}

/// Saves images into a local directory, a bounded number at a time
pub struct ImageDownloader {
    client: reqwest::Client,
    images_dir: PathBuf,
    semaphore: Arc<Semaphore>,
}

impl DownloadStats {
    /// Every image of the page was saved
    pub fn is_complete(&self) -> bool {
        self.failed == 0
    }
}

impl ImageDownloader {
    pub fn new(client: reqwest::Client, images_dir: PathBuf, max_concurrency: usize) -> Self {
        Self {
            client,
            images_dir,
            semaphore: Arc::new(Semaphore::new(max_concurrency.max(1))),
        }
    }

    /// Download every image of a page concurrently and wait for all of them.
    ///
    /// Failures are logged and counted, never returned. An image without a
    /// usable file name counts as failed.
    pub async fn download_all(&self, images: &[ImageRef]) -> DownloadStats {
        let mut tasks = JoinSet::new();
        let mut stats = DownloadStats::default();

        for image in images {
            let Some(target) = self.target_path(&image.src) else {
                ::log::warn!("Cannot derive a file name for {}", image.src);
                stats.failed += 1;
                continue;
            };
            let client = self.client.clone();
            let semaphore = Arc::clone(&self.semaphore);
            let src = image.src.clone();

            tasks.spawn(async move {
                let _permit = semaphore.acquire_owned().await;
                let result = download(&client, &src, &target).await;
                (src, result)
            });
        }

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((src, Ok(()))) => {
                    ::log::trace!("Saved image {}", src);
                    stats.saved += 1;
                }
                Ok((src, Err(e))) => {
                    ::log::warn!("Failed to download {}: {}", src, e);
                    stats.failed += 1;
                }
                Err(e) => {
                    ::log::error!("Image download task panicked: {}", e);
                    stats.failed += 1;
                }
            }
        }
        stats
    }

    fn target_path(&self, src: &str) -> Option<PathBuf> {
        let url = Url::parse(src).ok()?;
        let file_name = utils::local_file_name(&url)?;
        Some(self.images_dir.join(file_name))
    }
}

async fn download(client: &reqwest::Client, src: &str, target: &Path) -> Result<()> {
    let response = client.get(src).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::Status {
            url: src.to_string(),
            status: status.as_u16(),
        });
    }

    let bytes = response.bytes().await?;
    tokio::fs::write(target, &bytes)
        .await
        .map_err(|source| Error::Write {
            path: target.to_path_buf(),
            source,
        })
}
