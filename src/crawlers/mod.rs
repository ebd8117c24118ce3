pub mod download;
pub mod source;
pub mod web;

pub use download::{DownloadStats, ImageDownloader};
pub use source::{HttpSource, PageSource, WebDriverSource};
pub use web::{HarvestReport, HarvestStats, Harvester, Worklist};
