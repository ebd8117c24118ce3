use clap::{Parser, Subcommand, ValueEnum};
use portfolio_harvest::FetcherKind;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "portfolio-harvest")]
#[command(about = "Harvest a portfolio site into a JSON snapshot and read entities back out of it")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Crawl the site, download its images and write site-content.json
    Harvest {
        /// Start URL; its origin bounds the crawl
        #[arg(short, long)]
        url: Option<String>,

        /// Directory receiving the snapshot and images/
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pause between pages in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Number of concurrent image downloads per page
        #[arg(short, long)]
        concurrency: Option<usize>,

        /// How page HTML is retrieved
        #[arg(short, long, value_enum)]
        fetcher: Option<FetcherArg>,

        /// Path to a JSON harvest configuration
        #[arg(long)]
        config_file: Option<PathBuf>,
    },

    /// Print entities derived from a snapshot as JSON
    Show {
        #[arg(value_enum)]
        what: ShowTarget,

        /// Project slug, required for `project` and `metadata`
        slug: Option<String>,

        /// Snapshot to read (defaults to SNAPSHOT_PATH or ./scraped-content/site-content.json)
        #[arg(short, long)]
        snapshot: Option<PathBuf>,

        /// Path to a JSON site configuration
        #[arg(long)]
        config_file: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FetcherArg {
    Http,
    Webdriver,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ShowTarget {
    Projects,
    Project,
    Slugs,
    Navigation,
    Exhibitions,
    About,
    Metadata,
    Site,
}

/// Convert from CLI argument fetcher to the configuration value
pub fn convert_fetcher(arg: FetcherArg) -> FetcherKind {
    match arg {
        FetcherArg::Http => FetcherKind::Http,
        FetcherArg::Webdriver => FetcherKind::WebDriver,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_harvest() {
        let args = Args::parse_from([
            "portfolio-harvest",
            "harvest",
            "--url",
            "http://example.com",
            "--delay-ms",
            "0",
            "--fetcher",
            "webdriver",
        ]);
        match args.command {
            Command::Harvest {
                url,
                delay_ms,
                fetcher,
                ..
            } => {
                assert_eq!(url.as_deref(), Some("http://example.com"));
                assert_eq!(delay_ms, Some(0));
                assert_eq!(fetcher.map(convert_fetcher), Some(FetcherKind::WebDriver));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_show_project() {
        let args = Args::parse_from(["portfolio-harvest", "show", "project", "elsewhere"]);
        match args.command {
            Command::Show { what, slug, .. } => {
                assert_eq!(what, ShowTarget::Project);
                assert_eq!(slug.as_deref(), Some("elsewhere"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
