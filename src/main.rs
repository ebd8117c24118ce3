use clap::Parser;
use portfolio_harvest::{Harvest, HarvestConfig, SiteConfig, SiteIndex, config};
use serde::Serialize;
use std::error::Error;
use std::path::PathBuf;

mod args;
use args::{Args, Command, ShowTarget, convert_fetcher};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Command::Harvest {
            url,
            output,
            delay_ms,
            concurrency,
            fetcher,
            config_file,
        } => {
            let mut harvest = Harvest::new(config::DEFAULT_SITE_URL);

            // Apply configuration from file if specified
            if let Some(config_file) = config_file {
                ::log::info!("Loading configuration from file: {}", config_file.display());
                harvest = harvest.with_config(HarvestConfig::from_file(config_file)?);
            }

            // Apply command-line overrides
            if let Some(url) = url {
                harvest = harvest.with_start_url(&url);
            }
            if let Some(output) = output {
                harvest = harvest.with_output_dir(output);
            }
            if let Some(delay_ms) = delay_ms {
                harvest = harvest.with_delay_ms(delay_ms);
            }
            if let Some(concurrency) = concurrency {
                harvest = harvest.with_max_concurrency(concurrency);
            }
            if let Some(fetcher) = fetcher {
                harvest = harvest.with_fetcher(convert_fetcher(fetcher));
            }

            ::log::info!("Starting harvest of {}", harvest.config().start_url);
            let report = harvest.run().await?;

            println!("Harvest complete!");
            println!("- Pages scraped: {}", report.pages);
            println!("- Pages failed: {}", report.failed_pages);
            println!(
                "- Images saved: {} ({} failed)",
                report.images_saved, report.images_failed
            );
            println!("- Content saved to: {}", report.snapshot_path.display());
        }
        Command::Show {
            what,
            slug,
            snapshot,
            config_file,
        } => {
            let site = load_site(snapshot, config_file)?;
            show(&site, what, slug.as_deref())?;
        }
    }

    Ok(())
}

fn load_site(
    snapshot: Option<PathBuf>,
    config_file: Option<PathBuf>,
) -> Result<SiteIndex, Box<dyn Error>> {
    let mut config = match config_file {
        Some(path) => SiteConfig::from_file(path)?,
        None => SiteConfig::default(),
    }
    .apply_env();

    if let Some(snapshot) = snapshot {
        config.snapshot_path = snapshot;
    }

    Ok(SiteIndex::load(config)?)
}

fn show(site: &SiteIndex, what: ShowTarget, slug: Option<&str>) -> Result<(), Box<dyn Error>> {
    match what {
        ShowTarget::Projects => print_json(site.all_projects()),
        ShowTarget::Slugs => print_json(&site.project_slugs()),
        ShowTarget::Navigation => print_json(&site.navigation()),
        ShowTarget::Exhibitions => print_json(&site.exhibitions()),
        ShowTarget::About => print_json(&site.about()),
        ShowTarget::Site => print_json(&site.site_content()),
        ShowTarget::Project => {
            let slug = slug.ok_or("a project slug is required")?;
            match site.project_by_slug(slug) {
                Some(project) => print_json(project),
                None => {
                    ::log::warn!("No project with slug {}", slug);
                    print_json(&Option::<()>::None)
                }
            }
        }
        ShowTarget::Metadata => {
            let slug = slug.ok_or("a project slug is required")?;
            print_json(&site.project_metadata(slug))
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
