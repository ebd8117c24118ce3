//! Normalizer: turns the harvested page array into portfolio entities.

pub mod about;
pub mod exhibitions;
pub mod lookup;
pub mod metadata;
pub mod navigation;
pub mod projects;

pub use about::{AboutStatement, parse_about};
pub use exhibitions::{ExhibitionEntity, ExhibitionKind, parse_exhibitions};
pub use metadata::PageMetadata;
pub use navigation::{NavigationEntity, parse_navigation};
pub use projects::{ProjectEntity, parse_projects};

use crate::config::SiteConfig;
use crate::error::Result;
use crate::records::PageRecord;
use crate::snapshot;
use serde::Serialize;
use std::sync::OnceLock;

/// Everything the site renders from, in one serializable bundle
#[derive(Debug, Clone, Serialize)]
pub struct SiteContent<'a> {
    pub pages: &'a [PageRecord],
    pub projects: &'a [ProjectEntity],
    pub navigation: Vec<NavigationEntity<'a>>,
}

/// Read-only index over one snapshot.
///
/// Pages are loaded once; the project list is derived on first use and
/// then shared. Safe to share across threads.
#[derive(Debug)]
pub struct SiteIndex {
    config: SiteConfig,
    pages: Vec<PageRecord>,
    projects: OnceLock<Vec<ProjectEntity>>,
}

impl SiteIndex {
    pub fn new(pages: Vec<PageRecord>, config: SiteConfig) -> Self {
        Self {
            config,
            pages,
            projects: OnceLock::new(),
        }
    }

    /// Load the snapshot named by `config`
    pub fn load(config: SiteConfig) -> Result<Self> {
        let pages = snapshot::load(&config.snapshot_path)?;
        Ok(Self::new(pages, config))
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn pages(&self) -> &[PageRecord] {
        &self.pages
    }

    pub fn home_page(&self) -> Option<&PageRecord> {
        lookup::find_page(&self.pages, |page| {
            lookup::is_home_page(page, &self.config.site_url)
        })
    }

    pub fn work_page(&self) -> Option<&PageRecord> {
        lookup::find_page(&self.pages, lookup::is_work_page)
    }

    pub fn about_page(&self) -> Option<&PageRecord> {
        lookup::find_page(&self.pages, lookup::is_about_page)
    }

    pub fn news_page(&self) -> Option<&PageRecord> {
        lookup::find_page(&self.pages, lookup::is_news_page)
    }

    pub fn contact_page(&self) -> Option<&PageRecord> {
        lookup::find_page(&self.pages, lookup::is_contact_page)
    }

    /// Projects, newest first
    pub fn all_projects(&self) -> &[ProjectEntity] {
        self.projects.get_or_init(|| {
            let projects = parse_projects(&self.pages);
            ::log::debug!("Indexed {} projects", projects.len());
            projects
        })
    }

    pub fn project_by_slug(&self, slug: &str) -> Option<&ProjectEntity> {
        self.all_projects()
            .iter()
            .find(|project| project.slug == slug)
    }

    /// Slugs of every project page to pre-render
    pub fn project_slugs(&self) -> Vec<&str> {
        self.all_projects()
            .iter()
            .map(|project| project.slug.as_str())
            .collect()
    }

    pub fn navigation(&self) -> Vec<NavigationEntity<'_>> {
        parse_navigation(&self.pages)
    }

    /// Exhibitions from the news page; empty without one
    pub fn exhibitions(&self) -> Vec<ExhibitionEntity> {
        self.news_page().map(parse_exhibitions).unwrap_or_default()
    }

    pub fn about(&self) -> Option<AboutStatement> {
        self.about_page().map(parse_about)
    }

    pub fn site_content(&self) -> SiteContent<'_> {
        SiteContent {
            pages: &self.pages,
            projects: self.all_projects(),
            navigation: self.navigation(),
        }
    }

    pub fn page_metadata(&self, page: &PageRecord) -> PageMetadata {
        metadata::page_metadata(page, &self.config)
    }

    pub fn project_metadata(&self, slug: &str) -> PageMetadata {
        metadata::project_metadata(self.project_by_slug(slug), &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{ContentBlock, ImageRef};
    use std::sync::Arc;

    fn page(url: &str, title: &str, text: &str) -> PageRecord {
        let mut page = PageRecord::new(url);
        page.title = title.to_string();
        if !text.is_empty() {
            page.content.push(ContentBlock::text(text));
        }
        page
    }

    fn site() -> SiteIndex {
        let mut work = page(
            "http://example.com/work",
            "WORK",
            "Elsewhere 2019\nTwo Parts Impossible, One Part May Be 2021",
        );
        work.images = vec![ImageRef {
            src: "http://example.com/t.jpg".to_string(),
            alt: String::new(),
            local_path: "/images/t.jpg".to_string(),
        }];

        let pages = vec![
            page("http://example.com/", "Home", ""),
            work,
            page(
                "http://example.com/about",
                "ABOUT",
                "Small sets. Built like a painter or a sculptor would.",
            ),
            page(
                "http://example.com/new-page",
                "NEWS",
                "28.11.21 - 29.01.22 Two Parts Impossible\nGalerie Bart Amsterdam\nGroup Exhibition",
            ),
        ];

        let config = SiteConfig {
            site_url: "http://example.com".to_string(),
            ..SiteConfig::default()
        };
        SiteIndex::new(pages, config)
    }

    #[test]
    fn test_page_lookups() {
        let site = site();
        assert_eq!(site.home_page().unwrap().title, "Home");
        assert_eq!(site.work_page().unwrap().title, "WORK");
        assert_eq!(site.about_page().unwrap().title, "ABOUT");
        assert_eq!(site.news_page().unwrap().title, "NEWS");
        assert!(site.contact_page().is_none());
    }

    #[test]
    fn test_projects() {
        let site = site();
        let projects = site.all_projects();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].slug, "two-parts-impossible-one-part-may-be");
        assert_eq!(projects[1].slug, "elsewhere");

        let found = site.project_by_slug("elsewhere").unwrap();
        assert_eq!(found.year, "2019");
        assert_eq!(
            site.project_slugs(),
            vec!["two-parts-impossible-one-part-may-be", "elsewhere"]
        );
    }

    #[test]
    fn test_unknown_slug() {
        let site = site();
        assert!(site.project_by_slug("does-not-exist").is_none());
        assert!(site.project_by_slug("").is_none());
        assert_eq!(
            site.project_metadata("does-not-exist").title,
            "Project Not Found — Choki Lindberg"
        );
    }

    #[test]
    fn test_derived_collections() {
        let site = site();

        let names = site.navigation().iter().map(|n| n.name).collect::<Vec<_>>();
        assert_eq!(names, vec!["WORK", "ABOUT", "NEWS / PRESS"]);

        let exhibitions = site.exhibitions();
        assert_eq!(exhibitions.len(), 1);
        assert_eq!(exhibitions[0].venue, "Galerie Bart Amsterdam");

        let about = site.about().unwrap();
        assert!(about.key_quote.is_some());
        assert_eq!(about.paragraphs, vec!["Small sets."]);
    }

    #[test]
    fn test_empty_snapshot() {
        let site = SiteIndex::new(Vec::new(), SiteConfig::default());
        assert!(site.home_page().is_none());
        assert!(site.all_projects().is_empty());
        assert!(site.navigation().is_empty());
        assert!(site.exhibitions().is_empty());
        assert!(site.about().is_none());
    }

    #[test]
    fn test_site_content_serializes() {
        let site = site();
        let json = serde_json::to_value(site.site_content()).unwrap();
        assert_eq!(json["pages"].as_array().unwrap().len(), 4);
        assert_eq!(json["projects"][1]["thumbnailImage"]["localPath"], "/images/t.jpg");
        assert_eq!(json["navigation"][0]["page"]["url"], "http://example.com/work");
    }

    #[test]
    fn test_shared_across_threads() {
        let site = Arc::new(site());
        let handles = (0..4)
            .map(|_| {
                let site = Arc::clone(&site);
                std::thread::spawn(move || site.all_projects().len())
            })
            .collect::<Vec<_>>();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 2);
        }
    }

    #[test]
    fn test_load_from_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site-content.json");
        snapshot::write(&path, site().pages()).unwrap();

        let config = SiteConfig {
            snapshot_path: path,
            ..SiteConfig::default()
        };
        let loaded = SiteIndex::load(config).unwrap();
        assert_eq!(loaded.pages().len(), 4);
        assert_eq!(loaded.all_projects().len(), 2);
    }
}
