//! Page predicates shared by the lookups and the navigation menu.

use crate::records::PageRecord;

pub fn is_work_page(page: &PageRecord) -> bool {
    page.url.contains("/work")
}

pub fn is_about_page(page: &PageRecord) -> bool {
    page.url.contains("/about")
}

/// Squarespace left the news page at its default `/new-page` slug
pub fn is_news_page(page: &PageRecord) -> bool {
    page.url.contains("/new-page") || page.title.contains("NEWS")
}

pub fn is_contact_page(page: &PageRecord) -> bool {
    page.url.contains("/contact") || page.title.contains("CONTACT")
}

/// The page harvested from the site origin itself
pub fn is_home_page(page: &PageRecord, site_url: &str) -> bool {
    page.url.trim_end_matches('/') == site_url.trim_end_matches('/')
}

/// First page satisfying `predicate`
pub fn find_page(pages: &[PageRecord], predicate: impl Fn(&PageRecord) -> bool) -> Option<&PageRecord> {
    pages.iter().find(|page| predicate(page))
}
