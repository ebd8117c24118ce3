use regex::Regex;
use url::{Origin, Url};

/// Decides which discovered links the harvester queues
#[derive(Debug)]
pub struct LinkFilter {
    origin: Origin,
    exclude_regexes: Vec<Regex>,
}

impl LinkFilter {
    /// Create a filter that keeps links sharing the origin of `root_url`
    pub fn new(root_url: &Url, exclude_patterns: &[String]) -> Result<Self, regex::Error> {
        let mut exclude_regexes = Vec::with_capacity(exclude_patterns.len());
        for pattern in exclude_patterns {
            exclude_regexes.push(Regex::new(pattern)?);
        }

        Ok(Self {
            origin: root_url.origin(),
            exclude_regexes,
        })
    }

    /// Resolve a raw `href` against the page it was found on.
    ///
    /// Returns the normalized absolute URL when the link should be crawled.
    pub fn accept(&self, page_url: &Url, href: &str) -> Option<Url> {
        let href = href.trim();
        if href.is_empty() || href.starts_with('#') || href.starts_with("mailto:") {
            return None;
        }

        let resolved = page_url.join(href).ok()?;
        if !self.should_crawl(&resolved) {
            ::log::debug!("Link filter rejected: {}", resolved);
            return None;
        }

        Some(normalize_url(&resolved))
    }

    /// Determine if an absolute URL is in scope
    pub fn should_crawl(&self, url: &Url) -> bool {
        if url.origin() != self.origin {
            return false;
        }

        let url_str = url.as_str();
        !self.exclude_regexes.iter().any(|regex| regex.is_match(url_str))
    }
}

/// Drop the fragment so `/about#cv` and `/about` are one page
pub fn normalize_url(url: &Url) -> Url {
    let mut normalized = url.clone();
    normalized.set_fragment(None);
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> LinkFilter {
        let root = Url::parse("http://example.com").unwrap();
        LinkFilter::new(
            &root,
            &[r"\.(jpg|jpeg|png|gif|css|js|ico|svg|pdf)$".to_string()],
        )
        .unwrap()
    }

    #[test]
    fn test_same_origin_only() {
        let filter = filter();
        let page = Url::parse("http://example.com/work").unwrap();

        let accepted = filter.accept(&page, "/about").unwrap();
        assert_eq!(accepted.as_str(), "http://example.com/about");

        assert!(filter.accept(&page, "https://instagram.com/someone").is_none());
        // Scheme is part of the origin
        assert!(filter.accept(&page, "https://example.com/about").is_none());
    }

    #[test]
    fn test_relative_links_resolve_against_page() {
        let filter = filter();
        let page = Url::parse("http://example.com/work/").unwrap();

        let accepted = filter.accept(&page, "elsewhere").unwrap();
        assert_eq!(accepted.as_str(), "http://example.com/work/elsewhere");
    }

    #[test]
    fn test_skips_anchors_and_mail() {
        let filter = filter();
        let page = Url::parse("http://example.com/").unwrap();

        assert!(filter.accept(&page, "#top").is_none());
        assert!(filter.accept(&page, "mailto:someone@example.com").is_none());
        assert!(filter.accept(&page, "   ").is_none());
    }

    #[test]
    fn test_fragment_stripped() {
        let filter = filter();
        let page = Url::parse("http://example.com/").unwrap();

        let accepted = filter.accept(&page, "/contact#cv").unwrap();
        assert_eq!(accepted.as_str(), "http://example.com/contact");
    }

    #[test]
    fn test_excluded_assets() {
        let filter = filter();
        let page = Url::parse("http://example.com/").unwrap();

        assert!(filter.accept(&page, "/static/photo.jpg").is_none());
        assert!(filter.accept(&page, "/cv.pdf").is_none());
    }
}
