use crate::content::lookup;
use crate::records::PageRecord;
use serde::Serialize;

/// A menu entry backed by a harvested page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationEntity<'a> {
    pub name: &'static str,
    pub href: &'static str,
    pub page: &'a PageRecord,
}

struct Candidate {
    name: &'static str,
    href: &'static str,
    matches: fn(&PageRecord) -> bool,
}

/// Menu entries in display order
const CANDIDATES: [Candidate; 4] = [
    Candidate {
        name: "WORK",
        href: "/work",
        matches: lookup::is_work_page,
    },
    Candidate {
        name: "ABOUT",
        href: "/about",
        matches: lookup::is_about_page,
    },
    Candidate {
        name: "NEWS / PRESS",
        href: "/news",
        matches: lookup::is_news_page,
    },
    Candidate {
        name: "CONTACT / CV",
        href: "/contact",
        matches: lookup::is_contact_page,
    },
];

/// Build the menu; entries without a matching page are left out
pub fn parse_navigation(pages: &[PageRecord]) -> Vec<NavigationEntity<'_>> {
    CANDIDATES
        .iter()
        .filter_map(|candidate| {
            let page = lookup::find_page(pages, candidate.matches)?;
            Some(NavigationEntity {
                name: candidate.name,
                href: candidate.href,
                page,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(url: &str, title: &str) -> PageRecord {
        let mut page = PageRecord::new(url);
        page.title = title.to_string();
        page
    }

    #[test]
    fn test_only_matched_entries() {
        let pages = vec![
            page("http://example.com/about", "ABOUT"),
            page("http://example.com/work", "WORK"),
        ];

        let navigation = parse_navigation(&pages);
        let names = navigation.iter().map(|item| item.name).collect::<Vec<_>>();
        assert_eq!(names, vec!["WORK", "ABOUT"]);
        assert_eq!(navigation[0].href, "/work");
        assert_eq!(navigation[0].page.url, "http://example.com/work");
        assert_eq!(navigation[1].page.url, "http://example.com/about");
    }

    #[test]
    fn test_all_entries_in_declared_order() {
        let pages = vec![
            page("http://example.com/contact", "CONTACT"),
            page("http://example.com/new-page", "Press"),
            page("http://example.com/about", "ABOUT"),
            page("http://example.com/work", "WORK"),
        ];

        let hrefs = parse_navigation(&pages)
            .iter()
            .map(|item| item.href)
            .collect::<Vec<_>>();
        assert_eq!(hrefs, vec!["/work", "/about", "/news", "/contact"]);
    }

    #[test]
    fn test_title_predicates() {
        let pages = vec![
            page("http://example.com/press", "NEWS / PRESS — Studio"),
            page("http://example.com/cv", "CONTACT / CV"),
        ];

        let names = parse_navigation(&pages)
            .iter()
            .map(|item| item.name)
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["NEWS / PRESS", "CONTACT / CV"]);
    }

    #[test]
    fn test_empty_snapshot() {
        assert!(parse_navigation(&[]).is_empty());
    }
}
