use crate::error::{Error, Result};
use crate::records::{ContentBlock, ImageRef, PageMeta, PageRecord};
use crate::utils;
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Result of parsing one HTML document
#[derive(Debug, Clone)]
pub struct ParsedPage {
    pub record: PageRecord,
    /// Raw `href` values in document order, unfiltered
    pub links: Vec<String>,
}

/// Turns fetched HTML into a [`PageRecord`].
///
/// Selectors are compiled once and reused for every page of a crawl.
#[derive(Debug)]
pub struct PageExtractor {
    content: Selector,
    title: Selector,
    description: Selector,
    keywords: Selector,
    image: Selector,
    link: Selector,
}

impl PageExtractor {
    /// Build an extractor whose content blocks come from `content_selectors`
    pub fn new(content_selectors: &[String]) -> Result<Self> {
        Ok(Self {
            content: parse_selector(&content_selectors.join(", "))?,
            title: parse_selector("title")?,
            description: parse_selector(r#"meta[name="description"]"#)?,
            keywords: parse_selector(r#"meta[name="keywords"]"#)?,
            image: parse_selector("img")?,
            link: parse_selector("a[href]")?,
        })
    }

    /// Parse `html` fetched from `page_url`
    pub fn extract(&self, html: &str, page_url: &Url) -> ParsedPage {
        let doc = Html::parse_document(html);

        let title = doc
            .select(&self.title)
            .next()
            .map(|e| e.text().collect::<String>())
            .unwrap_or_default();

        let meta = PageMeta {
            description: meta_content(&doc, &self.description),
            keywords: meta_content(&doc, &self.keywords),
        };

        // Text stays raw here: line structure is needed later for exhibitions
        let content = doc
            .select(&self.content)
            .map(element_text)
            .filter(|text| !text.is_empty())
            .map(ContentBlock::text)
            .collect::<Vec<_>>();

        let images = doc
            .select(&self.image)
            .filter_map(|e| image_ref(e, page_url))
            .collect::<Vec<_>>();

        let links = doc
            .select(&self.link)
            .filter_map(|e| e.value().attr("href"))
            .map(|s| s.to_string())
            .collect::<Vec<String>>();

        ::log::debug!(
            "HTML parser found {} blocks, {} images, {} links in {}",
            content.len(),
            images.len(),
            links.len(),
            page_url
        );

        ParsedPage {
            record: PageRecord {
                url: page_url.to_string(),
                title,
                meta,
                content,
                images,
            },
            links,
        }
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| Error::Selector(format!("{selector}: {e}")))
}

fn meta_content(doc: &Html, selector: &Selector) -> String {
    doc.select(selector)
        .next()
        .and_then(|e| e.value().attr("content"))
        .unwrap_or_default()
        .to_string()
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Build an image reference, skipping inline `data:` sources
fn image_ref(element: ElementRef<'_>, page_url: &Url) -> Option<ImageRef> {
    let value = element.value();
    let src = value
        .attr("src")
        .filter(|s| !s.is_empty())
        .or_else(|| value.attr("data-src"))?
        .trim();

    if src.is_empty() || src.starts_with("data:") {
        return None;
    }

    let src = if src.starts_with("//") {
        format!("https:{src}")
    } else {
        src.to_string()
    };

    let resolved = page_url.join(&src).ok()?;
    let Some(file_name) = utils::local_file_name(&resolved) else {
        ::log::debug!("No file name in image URL, skipping: {}", resolved);
        return None;
    };

    Some(ImageRef {
        src: resolved.to_string(),
        alt: value.attr("alt").unwrap_or_default().to_string(),
        local_path: utils::local_image_path(&file_name),
    })
}
