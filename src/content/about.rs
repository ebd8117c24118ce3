use crate::parsers::text::split_sentences;
use crate::records::PageRecord;
use serde::Serialize;

/// The artist statement from the about page, split into paragraphs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutStatement {
    /// The paragraph comparing the work to painting and sculpture
    pub key_quote: Option<String>,
    /// Every other paragraph, in order
    pub paragraphs: Vec<String>,
}

impl AboutStatement {
    /// The key quote without surrounding quote marks or final period
    pub fn quote_text(&self) -> Option<&str> {
        self.key_quote.as_deref().map(|quote| {
            let quote = quote.strip_prefix('"').unwrap_or(quote);
            let quote = quote.strip_suffix('"').unwrap_or(quote);
            quote.strip_suffix('.').unwrap_or(quote)
        })
    }
}

fn is_key_quote(paragraph: &str) -> bool {
    let lowered = paragraph.to_lowercase();
    lowered.contains("painter") && lowered.contains("sculptor")
}

pub fn parse_about(page: &PageRecord) -> AboutStatement {
    let mut paragraphs = split_sentences(page.primary_text().unwrap_or_default());

    let quote_index = paragraphs
        .iter()
        .position(|paragraph| is_key_quote(paragraph));
    let key_quote = quote_index.map(|index| paragraphs.remove(index));

    AboutStatement {
        key_quote,
        paragraphs,
    }
}
