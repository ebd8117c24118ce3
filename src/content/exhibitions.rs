use crate::records::{ImageRef, PageRecord};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// `DD.MM.YY - DD.MM.YY`, spaces around the dash optional
static DATE_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{2}\.[0-9]{2}\.[0-9]{2})\s*-\s*([0-9]{2}\.[0-9]{2}\.[0-9]{2})").unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExhibitionKind {
    Solo,
    Group,
}

impl ExhibitionKind {
    /// Solo when the venue line says so, group otherwise
    pub fn classify(venue: &str) -> Self {
        if venue.to_lowercase().contains("solo") {
            ExhibitionKind::Solo
        } else {
            ExhibitionKind::Group
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExhibitionEntity {
    pub title: String,
    /// Normalized to `DD.MM.YY - DD.MM.YY`
    pub dates: String,
    pub venue: String,
    #[serde(rename = "type")]
    pub kind: ExhibitionKind,
    pub description: String,
    pub images: Vec<ImageRef>,
}

/// Cut the news blob at the start of every date range
pub fn split_entries(text: &str) -> Vec<&str> {
    let mut entries = Vec::new();
    let mut start = 0;
    for range in DATE_RANGE_RE.find_iter(text) {
        if range.start() > start {
            entries.push(&text[start..range.start()]);
        }
        start = range.start();
    }
    entries.push(&text[start..]);
    entries
}

/// Parse one entry; `None` unless it has two lines and opens with a date range
pub fn parse_entry(entry: &str) -> Option<ExhibitionEntity> {
    let lines = entry
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>();
    if lines.len() < 2 {
        return None;
    }

    let first_line = lines[0];
    let range = DATE_RANGE_RE.captures(first_line)?;
    let whole = range.get(0)?.as_str();
    let dates = format!("{} - {}", &range[1], &range[2]);
    let title = first_line.replacen(whole, "", 1).trim().to_string();

    let venue = lines[1].to_string();
    Some(ExhibitionEntity {
        title,
        dates,
        kind: ExhibitionKind::classify(&venue),
        venue,
        description: lines[2..].join(" "),
        images: Vec::new(),
    })
}

/// Exhibitions listed on the news page, in page order.
///
/// Image `n` of the page goes to exhibition `n`. Nothing in the snapshot
/// ties an image to an entry, so this pairing is a guess.
pub fn parse_exhibitions(news_page: &PageRecord) -> Vec<ExhibitionEntity> {
    let Some(text) = news_page.primary_text() else {
        return Vec::new();
    };

    split_entries(text)
        .into_iter()
        .filter_map(parse_entry)
        .enumerate()
        .map(|(index, mut exhibition)| {
            exhibition.images = news_page.images.get(index).cloned().into_iter().collect();
            exhibition
        })
        .collect()
}
