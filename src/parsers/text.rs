//! Text heuristics for scraped portfolio content.
//!
//! Every function here is pure and tuned to the punctuation and casing of
//! the harvested site, not to any formal grammar.

use regex::Regex;
use std::sync::LazyLock;

/// Pager text that Squarespace glues onto gallery content
pub const NAV_ARTIFACT: &str = "PrevNext";

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// A period followed by whitespace and a capital letter
static SENTENCE_BOUNDARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.\s[A-Z]").unwrap());

static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]{4}").unwrap());

/// A year, plus the parenthesis it may close
static FRAGMENT_END_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]{4}\)?").unwrap());

static PARENTHETICAL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\([^)]*\)").unwrap());

static SLUG_SEPARATOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Strip pager artifacts and tags, collapse whitespace, trim.
///
/// Idempotent: tags go first and the artifact is removed until none is left.
pub fn clean_text(content: &str) -> String {
    let mut text = TAG_RE.replace_all(content, "").into_owned();
    while text.contains(NAV_ARTIFACT) {
        text = text.replace(NAV_ARTIFACT, "");
    }
    WHITESPACE_RE.replace_all(&text, " ").trim().to_string()
}

/// Split a cleaned blob into paragraphs at sentence boundaries.
///
/// Abbreviations such as "St. Petersburg" are split too.
pub fn split_sentences(content: &str) -> Vec<String> {
    let cleaned = clean_text(content);

    let mut fragments = Vec::new();
    let mut start = 0;
    for boundary in SENTENCE_BOUNDARY_RE.find_iter(&cleaned) {
        // The period is consumed; the capital letter opens the next fragment
        fragments.push(&cleaned[start..boundary.start()]);
        start = boundary.start() + 1;
    }
    fragments.push(&cleaned[start..]);

    fragments
        .into_iter()
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(|fragment| {
            if fragment.ends_with('.') {
                fragment.to_string()
            } else {
                format!("{fragment}.")
            }
        })
        .collect()
}

/// Title and year pulled out of a work-index fragment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectTitle {
    pub title: String,
    /// First 4-digit run, empty when there is none
    pub year: String,
}

impl ProjectTitle {
    /// Both halves present
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.year.is_empty()
    }
}

pub fn parse_project_title(text: &str) -> ProjectTitle {
    let year = YEAR_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    let without_years = YEAR_RE.replace_all(text, "");
    let title = PARENTHETICAL_RE
        .replace_all(&without_years, "")
        .trim()
        .to_string();

    ProjectTitle { title, year }
}

/// URL-safe identifier: lowercase, non-alphanumeric runs become one `-`
pub fn create_slug(title: &str) -> String {
    let lowered = title.to_lowercase();
    SLUG_SEPARATOR_RE
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Whether `text` holds a 4-digit run
pub fn contains_year(text: &str) -> bool {
    YEAR_RE.is_match(text)
}

/// Cut `text` right after every 4-digit run (and a `)` directly after it).
///
/// Each piece is trimmed; empty pieces are dropped.
pub fn split_after_years(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    for year in FRAGMENT_END_RE.find_iter(text) {
        pieces.push(&text[start..year.end()]);
        start = year.end();
    }
    pieces.push(&text[start..]);

    pieces
        .into_iter()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect()
}
