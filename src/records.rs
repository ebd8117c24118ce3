use serde::{Deserialize, Serialize};

/// One crawled page as stored in the snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    /// Absolute source URL, unique across the snapshot
    pub url: String,

    /// Raw `<title>` text
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub meta: PageMeta,

    /// Text blocks in document order
    #[serde(default)]
    pub content: Vec<ContentBlock>,

    /// Images in document order; position is meaningful to the normalizer
    #[serde(default)]
    pub images: Vec<ImageRef>,
}

impl PageRecord {
    /// Create an empty record for the given URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: String::new(),
            meta: PageMeta::default(),
            content: Vec::new(),
            images: Vec::new(),
        }
    }

    /// Text of the first content block, if any
    pub fn primary_text(&self) -> Option<&str> {
        self.content
            .first()
            .map(|block| block.content.as_str())
            .filter(|text| !text.is_empty())
    }
}

/// `<meta>` description and keywords, empty when absent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub keywords: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
}

impl ContentBlock {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            kind: "text".to_string(),
            content: content.into(),
        }
    }
}

/// A harvested image and where its local copy lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    /// Absolute source URL
    pub src: String,
    #[serde(default)]
    pub alt: String,
    /// Site-relative path of the downloaded copy, e.g. `/images/foo.jpg`
    #[serde(rename = "localPath")]
    pub local_path: String,
}
