use serde::{Deserialize, Serialize};

/// Structured page text handed to the scorer by the extraction layer.
///
/// The optional overrides take precedence over the scanner's own heuristics
/// when present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInput {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub competitor_urls: Vec<String>,
    pub target_keyword: String,
    #[serde(default)]
    pub semantic_keywords: Vec<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub meta_description: String,
    #[serde(default)]
    pub h1: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub word_count: Option<usize>,
    #[serde(default)]
    pub internal_links: Option<usize>,
    #[serde(default)]
    pub subheadings: Option<usize>,
}

impl PageInput {
    #[cfg(test)]
    pub fn new(target_keyword: impl Into<String>) -> Self {
        Self {
            target_keyword: target_keyword.into(),
            ..Self::default()
        }
    }

    /// Semantic keywords with blank entries dropped, in input order.
    pub fn semantic_keywords(&self) -> impl Iterator<Item = &str> {
        self.semantic_keywords
            .iter()
            .map(|keyword| keyword.trim())
            .filter(|keyword| !keyword.is_empty())
    }
}
