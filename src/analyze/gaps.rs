use crate::scan::PageSignals;
use crate::types::report::{ContentGap, GapTopic, Priority};

pub const DEPTH_MIN_WORDS: usize = 500;
const LISTED_KEYWORDS: usize = 4;

/// Comma-joined preview of the first few keywords, with an "and N more"
/// suffix when truncated.
pub fn keyword_preview(keywords: &[&str]) -> String {
    let shown = keywords
        .iter()
        .take(LISTED_KEYWORDS)
        .copied()
        .collect::<Vec<_>>()
        .join(", ");
    if keywords.len() > LISTED_KEYWORDS {
        format!("{shown} and {} more", keywords.len() - LISTED_KEYWORDS)
    } else {
        shown
    }
}

impl GapTopic {
    pub fn evaluate(self, signals: &PageSignals, missing: &[&str]) -> ContentGap {
        let keyword = signals.target_keyword.as_str();
        let (title, description, severity) = match self {
            GapTopic::ContentDepth => {
                let words = signals.word_count;
                if words < DEPTH_MIN_WORDS {
                    (
                        "Content depth",
                        format!(
                            "At {words} words the page is thinner than pages that usually rank for \"{keyword}\". Expand to 800+ words with subtopics and worked examples."
                        ),
                        Priority::High,
                    )
                } else {
                    (
                        "Content depth",
                        format!(
                            "At {words} words the page has reasonable depth. Add original data or examples to stand out from competing pages."
                        ),
                        Priority::Low,
                    )
                }
            }
            GapTopic::MissingKeywords => {
                if missing.is_empty() {
                    (
                        "Keyword coverage",
                        "Every tracked keyword appears on the page.".to_string(),
                        Priority::Low,
                    )
                } else {
                    (
                        "Missing keywords",
                        format!(
                            "Competing pages cover terms this page never mentions: {}.",
                            keyword_preview(missing)
                        ),
                        Priority::Medium,
                    )
                }
            }
            GapTopic::StructuredData => {
                if signals.has_faq {
                    (
                        "Structured data",
                        "Mark up the FAQ section with FAQPage schema so it can qualify for rich results."
                            .to_string(),
                        Priority::Medium,
                    )
                } else {
                    (
                        "Structured data",
                        format!(
                            "Add Article schema markup describing the page topic \"{keyword}\" to help search engines classify it."
                        ),
                        Priority::Low,
                    )
                }
            }
        };
        ContentGap {
            topic: self,
            id: self.id(),
            title: title.to_string(),
            description,
            severity,
        }
    }
}

pub fn content_gaps(signals: &PageSignals, missing: &[&str]) -> Vec<ContentGap> {
    GapTopic::ALL
        .iter()
        .map(|topic| topic.evaluate(signals, missing))
        .collect()
}
