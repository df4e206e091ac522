use crate::types::scoring::{Points, ScoreBreakdown};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordStatus {
    Covered,
    NeedsWork,
    Missing,
}

impl fmt::Display for KeywordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            KeywordStatus::Covered => "covered",
            KeywordStatus::NeedsWork => "needs work",
            KeywordStatus::Missing => "missing",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordRecord {
    pub keyword: String,
    pub is_target: bool,
    pub count: usize,
    pub status: KeywordStatus,
    pub recommended_min: usize,
    pub recommended_max: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Ok,
    Warn,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Ok => "ok",
            Severity::Warn => "warn",
            Severity::Error => "error",
        };
        f.write_str(label)
    }
}

/// Ordered so that `High` sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationTopic {
    Title,
    H1,
    Subheadings,
    ContentLength,
    InternalLinks,
    MetaDescription,
    Faq,
}

impl RecommendationTopic {
    pub const ALL: [RecommendationTopic; 7] = [
        RecommendationTopic::Title,
        RecommendationTopic::H1,
        RecommendationTopic::Subheadings,
        RecommendationTopic::ContentLength,
        RecommendationTopic::InternalLinks,
        RecommendationTopic::MetaDescription,
        RecommendationTopic::Faq,
    ];

    pub fn id(self) -> &'static str {
        match self {
            RecommendationTopic::Title => "rec.title",
            RecommendationTopic::H1 => "rec.h1",
            RecommendationTopic::Subheadings => "rec.subheadings",
            RecommendationTopic::ContentLength => "rec.content_length",
            RecommendationTopic::InternalLinks => "rec.internal_links",
            RecommendationTopic::MetaDescription => "rec.meta_description",
            RecommendationTopic::Faq => "rec.faq",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RecommendationTopic::Title => "Title tag",
            RecommendationTopic::H1 => "H1 heading",
            RecommendationTopic::Subheadings => "Subheadings",
            RecommendationTopic::ContentLength => "Content length",
            RecommendationTopic::InternalLinks => "Internal links",
            RecommendationTopic::MetaDescription => "Meta description",
            RecommendationTopic::Faq => "FAQ section",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub topic: RecommendationTopic,
    pub id: &'static str,
    pub severity: Severity,
    pub label: &'static str,
    pub detail: String,
}

impl Recommendation {
    pub fn new(topic: RecommendationTopic, severity: Severity, detail: impl Into<String>) -> Self {
        Self {
            topic,
            id: topic.id(),
            severity,
            label: topic.label(),
            detail: detail.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GapTopic {
    ContentDepth,
    MissingKeywords,
    StructuredData,
}

impl GapTopic {
    pub const ALL: [GapTopic; 3] = [
        GapTopic::ContentDepth,
        GapTopic::MissingKeywords,
        GapTopic::StructuredData,
    ];

    pub fn id(self) -> &'static str {
        match self {
            GapTopic::ContentDepth => "gap.content_depth",
            GapTopic::MissingKeywords => "gap.missing_keywords",
            GapTopic::StructuredData => "gap.structured_data",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentGap {
    pub topic: GapTopic,
    pub id: &'static str,
    pub title: String,
    pub description: String,
    pub severity: Priority,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickWin {
    pub priority: Priority,
    pub title: String,
    pub detail: String,
}

impl QuickWin {
    pub fn new(priority: Priority, title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            priority,
            title: title.into(),
            detail: detail.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct KeywordTally {
    pub covered: usize,
    pub needs_work: usize,
    pub missing: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreReport {
    pub url: String,
    pub target_keyword: String,
    pub score: Points,
    pub percentage: Points,
    pub breakdown: ScoreBreakdown,
    pub keywords: Vec<KeywordRecord>,
    pub recommendations: Vec<Recommendation>,
    pub content_gaps: Vec<ContentGap>,
    pub quick_wins: Vec<QuickWin>,
    pub tally: KeywordTally,
    pub word_count: usize,
}

impl ScoreReport {
    pub fn worst_severity(&self) -> Severity {
        self.recommendations
            .iter()
            .map(|recommendation| recommendation.severity)
            .max()
            .unwrap_or(Severity::Ok)
    }
}
