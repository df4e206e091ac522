use serde::Serialize;

pub type Points = u32;

pub const TITLE_MAX: Points = 15;
pub const META_DESCRIPTION_MAX: Points = 15;
pub const H1_MAX: Points = 10;
pub const CONTENT_LENGTH_MAX: Points = 20;
pub const KEYWORD_DENSITY_MAX: Points = 15;
pub const SEMANTIC_COVERAGE_MAX: Points = 15;
pub const SUBHEADINGS_MAX: Points = 5;
pub const LINKS_MAX: Points = 5;

pub const MAX_SCORE: Points = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FactorScore {
    pub points: Points,
    pub max: Points,
}

impl FactorScore {
    pub fn new(points: Points, max: Points) -> Self {
        Self {
            points: points.min(max),
            max,
        }
    }
}

/// Per-factor contributions of the eight weighted checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub title: FactorScore,
    pub meta_description: FactorScore,
    pub h1: FactorScore,
    pub content_length: FactorScore,
    pub keyword_density: FactorScore,
    pub semantic_coverage: FactorScore,
    pub subheadings: FactorScore,
    pub links: FactorScore,
}

impl ScoreBreakdown {
    pub fn factors(&self) -> [(&'static str, FactorScore); 8] {
        [
            ("title", self.title),
            ("meta_description", self.meta_description),
            ("h1", self.h1),
            ("content_length", self.content_length),
            ("keyword_density", self.keyword_density),
            ("semantic_coverage", self.semantic_coverage),
            ("subheadings", self.subheadings),
            ("links", self.links),
        ]
    }

    pub fn raw(&self) -> Points {
        self.factors().iter().map(|(_, factor)| factor.points).sum()
    }

    pub fn percentage(&self) -> Points {
        self.raw().min(MAX_SCORE)
    }
}
