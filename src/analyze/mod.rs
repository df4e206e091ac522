pub mod content;
pub mod gaps;
pub mod keywords;
pub mod onpage;
pub mod quick_wins;
pub mod recommendations;
pub mod structure;

use crate::scan::{self, PageSignals};
use crate::types::page::PageInput;
use crate::types::report::ScoreReport;
use crate::types::scoring::ScoreBreakdown;

pub fn breakdown(signals: &PageSignals) -> ScoreBreakdown {
    ScoreBreakdown {
        title: onpage::title_score(signals),
        meta_description: onpage::meta_description_score(signals),
        h1: onpage::h1_score(signals),
        content_length: content::content_length_score(signals.word_count),
        keyword_density: content::keyword_density_score(signals.target.count),
        semantic_coverage: content::semantic_coverage_score(&signals.semantic),
        subheadings: structure::subheadings_score(signals.subheading_count),
        links: structure::links_score(signals.link_count),
    }
}

/// Scores one page against its target and semantic keywords.
pub fn analyze(page: &PageInput) -> ScoreReport {
    let signals = scan::discover(page);
    let breakdown = breakdown(&signals);

    let keywords = keywords::classify(&signals);
    let tally = keywords::tally(&keywords);
    let missing = keywords::missing_keywords(&keywords);

    let recommendations = recommendations::recommendations(&signals);
    let content_gaps = gaps::content_gaps(&signals, &missing);
    let quick_wins = quick_wins::quick_wins(&signals, &missing);

    tracing::debug!(
        score = breakdown.raw(),
        word_count = signals.word_count,
        target_count = signals.target.count,
        links = signals.link_count,
        faq = signals.has_faq,
        "page analyzed"
    );

    ScoreReport {
        url: page.url.clone(),
        target_keyword: signals.target_keyword.clone(),
        score: breakdown.raw(),
        percentage: breakdown.percentage(),
        breakdown,
        keywords,
        recommendations,
        content_gaps,
        quick_wins,
        tally,
        word_count: signals.word_count,
    }
}
