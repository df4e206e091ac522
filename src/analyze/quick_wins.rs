use super::gaps::{keyword_preview, DEPTH_MIN_WORDS};
use super::onpage::{meta_length_ok, META_LENGTH};
use crate::scan::PageSignals;
use crate::types::report::{Priority, QuickWin};

const QUICK_WIN_LINK_FLOOR: usize = 3;

/// Five independent checks in a fixed order; each adds at most one item.
pub fn quick_wins(signals: &PageSignals, missing: &[&str]) -> Vec<QuickWin> {
    let keyword = signals.target_keyword.as_str();
    let mut wins = Vec::new();

    if !signals.meta_has_keyword || !meta_length_ok(signals) {
        wins.push(QuickWin::new(
            Priority::High,
            "Rewrite the meta description",
            format!(
                "Write a {}-{} character meta description that includes \"{keyword}\" (currently {} characters).",
                META_LENGTH.start(),
                META_LENGTH.end(),
                signals.meta_length
            ),
        ));
    }

    if signals.word_count < DEPTH_MIN_WORDS {
        wins.push(QuickWin::new(
            Priority::High,
            "Expand the content",
            format!(
                "The page has {} words; add at least {} more to reach {DEPTH_MIN_WORDS}.",
                signals.word_count,
                DEPTH_MIN_WORDS - signals.word_count
            ),
        ));
    }

    if !missing.is_empty() {
        wins.push(QuickWin::new(
            Priority::Medium,
            "Work in missing keywords",
            format!("Mention {} at least once.", keyword_preview(missing)),
        ));
    }

    if !signals.has_faq {
        wins.push(QuickWin::new(
            Priority::Medium,
            "Add an FAQ section",
            format!("Answer three to five common questions about \"{keyword}\"."),
        ));
    }

    if signals.link_count < QUICK_WIN_LINK_FLOOR {
        wins.push(QuickWin::new(
            Priority::Low,
            "Add internal links",
            format!(
                "Found {} links; link to at least {QUICK_WIN_LINK_FLOOR} related pages.",
                signals.link_count
            ),
        ));
    }

    wins
}
