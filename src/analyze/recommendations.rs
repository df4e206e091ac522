use super::onpage::{meta_length_ok, title_length_ok, META_LENGTH, TITLE_LENGTH};
use crate::scan::PageSignals;
use crate::types::report::{Recommendation, RecommendationTopic, Severity};

const CONTENT_TARGET_WORDS: usize = 800;
const CONTENT_MIN_WORDS: usize = 500;
const LINK_TARGET: usize = 3;

impl RecommendationTopic {
    pub fn evaluate(self, signals: &PageSignals) -> Recommendation {
        let keyword = signals.target_keyword.as_str();
        let (severity, detail) = match self {
            RecommendationTopic::Title => title(signals, keyword),
            RecommendationTopic::H1 => h1(signals, keyword),
            RecommendationTopic::Subheadings => subheadings(signals.subheading_count),
            RecommendationTopic::ContentLength => content_length(signals.word_count),
            RecommendationTopic::InternalLinks => internal_links(signals.link_count),
            RecommendationTopic::MetaDescription => meta_description(signals, keyword),
            RecommendationTopic::Faq => faq(signals.has_faq, keyword),
        };
        Recommendation::new(self, severity, detail)
    }
}

/// One recommendation per topic, in the fixed topic order.
pub fn recommendations(signals: &PageSignals) -> Vec<Recommendation> {
    RecommendationTopic::ALL
        .iter()
        .map(|topic| topic.evaluate(signals))
        .collect()
}

fn title(signals: &PageSignals, keyword: &str) -> (Severity, String) {
    let length = signals.title_length;
    match (signals.title_has_keyword, title_length_ok(signals)) {
        (true, true) => (
            Severity::Ok,
            format!("Title is {length} characters and includes \"{keyword}\"."),
        ),
        (true, false) => (
            Severity::Warn,
            format!(
                "Title includes \"{keyword}\" but is {length} characters; aim for {}-{}.",
                TITLE_LENGTH.start(),
                TITLE_LENGTH.end()
            ),
        ),
        (false, true) => (
            Severity::Error,
            format!("Title is missing the target keyword \"{keyword}\"."),
        ),
        (false, false) => (
            Severity::Error,
            format!(
                "Title is {length} characters and missing \"{keyword}\"; rewrite it to {}-{} characters around the keyword.",
                TITLE_LENGTH.start(),
                TITLE_LENGTH.end()
            ),
        ),
    }
}

fn h1(signals: &PageSignals, keyword: &str) -> (Severity, String) {
    match (signals.h1_present, signals.h1_has_keyword) {
        (true, true) => (Severity::Ok, format!("H1 includes \"{keyword}\".")),
        (true, false) => (
            Severity::Warn,
            format!("H1 is present but does not mention \"{keyword}\"."),
        ),
        (false, _) => (
            Severity::Error,
            format!("Page has no H1; add one that includes \"{keyword}\"."),
        ),
    }
}

fn subheadings(count: usize) -> (Severity, String) {
    match count {
        0 => (
            Severity::Error,
            "No H2 subheadings found; break the content into sections.".to_string(),
        ),
        1 => (
            Severity::Warn,
            "Only 1 H2 subheading found; add at least one more section.".to_string(),
        ),
        n => (Severity::Ok, format!("{n} H2 subheadings structure the content.")),
    }
}

fn content_length(words: usize) -> (Severity, String) {
    if words >= CONTENT_TARGET_WORDS {
        (
            Severity::Ok,
            format!("{words} words meets the {CONTENT_TARGET_WORDS}-word depth target."),
        )
    } else if words >= CONTENT_MIN_WORDS {
        (
            Severity::Warn,
            format!("{words} words; expand toward {CONTENT_TARGET_WORDS}+ words."),
        )
    } else {
        (
            Severity::Error,
            format!(
                "{words} words is thin content; aim for at least {CONTENT_MIN_WORDS}, ideally {CONTENT_TARGET_WORDS}+."
            ),
        )
    }
}

fn internal_links(count: usize) -> (Severity, String) {
    if count >= LINK_TARGET {
        (Severity::Ok, format!("{count} links found."))
    } else if count >= 1 {
        let plural = if count == 1 { "link" } else { "links" };
        (
            Severity::Warn,
            format!(
                "{count} {plural} found; add at least {} more internal links.",
                LINK_TARGET - count
            ),
        )
    } else {
        (
            Severity::Error,
            format!("No links found; link to at least {LINK_TARGET} related pages."),
        )
    }
}

fn meta_description(signals: &PageSignals, keyword: &str) -> (Severity, String) {
    let length = signals.meta_length;
    let (min, max) = (*META_LENGTH.start(), *META_LENGTH.end());
    match (signals.meta_has_keyword, meta_length_ok(signals)) {
        (true, true) => (
            Severity::Ok,
            format!("Meta description is {length} characters and includes \"{keyword}\"."),
        ),
        (true, false) => (
            Severity::Warn,
            format!(
                "Meta description includes \"{keyword}\" but is {length} characters; aim for {min}-{max}."
            ),
        ),
        (false, true) => (
            Severity::Warn,
            format!("Meta description length is good ({length}) but it is missing \"{keyword}\"."),
        ),
        (false, false) if length == 0 => (
            Severity::Error,
            format!("No meta description; write {min}-{max} characters that include \"{keyword}\"."),
        ),
        (false, false) => (
            Severity::Error,
            format!(
                "Meta description is {length} characters and missing \"{keyword}\"; rewrite it to {min}-{max} characters."
            ),
        ),
    }
}

fn faq(has_faq: bool, keyword: &str) -> (Severity, String) {
    if has_faq {
        (Severity::Ok, "FAQ section detected.".to_string())
    } else {
        (
            Severity::Error,
            format!("No FAQ section found; answer common questions about \"{keyword}\"."),
        )
    }
}
