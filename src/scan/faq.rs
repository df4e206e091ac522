use once_cell::sync::Lazy;
use regex::Regex;

static MARKUP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[*_#`~]+").expect("markup pattern should compile"));

static FAQ_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:faqs?|frequently\s+asked\s+questions|common\s+questions|questions\s+(?:and|&)\s+answers|q\s*&\s*a)\b",
    )
    .expect("faq pattern should compile")
});

/// True when any field carries an FAQ indicator once emphasis and heading
/// markers are stripped.
pub fn has_faq_section(title: &str, h1: &str, body: &str) -> bool {
    [body, h1, title]
        .iter()
        .any(|field| FAQ_RE.is_match(&MARKUP_RE.replace_all(field, "")))
}
