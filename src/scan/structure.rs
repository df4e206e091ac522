use once_cell::sync::Lazy;
use regex::Regex;

static MARKDOWN_H2_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]{0,3}##[ \t]+\S").expect("markdown h2 pattern should compile")
});

static HTML_H2_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<h2[\s>]").expect("html h2 pattern should compile"));

static MARKDOWN_LINK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[[^\]\n]*\]\([^)\s]+[^)\n]*\)").expect("markdown link pattern should compile")
});

/// An anchor opening tag plus, when present, its body up to the closing tag.
static HTML_ANCHOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)<a\s[^>]*\bhref\s*=[^>]*>(?:.*?</a\s*>)?"#)
        .expect("anchor pattern should compile")
});

static BARE_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)https?://[^\s<>()\[\]"']+"#).expect("url pattern should compile")
});

/// H2-level markers: markdown `## ` headings plus HTML `<h2` tags.
pub fn count_subheadings(body: &str) -> usize {
    MARKDOWN_H2_RE.find_iter(body).count() + HTML_H2_RE.find_iter(body).count()
}

/// Heuristic link count over markdown links, HTML anchors and bare URLs.
///
/// Markdown links and whole anchor elements are blanked out before scanning
/// for bare URLs so a single link is never counted twice.
pub fn count_links(text: &str) -> usize {
    let markdown = MARKDOWN_LINK_RE.find_iter(text).count();
    let without_markdown = MARKDOWN_LINK_RE.replace_all(text, " ");

    let anchors = HTML_ANCHOR_RE.find_iter(&without_markdown).count();
    let without_anchors = HTML_ANCHOR_RE.replace_all(&without_markdown, " ");

    let bare = BARE_URL_RE.find_iter(&without_anchors).count();
    markdown + anchors + bare
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subheadings_count_markdown_and_html_h2_only() {
        let body = "# Title\n## First\ntext\n### Deep\n  ## Second\n<h2>Third</h2>\n<H2 class=\"x\">Fourth</H2>\n<h3>no</h3>";
        assert_eq!(count_subheadings(body), 4);
    }

    #[test]
    fn subheadings_ignore_inline_hashes() {
        assert_eq!(count_subheadings("issue ## 42 is fixed\n##nospace"), 0);
    }

    #[test]
    fn links_count_each_syntax_once() {
        let text = "See [guide](https://example.com/guide) and <a href=\"/sizes\">sizes</a> or https://example.com/faq.";
        assert_eq!(count_links(text), 3);
    }

    #[test]
    fn url_used_as_anchor_text_counts_once() {
        assert_eq!(count_links("<a href=\"/x\">https://example.com</a>"), 1);
        assert_eq!(
            count_links("<A HREF='/a'>\nhttps://a.example\n</A> then https://b.example"),
            2
        );
    }

    #[test]
    fn unclosed_anchor_still_counts() {
        assert_eq!(count_links("<a href=\"/x\">dangling https://c.example"), 2);
    }

    #[test]
    fn links_are_zero_for_plain_text() {
        assert_eq!(count_links("no links here, just [brackets] and (parens)"), 0);
        assert_eq!(count_links(""), 0);
    }

    #[test]
    fn relative_markdown_links_are_counted() {
        assert_eq!(count_links("[home](/) [about](/about)"), 2);
    }
}
