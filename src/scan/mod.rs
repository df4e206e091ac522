pub mod faq;
pub mod structure;
pub mod text;

use crate::types::page::PageInput;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordCount {
    pub keyword: String,
    pub count: usize,
}

/// Every measurement the scoring steps consume, gathered in one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSignals {
    pub target_keyword: String,
    pub title_length: usize,
    pub title_has_keyword: bool,
    pub meta_length: usize,
    pub meta_has_keyword: bool,
    pub h1_present: bool,
    pub h1_has_keyword: bool,
    pub word_count: usize,
    pub target: KeywordCount,
    pub semantic: Vec<KeywordCount>,
    pub subheading_count: usize,
    pub link_count: usize,
    pub has_faq: bool,
}

pub fn discover(page: &PageInput) -> PageSignals {
    let target_keyword = page.target_keyword.trim().to_string();
    let normalized = text::normalize(&[
        &page.title,
        &page.meta_description,
        &page.h1,
        &page.content,
    ]);

    let target = KeywordCount {
        count: text::count_occurrences(&normalized, &target_keyword),
        keyword: target_keyword.clone(),
    };
    let semantic = page
        .semantic_keywords()
        .map(|keyword| KeywordCount {
            keyword: keyword.to_string(),
            count: text::count_occurrences(&normalized, keyword),
        })
        .collect();

    let word_count = page
        .word_count
        .unwrap_or_else(|| text::word_count(&page.content));
    let subheading_count = page
        .subheadings
        .unwrap_or_else(|| structure::count_subheadings(&page.content));
    let link_count = page.internal_links.unwrap_or_else(|| {
        structure::count_links(&format!(
            "{}\n{}\n{}",
            page.title, page.meta_description, page.content
        ))
    });

    PageSignals {
        title_length: text::char_length(&page.title),
        title_has_keyword: text::contains_keyword(&page.title, &target_keyword),
        meta_length: text::char_length(&page.meta_description),
        meta_has_keyword: text::contains_keyword(&page.meta_description, &target_keyword),
        h1_present: !page.h1.trim().is_empty(),
        h1_has_keyword: text::contains_keyword(&page.h1, &target_keyword),
        word_count,
        target,
        semantic,
        subheading_count,
        link_count,
        has_faq: faq::has_faq_section(&page.title, &page.h1, &page.content),
        target_keyword,
    }
}
