use regex::Regex;

/// Lower-cased concatenation of every on-page text field, space separated so
/// phrases never match across a field boundary.
pub fn normalize(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Non-overlapping, case-insensitive literal occurrences of `keyword` in `text`.
pub fn count_occurrences(text: &str, keyword: &str) -> usize {
    let keyword = keyword.trim().to_lowercase();
    if text.is_empty() || keyword.is_empty() {
        return 0;
    }
    // Full lowercasing on the keyword matches what `normalize` does to the text.
    match Regex::new(&format!("(?i){}", regex::escape(&keyword))) {
        Ok(pattern) => pattern.find_iter(text).count(),
        // Only reachable when the keyword blows the compiled-size limit.
        Err(_) => text.to_lowercase().matches(keyword.as_str()).count(),
    }
}

pub fn contains_keyword(haystack: &str, keyword: &str) -> bool {
    let keyword = keyword.trim();
    !keyword.is_empty() && haystack.to_lowercase().contains(&keyword.to_lowercase())
}

pub fn word_count(body: &str) -> usize {
    body.split_whitespace().count()
}

pub fn char_length(text: &str) -> usize {
    text.trim().chars().count()
}
