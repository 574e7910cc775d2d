//! Small pure text helpers shared by the analyzers.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

use super::segment::{is_cjk_ideograph, Segmenter};

static MENTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@([a-zA-Z0-9._]+)").expect("valid regex"));

/// Count words: every CJK ideograph is one word, the remaining text is split
/// on whitespace.
pub fn count_words(text: &str) -> usize {
    if text.trim().is_empty() {
        return 0;
    }

    let cjk = text.chars().filter(|&c| is_cjk_ideograph(c)).count();
    let rest: String = text
        .chars()
        .map(|c| if is_cjk_ideograph(c) { ' ' } else { c })
        .collect();

    cjk + rest.split_whitespace().count()
}

/// Count characters, ignoring all whitespace.
pub fn count_characters(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

/// Extract `@handle` mentions (without the `@`).
///
/// Handles shorter than two characters or made only of digits are skipped.
pub fn extract_mentions(text: &str) -> Vec<&str> {
    MENTION_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|handle| handle.len() >= 2 && !is_numeral(handle))
        .collect()
}

/// Word-like tokens of `text`, in segmenter order.
pub fn simple_segment<'a>(text: &'a str, segmenter: &dyn Segmenter) -> Vec<&'a str> {
    segmenter.words(text)
}

/// Count occurrences, keeping entries in first-seen order.
pub fn tally<I>(items: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = String>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for item in items {
        match index.get(&item) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(item.clone(), counts.len());
                counts.push((item, 1));
            }
        }
    }

    counts
}

/// Sort by count descending (ties keep first-seen order) and keep `limit`.
pub fn top_by_count(mut counts: Vec<(String, usize)>, limit: usize) -> Vec<(String, usize)> {
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(limit);
    counts
}

/// True for a non-empty string of ASCII digits.
pub fn is_numeral(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
