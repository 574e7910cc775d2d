//! Keyword frequency ranking.

use crate::bundle::Post;

use super::constants::is_stop_word;
use super::helpers::{is_numeral, simple_segment, tally, top_by_count};
use super::result::KeywordCount;
use super::segment::Segmenter;
use super::window::AnalysisYearWindow;

/// Maximum number of keywords reported.
pub const TOP_KEYWORDS: usize = 20;
/// A keyword must appear at least this often to be reported.
pub const MIN_KEYWORD_COUNT: usize = 2;

/// Rank the most frequent keywords across in-window posts.
pub fn analyze_keywords(
    posts: &[Post],
    window: &AnalysisYearWindow,
    segmenter: &dyn Segmenter,
) -> Vec<KeywordCount> {
    let tokens = posts
        .iter()
        .filter(|post| window.contains(post.creation_timestamp))
        .filter(|post| !post.title.trim().is_empty())
        .flat_map(|post| simple_segment(&post.title, segmenter))
        .map(|word| word.trim().to_lowercase())
        .filter(|word| is_keyword(word));

    let mut counts = tally(tokens);
    counts.retain(|(_, count)| *count >= MIN_KEYWORD_COUNT);

    let keywords: Vec<KeywordCount> = top_by_count(counts, TOP_KEYWORDS)
        .into_iter()
        .map(|(keyword, count)| KeywordCount { keyword, count })
        .collect();

    tracing::debug!(keywords = keywords.len(), "keyword analysis done");
    keywords
}

fn is_keyword(word: &str) -> bool {
    word.chars().count() >= 2
        && !is_stop_word(word)
        && !is_numeral(word)
        && !word.starts_with('@')
}
