//! Word, character, and mention statistics over the review year's posts.

use crate::bundle::Post;

use super::helpers::{count_characters, count_words, extract_mentions, tally, top_by_count};
use super::result::{MentionCount, TextResult};
use super::window::AnalysisYearWindow;

/// Number of mentions reported.
pub const TOP_MENTIONS: usize = 3;

/// Analyze the text of every in-window post.
///
/// `total_posts` counts the whole archive; every other figure only looks at
/// posts inside `window`. `top_keywords` is left empty for the keyword
/// analyzer to fill.
pub fn analyze_text(posts: &[Post], window: &AnalysisYearWindow) -> TextResult {
    let in_window: Vec<&Post> = posts
        .iter()
        .filter(|post| window.contains(post.creation_timestamp))
        .collect();

    let mut total_word_count = 0;
    let mut total_char_count = 0;
    let mut mentions = Vec::new();

    for post in &in_window {
        let title = post.title.as_str();
        total_word_count += count_words(title);
        total_char_count += count_characters(title);
        mentions.extend(extract_mentions(title).into_iter().map(str::to_lowercase));
    }

    let top_mentions = top_by_count(tally(mentions), TOP_MENTIONS)
        .into_iter()
        .map(|(username, count)| MentionCount { username, count })
        .collect();

    let average_words_per_post = rounded_average(total_word_count, in_window.len());

    tracing::debug!(
        posts = posts.len(),
        in_window = in_window.len(),
        words = total_word_count,
        "text analysis done"
    );

    TextResult {
        total_posts: posts.len(),
        total_word_count,
        total_char_count,
        average_words_per_post,
        top_mentions,
        top_keywords: Vec::new(),
    }
}

/// `total / n` rounded half-up, or 0 when `n` is 0.
fn rounded_average(total: usize, n: usize) -> usize {
    if n == 0 {
        0
    } else {
        (2 * total + n) / (2 * n)
    }
}
