//! Follower, following, like, and saved-post metrics.

use crate::bundle::{ListItem, SavedPost};

use super::constants::SAVED_TIME_KEY;
use super::result::{FollowerGrowth, SocialResult};
use super::window::{utc_month, AnalysisYearWindow};

/// Social-graph inputs, borrowed from the bundle.
#[derive(Debug, Clone, Copy)]
pub struct SocialInputs<'a> {
    pub followers: &'a [ListItem],
    pub following: &'a [ListItem],
    pub likes: &'a [ListItem],
    pub saved_posts: &'a [SavedPost],
}

/// Compute totals, in-window counts, and cumulative follower growth.
///
/// Followers and following use each item's first timestamp. Every entry of a
/// like-item is one like. Saved posts without the saved-time label count
/// toward the total only.
pub fn analyze_social(inputs: SocialInputs<'_>, window: &AnalysisYearWindow) -> SocialResult {
    let in_window = |item: &&ListItem| window.contains(item.effective_timestamp());

    let new_followers: Vec<&ListItem> = inputs.followers.iter().filter(in_window).collect();
    let new_following_in_year = inputs.following.iter().filter(in_window).count();

    let total_likes = inputs
        .likes
        .iter()
        .map(|like| like.string_list_data.len())
        .sum();
    let likes_in_year = inputs
        .likes
        .iter()
        .flat_map(|like| &like.string_list_data)
        .filter(|entry| window.contains(entry.timestamp))
        .count();

    let saved_in_year = inputs
        .saved_posts
        .iter()
        .filter_map(|post| post.timestamp_for(SAVED_TIME_KEY))
        .filter(|&ts| window.contains(ts))
        .count();

    let follower_growth_by_month = cumulative_growth(
        new_followers
            .iter()
            .map(|follower| utc_month(follower.effective_timestamp())),
    );

    tracing::debug!(
        followers = inputs.followers.len(),
        new_followers = new_followers.len(),
        likes_in_year,
        saved_in_year,
        "social analysis done"
    );

    SocialResult {
        total_followers: inputs.followers.len(),
        new_followers_in_year: new_followers.len(),
        total_following: inputs.following.len(),
        new_following_in_year,
        total_likes,
        likes_in_year,
        total_saved: inputs.saved_posts.len(),
        saved_in_year,
        follower_growth_by_month,
    }
}

/// Tally months (1-12) then prefix-sum them in month order.
fn cumulative_growth(months: impl Iterator<Item = u32>) -> Vec<FollowerGrowth> {
    let mut per_month = [0usize; 12];
    for month in months {
        per_month[(month - 1) as usize] += 1;
    }

    let mut cumulative = 0;
    (1..=12u32)
        .zip(per_month)
        .map(|(month, count)| {
            cumulative += count;
            FollowerGrowth { month, cumulative }
        })
        .collect()
}
