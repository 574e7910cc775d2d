//! Monthly histogram and month x weekday heatmap.

use chrono::Datelike;

use crate::bundle::Post;

use super::constants::DAY_NAMES;
use super::result::{HeatmapCell, MonthlyStats, TimeResult};
use super::window::{utc_datetime, AnalysisYearWindow};

/// Bucket in-window posts by month and weekday (UTC).
///
/// All 12 months and all 84 heatmap cells are always present. Ties for the
/// most active month or weekday go to the earliest one.
pub fn analyze_time(posts: &[Post], window: &AnalysisYearWindow) -> TimeResult {
    let mut heatmap = [[0usize; 7]; 12];
    let mut posts_in_year = 0;

    for post in posts
        .iter()
        .filter(|post| window.contains(post.creation_timestamp))
    {
        let date = utc_datetime(post.creation_timestamp);
        heatmap[date.month0() as usize][date.weekday().num_days_from_sunday() as usize] += 1;
        posts_in_year += 1;
    }

    let monthly_stats: Vec<MonthlyStats> = (0..12u32)
        .map(|month0| MonthlyStats {
            month: month0 + 1,
            year: window.year,
            post_count: heatmap[month0 as usize].iter().sum(),
            follower_gain: 0,
        })
        .collect();

    let heatmap_data: Vec<HeatmapCell> = (0..12u32)
        .flat_map(|month| {
            (0..7u32).map(move |day_of_week| HeatmapCell {
                month,
                day_of_week,
                count: heatmap[month as usize][day_of_week as usize],
            })
        })
        .collect();

    let most_active_month = first_max(monthly_stats.iter().map(|m| m.post_count)) as u32 + 1;

    let day_totals = (0..7).map(|day| heatmap.iter().map(|row| row[day]).sum::<usize>());
    let most_active_day = DAY_NAMES[first_max(day_totals)].to_string();

    tracing::debug!(posts_in_year, most_active_month, "time analysis done");

    TimeResult {
        monthly_stats,
        heatmap_data,
        most_active_month,
        most_active_day,
        posts_in_year,
    }
}

/// Index of the first strictly-greatest value; 0 for all-zero or empty input.
fn first_max(values: impl Iterator<Item = usize>) -> usize {
    let mut best = (0, 0);
    for (index, value) in values.enumerate() {
        if value > best.1 {
            best = (index, value);
        }
    }
    best.0
}
