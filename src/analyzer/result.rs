//! Result types produced by the analysis pipeline.
//!
//! Serialized in camelCase for the presentation layer. A [`RecapResult`] is
//! built bottom-up and handed over as one value; nothing mutates it after.

use serde::{Deserialize, Serialize};

/// Complete year-in-review output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecapResult {
    pub text: TextResult,
    pub time: TimeResult,
    pub social: SocialResult,
    pub fun_facts: FunFacts,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentionCount {
    pub username: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCount {
    pub keyword: String,
    pub count: usize,
}

/// Counts, averages, and top mentions/keywords over the year's posts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextResult {
    /// All posts in the archive, not only the review year.
    pub total_posts: usize,
    pub total_word_count: usize,
    pub total_char_count: usize,
    pub average_words_per_post: usize,
    pub top_mentions: Vec<MentionCount>,
    /// Filled in by the keyword analyzer.
    pub top_keywords: Vec<KeywordCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyStats {
    /// 1-12
    pub month: u32,
    pub year: i32,
    pub post_count: usize,
    /// Never populated; always 0.
    pub follower_gain: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapCell {
    /// 0-11
    pub month: u32,
    /// 0-6, Sunday = 0
    pub day_of_week: u32,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeResult {
    pub monthly_stats: Vec<MonthlyStats>,
    pub heatmap_data: Vec<HeatmapCell>,
    pub most_active_month: u32,
    pub most_active_day: String,
    pub posts_in_year: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowerGrowth {
    pub month: u32,
    /// Running total of new followers through this month.
    pub cumulative: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialResult {
    pub total_followers: usize,
    pub new_followers_in_year: usize,
    pub total_following: usize,
    pub new_following_in_year: usize,
    pub total_likes: usize,
    pub likes_in_year: usize,
    pub total_saved: usize,
    pub saved_in_year: usize,
    pub follower_growth_by_month: Vec<FollowerGrowth>,
}

/// Date-based badge. Serialized as its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HolidayBadge {
    #[serde(rename = "🎄 Christmas Ambassador")]
    ChristmasAmbassador,
    #[serde(rename = "🎉 New Year Pioneer")]
    NewYearPioneer,
    #[serde(rename = "✨ New Year's Eve Warrior")]
    NewYearsEveWarrior,
    #[serde(rename = "💕 Valentine's Expert")]
    ValentinesExpert,
    #[serde(rename = "🧧 Lunar New Year Herald")]
    LunarNewYearHerald,
}

impl HolidayBadge {
    pub fn label(self) -> &'static str {
        match self {
            HolidayBadge::ChristmasAmbassador => "🎄 Christmas Ambassador",
            HolidayBadge::NewYearPioneer => "🎉 New Year Pioneer",
            HolidayBadge::NewYearsEveWarrior => "✨ New Year's Eve Warrior",
            HolidayBadge::ValentinesExpert => "💕 Valentine's Expert",
            HolidayBadge::LunarNewYearHerald => "🧧 Lunar New Year Herald",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunFacts {
    pub books_equivalent: f64,
    pub thesis_equivalent: f64,
    pub classic_text_equivalent: f64,
    pub is_holiday_poster: bool,
    pub holiday_badges: Vec<HolidayBadge>,
}
