//! Whimsical equivalence metrics and holiday badges.

use chrono::Datelike;
use std::ops::RangeInclusive;

use crate::bundle::Post;

use super::constants::{CLASSIC_TEXT_WORDS, NOVEL_WORDS, THESIS_WORDS};
use super::result::{FunFacts, HolidayBadge};
use super::window::{utc_datetime, AnalysisYearWindow};

/// A calendar match that awards a badge.
#[derive(Debug, Clone)]
pub struct HolidayRule {
    pub badge: HolidayBadge,
    pub month: u32,
    pub days: RangeInclusive<u32>,
    /// Rule only applies in this year (lunar dates move every year).
    pub year: Option<i32>,
}

impl HolidayRule {
    fn new(badge: HolidayBadge, month: u32, days: RangeInclusive<u32>) -> Self {
        Self {
            badge,
            month,
            days,
            year: None,
        }
    }

    fn matches(&self, year: i32, month: u32, day: u32) -> bool {
        self.month == month
            && self.days.contains(&day)
            && self.year.map_or(true, |only| only == year)
    }
}

/// The fixed badge table, in award-check order.
pub fn holiday_rules() -> Vec<HolidayRule> {
    vec![
        HolidayRule::new(HolidayBadge::ChristmasAmbassador, 12, 24..=25),
        HolidayRule::new(HolidayBadge::NewYearPioneer, 1, 1..=1),
        HolidayRule::new(HolidayBadge::NewYearsEveWarrior, 12, 31..=31),
        HolidayRule::new(HolidayBadge::ValentinesExpert, 2, 14..=14),
        HolidayRule {
            year: Some(2025),
            ..HolidayRule::new(HolidayBadge::LunarNewYearHerald, 1, 28..=31)
        },
    ]
}

/// Compute equivalence ratios and badges.
///
/// Badges are awarded once each, in the order they are first earned while
/// scanning posts.
pub fn calculate_fun_facts(
    total_word_count: usize,
    posts: &[Post],
    window: &AnalysisYearWindow,
) -> FunFacts {
    let rules = holiday_rules();
    let mut holiday_badges: Vec<HolidayBadge> = Vec::new();

    for post in posts
        .iter()
        .filter(|post| window.contains(post.creation_timestamp))
    {
        let date = utc_datetime(post.creation_timestamp);
        for rule in &rules {
            if rule.matches(date.year(), date.month(), date.day())
                && !holiday_badges.contains(&rule.badge)
            {
                holiday_badges.push(rule.badge);
            }
        }
    }

    FunFacts {
        books_equivalent: ratio(total_word_count, NOVEL_WORDS),
        thesis_equivalent: ratio(total_word_count, THESIS_WORDS),
        classic_text_equivalent: ratio(total_word_count, CLASSIC_TEXT_WORDS),
        is_holiday_poster: !holiday_badges.is_empty(),
        holiday_badges,
    }
}

/// `words / reference` rounded to two decimals.
fn ratio(words: usize, reference: u64) -> f64 {
    let value = words as f64 / reference as f64;
    (value * 100.0).round() / 100.0
}
