//! Unit tests for the analysis pipeline as a whole

use recap::analyzer::{
    run_analysis_pipeline_with, AnalysisStage, HolidayBadge, PipelineOptions, SegmenterKind,
    PROGRESS_SCHEDULE,
};
use recap::bundle::{ListItem, ParsedBundle, Post};
use recap::{run_analysis_pipeline, AnalysisYearWindow};

use crate::helpers::*;

#[test]
fn sample_bundle_text_stats() {
    let result = run_analysis_pipeline(&sample_bundle(), None);

    assert_eq!(result.text.total_posts, 6);
    let mentions: Vec<(&str, usize)> = result
        .text
        .top_mentions
        .iter()
        .map(|m| (m.username.as_str(), m.count))
        .collect();
    assert_eq!(mentions, vec![("alice", 3), ("bob", 2), ("carol", 1)]);
}

#[test]
fn sample_bundle_keywords() {
    let result = run_analysis_pipeline(&sample_bundle(), None);
    let keywords = &result.text.top_keywords;

    assert_eq!(keywords[0].keyword, "rust");
    assert_eq!(keywords[0].count, 4);
    assert!(keywords.len() <= 20);
    for keyword in keywords {
        assert!(keyword.count >= 2);
        assert!(keyword.keyword.chars().count() >= 2);
        assert!(!keyword.keyword.starts_with('@'));
        assert_eq!(keyword.keyword, keyword.keyword.to_lowercase());
    }
    assert!(keywords.windows(2).all(|w| w[0].count >= w[1].count));
}

#[test]
fn sample_bundle_time_trends() {
    let result = run_analysis_pipeline(&sample_bundle(), None);
    let time = &result.time;

    assert_eq!(time.posts_in_year, 5);
    assert_eq!(time.monthly_stats.len(), 12);
    assert_eq!(time.heatmap_data.len(), 84);
    let counts: Vec<usize> = time.monthly_stats.iter().map(|m| m.post_count).collect();
    assert_eq!(counts, vec![1, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 1]);
    assert_eq!(
        time.heatmap_data.iter().map(|c| c.count).sum::<usize>(),
        time.posts_in_year
    );
    // active months and weekdays all tie at one post; earliest wins
    assert_eq!(time.most_active_month, 1);
    assert_eq!(time.most_active_day, "Sunday");
}

#[test]
fn sample_bundle_social_counts() {
    let social = run_analysis_pipeline(&sample_bundle(), None).social;

    assert_eq!(social.total_followers, 4);
    assert_eq!(social.new_followers_in_year, 3);
    assert_eq!(social.total_following, 2);
    assert_eq!(social.new_following_in_year, 1);
    assert_eq!(social.total_likes, 3);
    assert_eq!(social.likes_in_year, 2);
    assert_eq!(social.total_saved, 2);
    assert_eq!(social.saved_in_year, 1);

    let growth: Vec<usize> = social
        .follower_growth_by_month
        .iter()
        .map(|g| g.cumulative)
        .collect();
    assert_eq!(growth, vec![0, 0, 1, 1, 1, 3, 3, 3, 3, 3, 3, 3]);
}

#[test]
fn sample_bundle_badges_in_first_earned_order() {
    let facts = run_analysis_pipeline(&sample_bundle(), None).fun_facts;
    assert!(facts.is_holiday_poster);
    assert_eq!(
        facts.holiday_badges,
        vec![
            HolidayBadge::NewYearPioneer,
            HolidayBadge::ValentinesExpert,
            HolidayBadge::ChristmasAmbassador,
        ]
    );
}

#[test]
fn pipeline_is_idempotent() {
    let bundle = sample_bundle();
    assert_eq!(
        run_analysis_pipeline(&bundle, None),
        run_analysis_pipeline(&bundle, None)
    );
}

#[test]
fn empty_bundle_yields_zeroed_result() {
    let result = run_analysis_pipeline(&ParsedBundle::default(), None);

    assert_eq!(result.text.total_posts, 0);
    assert_eq!(result.text.average_words_per_post, 0);
    assert!(result.text.top_mentions.is_empty());
    assert!(result.text.top_keywords.is_empty());
    assert_eq!(result.time.monthly_stats.len(), 12);
    assert_eq!(result.time.heatmap_data.len(), 84);
    assert_eq!(result.time.most_active_month, 1);
    assert_eq!(result.time.most_active_day, "Sunday");
    assert_eq!(result.social.follower_growth_by_month.len(), 12);
    assert!(result
        .social
        .follower_growth_by_month
        .iter()
        .all(|g| g.cumulative == 0));
    assert_eq!(result.fun_facts.books_equivalent, 0.0);
    assert!(!result.fun_facts.is_holiday_poster);
    assert!(result.fun_facts.holiday_badges.is_empty());
}

#[test]
fn window_edges_are_inclusive() {
    let bundle = ParsedBundle {
        posts: posts(&[("edge", LAST_SECOND_2025), ("before", LAST_SECOND_2024)]),
        ..Default::default()
    };
    let result = run_analysis_pipeline(&bundle, None);
    assert_eq!(result.time.posts_in_year, 1);
    assert_eq!(result.time.monthly_stats[11].post_count, 1);
    assert_eq!(
        result.fun_facts.holiday_badges,
        vec![HolidayBadge::NewYearsEveWarrior]
    );
}

#[test]
fn one_novel_of_words_is_one_book() {
    let bundle = ParsedBundle {
        posts: vec![Post::new("字".repeat(1_084_170), JUNE_2025)],
        ..Default::default()
    };
    let facts = run_analysis_pipeline(&bundle, None).fun_facts;
    assert_eq!(facts.books_equivalent, 1.0);
}

#[test]
fn repeated_holiday_posts_award_badge_once() {
    let bundle = ParsedBundle {
        posts: posts(&[
            ("a", CHRISTMAS_2025),
            ("b", CHRISTMAS_2025 + 60),
            ("c", NEW_YEAR_2025),
        ]),
        ..Default::default()
    };
    let badges = run_analysis_pipeline(&bundle, None).fun_facts.holiday_badges;
    assert_eq!(
        badges,
        vec![
            HolidayBadge::ChristmasAmbassador,
            HolidayBadge::NewYearPioneer
        ]
    );
}

#[test]
fn every_like_timestamp_counts() {
    let bundle = ParsedBundle {
        likes: vec![ListItem::with_timestamps(&[MARCH_2025, JUNE_2025])],
        ..Default::default()
    };
    let social = run_analysis_pipeline(&bundle, None).social;
    assert_eq!(social.total_likes, 2);
    assert_eq!(social.likes_in_year, 2);
}

#[test]
fn other_year_moves_the_window() {
    let options = PipelineOptions {
        window: AnalysisYearWindow::for_year(2024).unwrap(),
        ..Default::default()
    };
    let result = run_analysis_pipeline_with(&sample_bundle(), &options, None);
    assert_eq!(result.time.posts_in_year, 1);
    assert!(result.time.monthly_stats.iter().all(|m| m.year == 2024));
    assert_eq!(
        result.fun_facts.holiday_badges,
        vec![HolidayBadge::ChristmasAmbassador]
    );
}

#[test]
fn segmenters_agree_on_plain_text() {
    let bundle = sample_bundle();
    let regex = PipelineOptions {
        segmenter: SegmenterKind::Regex,
        ..Default::default()
    };
    let unicode = run_analysis_pipeline_with(&bundle, &PipelineOptions::default(), None);
    let fallback = run_analysis_pipeline_with(&bundle, &regex, None);
    assert_eq!(
        unicode.text.top_keywords[0],
        fallback.text.top_keywords[0]
    );
}

#[test]
fn progress_follows_schedule() {
    let mut seen: Vec<(AnalysisStage, u8)> = Vec::new();
    let mut record = |stage: AnalysisStage, progress: u8, _: &str| seen.push((stage, progress));
    run_analysis_pipeline(&sample_bundle(), Some(&mut record));

    let expected: Vec<(AnalysisStage, u8)> = PROGRESS_SCHEDULE
        .iter()
        .map(|step| (step.stage, step.progress))
        .collect();
    assert_eq!(seen, expected);
    assert!(seen.windows(2).all(|w| w[0].1 < w[1].1));
    assert_eq!(seen.last(), Some(&(AnalysisStage::Complete, 100)));
}
