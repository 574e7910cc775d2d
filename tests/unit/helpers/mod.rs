//! Test helper utilities

#![allow(dead_code)]

use recap::bundle::{ListItem, ParsedBundle, Post, SavedPost, StringEntry};

/// 2025-01-01T10:00:00Z, a Wednesday
pub const NEW_YEAR_2025: i64 = 1_735_725_600;
/// 2025-02-14T12:00:00Z, a Friday
pub const VALENTINES_2025: i64 = 1_739_534_400;
/// 2025-03-10T09:00:00Z, a Monday
pub const MARCH_2025: i64 = 1_741_597_200;
/// 2025-06-15T12:00:00Z, a Sunday
pub const JUNE_2025: i64 = 1_749_988_800;
/// 2025-12-25T20:00:00Z, a Thursday
pub const CHRISTMAS_2025: i64 = 1_766_692_800;
/// 2025-12-31T23:59:59Z, last second of the window
pub const LAST_SECOND_2025: i64 = 1_767_225_599;
/// 2024-12-31T23:59:59Z, one second before the window
pub const LAST_SECOND_2024: i64 = 1_735_689_599;
/// 2024-12-25T10:00:00Z
pub const CHRISTMAS_2024: i64 = 1_735_120_800;

pub fn posts(items: &[(&str, i64)]) -> Vec<Post> {
    items.iter().map(|(title, ts)| Post::new(*title, *ts)).collect()
}

pub fn list(timestamps: &[i64]) -> Vec<ListItem> {
    timestamps
        .iter()
        .map(|ts| ListItem::with_timestamps(&[*ts]))
        .collect()
}

pub fn saved_at(timestamp: i64) -> SavedPost {
    let mut saved = SavedPost::default();
    saved
        .string_map_data
        .insert("儲存時間".to_string(), StringEntry::at(timestamp));
    saved
}

/// A bundle touching every analyzer.
pub fn sample_bundle() -> ParsedBundle {
    ParsedBundle {
        posts: posts(&[
            ("Happy new year @alice! rust rust 新年快樂", NEW_YEAR_2025),
            ("valentine dinner with @Bob and @alice", VALENTINES_2025),
            ("writing rust again, rust is fun", MARCH_2025),
            ("summer 夏天 @carol @bob", JUNE_2025),
            ("merry christmas @alice", CHRISTMAS_2025),
            ("old post from last year", CHRISTMAS_2024),
        ]),
        followers: list(&[CHRISTMAS_2024, MARCH_2025, JUNE_2025, JUNE_2025]),
        following: list(&[MARCH_2025, LAST_SECOND_2024]),
        likes: list(&[NEW_YEAR_2025, JUNE_2025, CHRISTMAS_2024]),
        saved_posts: vec![saved_at(JUNE_2025), saved_at(CHRISTMAS_2024)],
    }
}
