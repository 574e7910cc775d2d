//! Pre-parsed archive bundle consumed by the analysis pipeline.
//!
//! The bundle is produced by the upload/parsing layer (file selection,
//! JSON parsing and encoding repair all happen there). Every field defaults
//! to an empty value so a missing export file or a `null` title never
//! reaches the analyzers as an error.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Treat an explicit JSON `null` the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Everything one analysis run looks at.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedBundle {
    #[serde(default, deserialize_with = "null_as_default")]
    pub posts: Vec<Post>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub followers: Vec<ListItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub following: Vec<ListItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub likes: Vec<ListItem>,
    #[serde(
        rename = "savedPosts",
        alias = "saved_posts",
        default,
        deserialize_with = "null_as_default"
    )]
    pub saved_posts: Vec<SavedPost>,
}

/// A single post or reply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Epoch seconds; `0` when the export omitted it.
    #[serde(default, deserialize_with = "null_as_default")]
    pub creation_timestamp: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub media: Vec<PostMedia>,
}

impl Post {
    pub fn new(title: impl Into<String>, creation_timestamp: i64) -> Self {
        Self {
            title: title.into(),
            creation_timestamp,
            media: Vec::new(),
        }
    }
}

/// Media attached to a post. Carried through untouched; no analyzer reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostMedia {
    #[serde(default, deserialize_with = "null_as_default")]
    pub uri: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub creation_timestamp: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
}

/// One `{href, value, timestamp}` record from the export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StringEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub href: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub timestamp: i64,
}

impl StringEntry {
    pub fn at(timestamp: i64) -> Self {
        Self {
            timestamp,
            ..Default::default()
        }
    }
}

/// Follower, following, and liked-post records all share this shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(
        rename = "string_list_data",
        alias = "stringListData",
        default,
        deserialize_with = "null_as_default"
    )]
    pub string_list_data: Vec<StringEntry>,
}

impl ListItem {
    /// Build an item whose inner list holds one entry per timestamp.
    pub fn with_timestamps(timestamps: &[i64]) -> Self {
        Self {
            title: String::new(),
            string_list_data: timestamps.iter().copied().map(StringEntry::at).collect(),
        }
    }

    /// The first entry's timestamp, or `0` for an empty list.
    pub fn effective_timestamp(&self) -> i64 {
        self.string_list_data
            .first()
            .map(|entry| entry.timestamp)
            .unwrap_or(0)
    }
}

/// A saved post, keyed by localized labels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SavedPost {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(
        rename = "string_map_data",
        alias = "stringMapData",
        default,
        deserialize_with = "null_as_default"
    )]
    pub string_map_data: HashMap<String, StringEntry>,
}

impl SavedPost {
    /// Timestamp stored under `label`, if the export carried it.
    pub fn timestamp_for(&self, label: &str) -> Option<i64> {
        self.string_map_data.get(label).map(|entry| entry.timestamp)
    }
}
