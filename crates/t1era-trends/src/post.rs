//! Typed read access over loosely-shaped scraper records.
//!
//! The TikTok scraper has shipped several output layouts over time (nested
//! `stats.playCount` vs. flat `playCount`, `text` vs. `desc`, ...). Records are
//! kept as raw JSON and every accessor returns an explicit default when a
//! field is missing or has an unexpected type.

use serde::{Deserialize, Serialize};
use serde_json::Value;

const UNKNOWN_AUTHOR: &str = "Unknown";

/// One post as returned by the scraper dataset.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawPost(pub Value);

impl From<Value> for RawPost {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl RawPost {
    /// Non-empty hashtag names in the order they appear on the post.
    pub fn hashtag_names(&self) -> impl Iterator<Item = &str> {
        self.0
            .get("hashtags")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(|tag| tag.get("name").and_then(Value::as_str))
            .filter(|name| !name.is_empty())
    }

    /// Play count from `stats.playCount`, then `playCount`, else 0.
    #[must_use]
    pub fn play_count(&self) -> i64 {
        self.nested("stats", "playCount")
            .and_then(as_count)
            .or_else(|| self.0.get("playCount").and_then(as_count))
            .unwrap_or(0)
    }

    /// Caption from `text`, then `desc`, else empty.
    #[must_use]
    pub fn description(&self) -> &str {
        self.str_field("text")
            .or_else(|| self.str_field("desc"))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn video_url(&self) -> &str {
        self.str_field("webVideoUrl")
            .or_else(|| self.str_field("videoUrl"))
            .unwrap_or_default()
    }

    /// Display name from `authorMeta.name`, then `author.uniqueId`, else
    /// `"Unknown"`.
    #[must_use]
    pub fn author_name(&self) -> &str {
        self.nested("authorMeta", "name")
            .and_then(Value::as_str)
            .or_else(|| self.nested("author", "uniqueId").and_then(Value::as_str))
            .unwrap_or(UNKNOWN_AUTHOR)
    }

    #[must_use]
    pub fn cover_url(&self) -> &str {
        self.nested("videoMeta", "coverUrl")
            .and_then(Value::as_str)
            .or_else(|| self.str_field("cover"))
            .unwrap_or_default()
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    fn nested(&self, outer: &str, inner: &str) -> Option<&Value> {
        self.0.get(outer).and_then(|o| o.get(inner))
    }
}

/// Integer counts occasionally arrive as floats (`1.2e6`); truncate those.
#[allow(clippy::cast_possible_truncation)]
fn as_count(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.is_finite())
            .map(|f| f as i64)
    })
}
