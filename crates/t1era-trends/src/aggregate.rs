//! Trend aggregation over one search's worth of posts.

use std::collections::HashMap;

use crate::post::RawPost;
use crate::report::{
    CompetitionLevel, Growth, HashtagSummary, NicheStats, TopVideo, TrendReport,
};

/// Number of hashtags reported.
pub const TOP_HASHTAG_LIMIT: usize = 5;

/// A hashtag used on more than this many posts is labelled viral. Placeholder
/// heuristic with no data behind it.
pub const VIRAL_USAGE_THRESHOLD: usize = 3;

/// Per-hashtag view figure. Not computed; always this literal.
pub const HASHTAG_VIEWS_PLACEHOLDER: &str = "N/A";

const HIGH_COMPETITION_MIN_POSTS: usize = 15;
const MEDIUM_COMPETITION_MIN_POSTS: usize = 6;

/// Build the trend report for `posts`.
///
/// 1. Count non-empty hashtag names (exact, case-sensitive).
/// 2. Sum play counts and pick the most-played post; ties keep the earlier post.
/// 3. Rank hashtags by usage (stable, so ties keep first-seen order) and keep
///    the top [`TOP_HASHTAG_LIMIT`].
/// 4. Classify competition by post count and format the view total.
///
/// Missing fields never fail; they fall back to the defaults in [`RawPost`].
#[must_use]
pub fn analyze(posts: &[RawPost]) -> TrendReport {
    let trending_hashtags = top_hashtags(count_hashtags(posts));

    let mut total_views: i64 = 0;
    // Starts below zero so the first post with a non-negative count wins.
    let mut max_plays: i64 = -1;
    let mut top_post: Option<&RawPost> = None;

    for post in posts {
        let plays = post.play_count();
        total_views = total_views.saturating_add(plays);
        if plays > max_plays {
            max_plays = plays;
            top_post = Some(post);
        }
    }

    let top_video = top_post.map(|post| TopVideo {
        description: post.description().to_owned(),
        play_count: max_plays,
        url: post.video_url().to_owned(),
        author_name: post.author_name().to_owned(),
        cover_url: post.cover_url().to_owned(),
    });

    let sample_caption = top_video
        .as_ref()
        .map(|v| v.description.clone())
        .unwrap_or_default();

    TrendReport {
        trending_hashtags,
        top_videos: top_video.into_iter().collect(),
        niche_stats: NicheStats {
            total_posts: posts.len(),
            competition_level: classify_competition(posts.len()),
        },
        sample_caption,
        total_niche_views: format_views(total_views),
    }
}

/// Usage counts per hashtag, in first-seen order.
fn count_hashtags(posts: &[RawPost]) -> Vec<(&str, usize)> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for name in posts.iter().flat_map(RawPost::hashtag_names) {
        match index.get(name) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(name, counts.len());
                counts.push((name, 1));
            }
        }
    }

    counts
}

fn top_hashtags(mut counts: Vec<(&str, usize)>) -> Vec<HashtagSummary> {
    // `sort_by` is stable: equal counts keep first-seen order.
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .take(TOP_HASHTAG_LIMIT)
        .map(|(name, usage_count)| HashtagSummary {
            tag: format!("#{name}"),
            views: HASHTAG_VIEWS_PLACEHOLDER.to_owned(),
            usage_count,
            growth: if usage_count > VIRAL_USAGE_THRESHOLD {
                Growth::Viral
            } else {
                Growth::Stable
            },
        })
        .collect()
}

/// 0–5 posts → Low, 6–14 → Medium, 15+ → High.
#[must_use]
pub fn classify_competition(volume: usize) -> CompetitionLevel {
    if volume >= HIGH_COMPETITION_MIN_POSTS {
        CompetitionLevel::High
    } else if volume >= MEDIUM_COMPETITION_MIN_POSTS {
        CompetitionLevel::Medium
    } else {
        CompetitionLevel::Low
    }
}

/// Millions with one decimal above 1,000,000 views, otherwise thousands with
/// one decimal. Totals under 1,000 render as fractions (`300` → `"0.3K"`).
#[must_use]
pub fn format_views(total: i64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let total = total as f64;
    if total > 1_000_000.0 {
        format!("{:.1}M", total / 1_000_000.0)
    } else {
        format!("{:.1}K", total / 1_000.0)
    }
}

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod tests;
