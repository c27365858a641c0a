use serde::Serialize;

/// Growth label for a hashtag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Growth {
    Viral,
    Stable,
}

/// Coarse niche saturation by post volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CompetitionLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HashtagSummary {
    /// Hashtag with a leading `#`.
    pub tag: String,
    /// Always `"N/A"`; per-hashtag views are not computed.
    pub views: String,
    pub usage_count: usize,
    pub growth: Growth,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopVideo {
    pub description: String,
    pub play_count: i64,
    pub url: String,
    pub author_name: String,
    pub cover_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NicheStats {
    pub total_posts: usize,
    pub competition_level: CompetitionLevel,
}

/// Response body of a trend analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendReport {
    pub trending_hashtags: Vec<HashtagSummary>,
    /// Zero or one entry: the most-played post.
    pub top_videos: Vec<TopVideo>,
    pub niche_stats: NicheStats,
    pub sample_caption: String,
    pub total_niche_views: String,
}
