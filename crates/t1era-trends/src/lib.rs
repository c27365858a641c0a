//! Reduces scraped TikTok posts into a niche trend report.

pub mod aggregate;
pub mod post;
pub mod report;

pub use aggregate::{analyze, classify_competition, format_views};
pub use post::RawPost;
pub use report::{CompetitionLevel, Growth, HashtagSummary, NicheStats, TopVideo, TrendReport};
