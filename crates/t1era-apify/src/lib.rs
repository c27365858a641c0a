//! Client for the Apify platform API, scoped to running the TikTok search
//! scraper actor and reading back its dataset.

pub mod client;
pub mod error;
pub mod types;

pub use client::ApifyClient;
pub use error::ApifyError;
pub use types::{RunData, TiktokSearchInput, DEFAULT_KEYWORDS, RESULTS_PER_PAGE};
