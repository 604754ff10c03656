use async_trait::async_trait;
use thiserror::Error;

use crate::models::Match;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("match data API error {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to parse match data: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Trait that every live-match source must implement.
#[async_trait]
pub trait MatchProvider: Send + Sync {
    /// Return a snapshot of all currently live matches.
    async fn fetch_live_matches(&self) -> Result<Vec<Match>, FetchError>;

    /// Human-readable name for logging.
    fn name(&self) -> &str;
}
