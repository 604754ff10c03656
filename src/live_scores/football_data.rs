use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::provider::{FetchError, MatchProvider};
use crate::models::Match;

/// Match provider backed by the football-data.org v2 API.
/// Docs: <https://www.football-data.org/documentation/api>
pub struct FootballData {
    http: Client,
    api_key: String,
    /// Base URL for overriding in tests
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct MatchesResponse {
    #[serde(default)]
    matches: Vec<Match>,
}

impl FootballData {
    pub fn new(api_key: &str, base_url: Option<&str>) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(FootballData {
            http,
            api_key: api_key.to_string(),
            base_url: base_url
                .unwrap_or("https://api.football-data.org/v2")
                .trim_end_matches('/')
                .to_string(),
        })
    }
}

#[async_trait]
impl MatchProvider for FootballData {
    fn name(&self) -> &str {
        "football-data.org"
    }

    async fn fetch_live_matches(&self) -> Result<Vec<Match>, FetchError> {
        let url = format!("{}/matches", self.base_url);
        debug!("Fetching live matches from {}", url);

        let resp = self
            .http
            .get(&url)
            .header("X-Auth-Token", &self.api_key)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(FetchError::Status { status, body });
        }

        let body = resp.text().await?;
        parse_matches_response(&body)
    }
}

fn parse_matches_response(body: &str) -> Result<Vec<Match>, FetchError> {
    let parsed: MatchesResponse = serde_json::from_str(body)?;
    Ok(parsed.matches)
}
