use anyhow::Context;
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use tracing::{debug, info};

use super::{oauth, Notifier, NotifyError};

/// OAuth 1.0a user-context credentials for the posting account
#[derive(Clone)]
pub struct TwitterCredentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub access_token_key: String,
    pub access_token_secret: String,
}

impl std::fmt::Debug for TwitterCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwitterCredentials")
            .field("consumer_key", &self.consumer_key)
            .finish_non_exhaustive()
    }
}

/// Posts plain-text tweets through the Twitter API v2.
pub struct TwitterNotifier {
    http: Client,
    credentials: TwitterCredentials,
    api_url: String,
}

impl TwitterNotifier {
    pub fn new(credentials: TwitterCredentials, api_url: Option<&str>) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(TwitterNotifier {
            http,
            credentials,
            api_url: api_url
                .unwrap_or("https://api.twitter.com/2/tweets")
                .to_string(),
        })
    }
}

#[async_trait]
impl Notifier for TwitterNotifier {
    fn name(&self) -> &str {
        "twitter"
    }

    async fn notify(&self, message: &str) -> Result<(), NotifyError> {
        let auth = oauth::authorization_header(
            &self.credentials,
            "POST",
            &self.api_url,
            &oauth::nonce(),
            Utc::now().timestamp(),
        )?;

        debug!("Posting tweet to {}", self.api_url);
        let resp = self
            .http
            .post(&self.api_url)
            .header("Authorization", auth)
            .json(&serde_json::json!({ "text": message }))
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(NotifyError::Status { status, body });
        }

        let raw: serde_json::Value = resp.json().await.unwrap_or_default();
        info!(
            "Tweet posted, id={}: {}",
            tweet_id(&raw).unwrap_or("unknown"),
            message
        );
        Ok(())
    }
}

fn tweet_id(raw: &serde_json::Value) -> Option<&str> {
    raw["data"]["id"].as_str()
}
