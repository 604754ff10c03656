use clap::Parser;

use crate::notifier::TwitterCredentials;

/// Watches one live football match and tweets every goal
#[derive(Parser, Debug, Clone)]
#[command(name = "goal-notifier", version, about)]
pub struct Config {
    /// Log posts instead of publishing them (Twitter credentials not required)
    #[arg(long, env = "DRY_RUN", default_value = "false")]
    pub dry_run: bool,

    /// football-data.org fixture ID to monitor
    #[arg(long, env = "MATCH_ID")]
    pub match_id: Option<u64>,

    /// football-data.org API key
    #[arg(long, env = "FOOTBALL_API_KEY", hide_env_values = true)]
    pub football_api_key: Option<String>,

    /// football-data.org API base URL
    #[arg(
        long,
        env = "FOOTBALL_API_URL",
        default_value = "https://api.football-data.org/v2"
    )]
    pub football_api_url: String,

    /// Twitter consumer (API) key
    #[arg(long, env = "CONSUMER_KEY", hide_env_values = true)]
    pub consumer_key: Option<String>,

    /// Twitter consumer (API) secret
    #[arg(long, env = "CONSUMER_SECRET", hide_env_values = true)]
    pub consumer_secret: Option<String>,

    /// Twitter access token of the posting account
    #[arg(long, env = "ACCESS_TOKEN_KEY", hide_env_values = true)]
    pub access_token_key: Option<String>,

    /// Twitter access token secret of the posting account
    #[arg(long, env = "ACCESS_TOKEN_SECRET", hide_env_values = true)]
    pub access_token_secret: Option<String>,

    /// Tweet creation endpoint
    #[arg(
        long,
        env = "TWITTER_API_URL",
        default_value = "https://api.twitter.com/2/tweets"
    )]
    pub twitter_api_url: String,

    /// Live score polling interval in seconds
    #[arg(long, env = "POLL_INTERVAL_SECS", default_value = "60")]
    pub poll_interval_secs: u64,
}

/// Settings that passed validation
#[derive(Debug)]
pub struct Validated<'a> {
    pub match_id: u64,
    pub football_api_key: &'a str,
    /// `None` in dry-run mode
    pub twitter: Option<TwitterCredentials>,
}

fn present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<Validated<'_>> {
        let Some(match_id) = self.match_id else {
            anyhow::bail!("MATCH_ID is required (the football-data.org fixture to monitor)");
        };
        let football_api_key = match self.football_api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => key,
            _ => anyhow::bail!("FOOTBALL_API_KEY is required"),
        };
        if !self.dry_run {
            for (name, value) in [
                ("CONSUMER_KEY", &self.consumer_key),
                ("CONSUMER_SECRET", &self.consumer_secret),
                ("ACCESS_TOKEN_KEY", &self.access_token_key),
                ("ACCESS_TOKEN_SECRET", &self.access_token_secret),
            ] {
                if !present(value) {
                    anyhow::bail!(
                        "{} is required to post tweets. Use --dry-run to only log goals.",
                        name
                    );
                }
            }
        }
        if self.poll_interval_secs == 0 {
            anyhow::bail!("poll_interval_secs must be positive");
        }

        let twitter = if self.dry_run {
            None
        } else {
            self.twitter_credentials()
        };
        Ok(Validated {
            match_id,
            football_api_key,
            twitter,
        })
    }

    fn twitter_credentials(&self) -> Option<TwitterCredentials> {
        Some(TwitterCredentials {
            consumer_key: self.consumer_key.clone()?,
            consumer_secret: self.consumer_secret.clone()?,
            access_token_key: self.access_token_key.clone()?,
            access_token_secret: self.access_token_secret.clone()?,
        })
    }
}
