use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

mod config;
mod live_scores;
mod models;
mod monitor;
mod notifier;
#[cfg(test)]
mod test_support;
mod tracker;

use config::Config;
use live_scores::FootballData;
use monitor::Monitor;
use notifier::{LogNotifier, Notifier, TwitterNotifier};

#[tokio::main]
async fn main() -> Result<()> {
    // Credentials may live in a local .env file
    dotenv::dotenv().ok();

    // Initialise tracing / logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    let valid = config.validate()?;
    let match_id = valid.match_id;

    let provider = Arc::new(FootballData::new(
        valid.football_api_key,
        Some(&config.football_api_url),
    )?);

    let notifier: Arc<dyn Notifier> = match valid.twitter {
        Some(credentials) => {
            info!("🔴 LIVE mode – goals WILL be tweeted");
            Arc::new(TwitterNotifier::new(
                credentials,
                Some(&config.twitter_api_url),
            )?)
        }
        None => {
            info!("🟡 DRY RUN mode – goals will be logged, not tweeted");
            Arc::new(LogNotifier)
        }
    };

    let mut monitor = Monitor::new(
        match_id,
        provider,
        notifier,
        Duration::from_secs(config.poll_interval_secs),
    );

    monitor
        .run(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for Ctrl-C, running until killed: {}", e);
                std::future::pending::<()>().await;
            }
        })
        .await;

    let last = monitor.state();
    info!(
        "Last announced score for match {}: {}-{}",
        match_id, last.last_home_score, last.last_away_score
    );
    Ok(())
}
