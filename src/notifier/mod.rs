pub mod oauth;
pub mod twitter;

pub use twitter::{TwitterCredentials, TwitterNotifier};

use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("post rejected {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to sign request: {0}")]
    Signing(String),
}

/// Destination for goal announcements.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Publish `message`. One attempt; the caller decides what a failure means.
    async fn notify(&self, message: &str) -> Result<(), NotifyError>;

    /// Human-readable name for logging.
    fn name(&self) -> &str;
}

/// Dry-run notifier: logs instead of posting.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, message: &str) -> Result<(), NotifyError> {
        info!("[dry run] would post: {}", message);
        Ok(())
    }

    fn name(&self) -> &str {
        "log"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_log_notifier_always_succeeds() {
        assert!(LogNotifier.notify("Goal! Arsenal scores!").await.is_ok());
    }
}
