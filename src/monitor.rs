use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info, warn};

use crate::live_scores::{FetchError, MatchProvider};
use crate::notifier::Notifier;
use crate::tracker::{detect_goals, GoalEvent, TrackedScore};

/// What a single poll observed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// The monitored fixture is not in the live list
    MatchNotLive,
    /// The fixture was found; `goals` lists every goal announced this tick
    Checked { goals: Vec<GoalEvent> },
}

/// Polls one fixture and announces each new goal exactly once.
pub struct Monitor {
    match_id: u64,
    provider: Arc<dyn MatchProvider>,
    notifier: Arc<dyn Notifier>,
    poll_interval: Duration,
    state: TrackedScore,
    was_live: bool,
}

impl Monitor {
    pub fn new(
        match_id: u64,
        provider: Arc<dyn MatchProvider>,
        notifier: Arc<dyn Notifier>,
        poll_interval: Duration,
    ) -> Self {
        Monitor {
            match_id,
            provider,
            notifier,
            poll_interval,
            state: TrackedScore::new(),
            was_live: false,
        }
    }

    pub fn state(&self) -> TrackedScore {
        self.state
    }

    /// Run until `shutdown` resolves. Ticks never overlap: the next interval
    /// tick is awaited only after the previous poll and its notifications
    /// have completed.
    pub async fn run<F>(&mut self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        info!(
            "Monitoring match {} via {} -> {} (interval={:?})",
            self.match_id,
            self.provider.name(),
            self.notifier.name(),
            self.poll_interval
        );

        tokio::select! {
            _ = self.log_initial_matches() => {}
            _ = &mut shutdown => {
                info!("Shutdown requested, monitor stopped");
                return;
            }
        }

        let mut interval = tokio::time::interval(self.poll_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // First tick completes immediately; polling starts one period later.
        interval.tick().await;

        loop {
            tokio::select! {
                _ = interval.tick() => {}
                _ = &mut shutdown => break,
            }

            if let Err(e) = self.tick().await {
                warn!("Poll of match {} failed, skipping tick: {}", self.match_id, e);
            }
        }

        info!("Shutdown requested, monitor stopped");
    }

    async fn log_initial_matches(&self) {
        match self.provider.fetch_live_matches().await {
            Ok(matches) => {
                info!("{} live match(es) at startup", matches.len());
                debug!("Live matches: {:?}", matches);
            }
            Err(e) => warn!("Initial fetch from {} failed: {}", self.provider.name(), e),
        }
    }

    /// One poll-compare-notify pass. A fetch error aborts the tick and
    /// leaves state untouched; a notification error is logged and the goal
    /// is still recorded.
    pub async fn tick(&mut self) -> Result<TickOutcome, FetchError> {
        let matches = self.provider.fetch_live_matches().await?;
        debug!("Live matches: {:?}", matches);

        let Some(current) = matches.into_iter().find(|m| m.id == self.match_id) else {
            if self.was_live {
                info!(
                    "Match {} left the live list at {}-{}",
                    self.match_id, self.state.last_home_score, self.state.last_away_score
                );
                self.was_live = false;
            } else {
                debug!("Match {} not live", self.match_id);
            }
            return Ok(TickOutcome::MatchNotLive);
        };

        if !self.was_live {
            info!(
                "Match {} is live: {} vs {} ({}-{})",
                current.id,
                current.home_team.name,
                current.away_team.name,
                current.home_score(),
                current.away_score()
            );
            self.was_live = true;
        }

        let goals = detect_goals(&current, &self.state);
        for goal in &goals {
            info!(
                "Goal detected: {} ({}) now on {}",
                goal.team_name, goal.side, goal.new_score
            );
            if let Err(e) = self.notifier.notify(&goal.message()).await {
                error!("Failed to announce goal via {}: {}", self.notifier.name(), e);
            }
            self.state.apply(goal);
        }

        Ok(TickOutcome::Checked { goals })
    }
}
