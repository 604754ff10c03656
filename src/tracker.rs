use std::fmt;

use crate::models::Match;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Home => write!(f, "home"),
            Side::Away => write!(f, "away"),
        }
    }
}

/// A strictly-positive score increase for one side between two polls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalEvent {
    pub side: Side,
    pub team_name: String,
    /// Score after the increase; a multi-goal jump is reported once
    pub new_score: u32,
}

impl GoalEvent {
    /// Text of the post announcing this goal.
    pub fn message(&self) -> String {
        format!("Goal! {} scores!", self.team_name)
    }
}

/// Last announced score of the monitored match.
///
/// Starts at 0-0 regardless of the actual score when monitoring begins, so a
/// restart mid-match re-announces goals already scored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrackedScore {
    pub last_home_score: u32,
    pub last_away_score: u32,
}

impl TrackedScore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `event` has been announced. Never lowers a score.
    pub fn apply(&mut self, event: &GoalEvent) {
        let slot = match event.side {
            Side::Home => &mut self.last_home_score,
            Side::Away => &mut self.last_away_score,
        };
        *slot = (*slot).max(event.new_score);
    }
}

/// Compare a fresh snapshot against the tracked score.
///
/// Returns zero, one or two events (home first). Does not touch `state`;
/// the caller applies each event once it has been announced.
pub fn detect_goals(m: &Match, state: &TrackedScore) -> Vec<GoalEvent> {
    let mut events = Vec::with_capacity(2);

    if m.home_score() > state.last_home_score {
        events.push(GoalEvent {
            side: Side::Home,
            team_name: m.home_team.name.clone(),
            new_score: m.home_score(),
        });
    }
    if m.away_score() > state.last_away_score {
        events.push(GoalEvent {
            side: Side::Away,
            team_name: m.away_team.name.clone(),
            new_score: m.away_score(),
        });
    }

    events
}
