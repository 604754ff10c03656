use serde::Deserialize;

/// A fixture as reported by the football-data.org `/matches` endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    /// football-data.org fixture ID
    pub id: u64,
    pub home_team: Team,
    pub away_team: Team,
    pub score: Score,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Team {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    #[serde(default)]
    pub full_time: FullTimeScore,
}

/// Running full-time score; both sides are `null` before kick-off
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullTimeScore {
    #[serde(default)]
    pub home_team: Option<u32>,
    #[serde(default)]
    pub away_team: Option<u32>,
}

impl Match {
    pub fn home_score(&self) -> u32 {
        self.score.full_time.home_team.unwrap_or(0)
    }

    pub fn away_score(&self) -> u32 {
        self.score.full_time.away_team.unwrap_or(0)
    }
}

#[cfg(test)]
pub(crate) fn fixture(id: u64, home: u32, away: u32) -> Match {
    Match {
        id,
        home_team: Team {
            name: "Arsenal".into(),
        },
        away_team: Team {
            name: "Chelsea".into(),
        },
        score: Score {
            full_time: FullTimeScore {
                home_team: Some(home),
                away_team: Some(away),
            },
        },
    }
}
