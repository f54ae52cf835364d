use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry of the stats API season rules document (`/en/season`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonRule {
    pub id: i32,
    #[serde(rename = "formattedSeasonId")]
    pub formatted_season_id: String,
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "endDate")]
    pub end_date: String,
    #[serde(rename = "numberOfGames")]
    pub number_of_games: i32,
}

/// Season rules response; the rules live under `data`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonRulesResponse {
    #[serde(default)]
    pub data: Vec<SeasonRule>,
}

/// An NHL season such as `20242025` / `"2024-25"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Season {
    pub id: i32,
    pub formatted_id: String,
    /// `YYYY-MM-DD`
    pub start_date: String,
    /// `YYYY-MM-DD`
    pub end_date: String,
    pub number_of_games: i32,
}

impl From<SeasonRule> for Season {
    fn from(rule: SeasonRule) -> Self {
        Season {
            id: rule.id,
            formatted_id: rule.formatted_season_id,
            start_date: date_part(&rule.start_date),
            end_date: date_part(&rule.end_date),
            number_of_games: rule.number_of_games,
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - {} games",
            self.formatted_id, self.start_date, self.number_of_games
        )
    }
}

/// First ten characters of an ISO timestamp.
fn date_part(timestamp: &str) -> String {
    timestamp.chars().take(10).collect()
}
