use crate::data_fetcher::json_pointer::{
    PointerError, i64_at, required_i64, required_str, string_or_blank,
};
use serde_json::Value;

/// A team's league position as of one standings date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamSummary {
    pub team_abbrev: String,
    pub team_name: String,
    pub standing_date: String,
    pub conference: String,
    pub division: String,
    pub conference_seq: Option<i64>,
    pub division_seq: Option<i64>,
    pub league_seq: i64,
    pub games_played: i64,
    pub wins: i64,
    pub losses: i64,
    pub ties: i64,
    pub ot_losses: i64,
    pub points: i64,
    pub goal_for: Option<i64>,
    pub goal_against: Option<i64>,
}

impl TeamSummary {
    /// Builds a summary from one `standings` record.
    ///
    /// Identity and record fields are mandatory and fail with the pointer
    /// that was missing; league structure and goal totals are optional.
    pub fn from_standing(record: &Value) -> Result<Self, PointerError> {
        Ok(TeamSummary {
            team_abbrev: required_str(record, "/teamAbbrev/default")?.to_string(),
            team_name: required_str(record, "/teamCommonName/default")?.to_string(),
            standing_date: required_str(record, "/date")?.to_string(),
            conference: string_or_blank(record, "/conferenceName"),
            division: string_or_blank(record, "/divisionName"),
            conference_seq: i64_at(record, "/conferenceSequence"),
            division_seq: i64_at(record, "/divisionSequence"),
            league_seq: required_i64(record, "/leagueSequence")?,
            games_played: required_i64(record, "/gamesPlayed")?,
            wins: required_i64(record, "/wins")?,
            losses: required_i64(record, "/losses")?,
            ties: required_i64(record, "/ties")?,
            ot_losses: required_i64(record, "/otLosses")?,
            points: required_i64(record, "/points")?,
            goal_for: i64_at(record, "/goalFor"),
            goal_against: i64_at(record, "/goalAgainst"),
        })
    }

    /// Goal differential, when both totals are known.
    pub fn goal_differential(&self) -> Option<i64> {
        Some(self.goal_for? - self.goal_against?)
    }
}
