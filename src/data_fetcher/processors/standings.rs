use crate::data_fetcher::json_pointer::{i64_at, lookup, str_at};
use crate::data_fetcher::models::{Team, TeamSummary};
use crate::error::AppError;
use serde_json::Value;
use tracing::debug;

/// The `standings` array of a standings document; empty when absent.
pub fn standings_records(doc: &Value) -> Vec<Value> {
    lookup(doc, "/standings")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

/// Teams of a standings document, sorted by full name.
///
/// A record missing its identity fields fails the whole list.
pub fn teams_from_standings(doc: &Value) -> Result<Vec<Team>, AppError> {
    let mut teams = lookup(doc, "/standings")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
        .iter()
        .map(Team::from_standing)
        .collect::<Result<Vec<_>, _>>()?;
    teams.sort_by(|a, b| a.name.cmp(&b.name));

    debug!("Found {} teams in standings", teams.len());
    Ok(teams)
}

/// Finds the standing of one team.
///
/// Returns `Ok(None)` when the records are empty or the team is absent, and an
/// error when the matching record lacks a required field.
pub fn find_team_standing(
    records: &[Value],
    team_abbrev: &str,
) -> Result<Option<TeamSummary>, AppError> {
    records
        .iter()
        .find(|record| str_at(record, "/teamAbbrev/default") == Some(team_abbrev))
        .map(TeamSummary::from_standing)
        .transpose()
        .map_err(AppError::from)
}

/// The `standingsEnd` date of a season in the `/v1/standings-season` manifest.
pub fn standings_end_for_season(manifest: &Value, season_id: i32) -> Option<String> {
    lookup(manifest, "/seasons")
        .and_then(Value::as_array)?
        .iter()
        .find(|entry| i64_at(entry, "/id") == Some(i64::from(season_id)))
        .and_then(|entry| str_at(entry, "/standingsEnd"))
        .map(str::to_string)
}
