//! Regular season schedule shaping.
//!
//! Turns a `/v1/club-schedule-season/{team}/{season}` document into one
//! [`ScheduleRow`] per regular season game, with scores, goal differential,
//! outcome and summary strings computed from the queried team's side.

use crate::constants::game;
use crate::data_fetcher::json_pointer::{i64_at, lookup, str_at, string_or_blank};
use crate::data_fetcher::models::{GameOutcome, ScheduleDisplayRow, ScheduleRow, TeamSchedule};
use crate::data_fetcher::player_names::display_name;
use chrono::{DateTime, Local};
use serde_json::Value;
use tracing::{debug, warn};

/// Shapes the regular season games of `team_abbrev` out of a schedule document.
///
/// Games are kept in API order. Records without a game id are skipped.
pub fn shape_regular_schedule(doc: &Value, team_abbrev: &str, season: i32) -> TeamSchedule {
    let games = lookup(doc, "/games")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    let rows: Vec<ScheduleRow> = games
        .iter()
        .filter(|g| is_regular_season(g))
        .filter_map(|g| {
            let row = shape_game(g, team_abbrev);
            if row.is_none() {
                warn!("Skipping schedule record without a game id for {team_abbrev}");
            }
            row
        })
        .collect();

    debug!(
        "Shaped {} regular season games of {} total for {} in {}",
        rows.len(),
        games.len(),
        team_abbrev,
        season
    );

    TeamSchedule {
        team_abbrev: team_abbrev.to_string(),
        season,
        rows,
    }
}

/// Regular season games have `gameType == 2`.
pub fn is_regular_season(game_record: &Value) -> bool {
    i64_at(game_record, "/gameType") == Some(game::REGULAR_SEASON)
}

/// Shapes a single game record. Returns `None` when the record has no id.
pub fn shape_game(game_record: &Value, team_abbrev: &str) -> Option<ScheduleRow> {
    let game_id = i64_at(game_record, "/id")?;

    let game_state = string_or_blank(game_record, "/gameState");
    let played = game_state != game::FUTURE_STATE;

    let home_abbrev = string_or_blank(game_record, "/homeTeam/abbrev");
    let away_abbrev = string_or_blank(game_record, "/awayTeam/abbrev");
    let home_team = string_or_blank(game_record, "/homeTeam/commonName/default");
    let away_team = string_or_blank(game_record, "/awayTeam/commonName/default");
    let is_home_game = home_abbrev == team_abbrev;

    let (home_score, away_score) = if played {
        (
            i64_at(game_record, "/homeTeam/score"),
            i64_at(game_record, "/awayTeam/score"),
        )
    } else {
        (None, None)
    };

    let goal_diff = goal_differential(home_score, away_score, is_home_game);
    let outcome = goal_diff.map(GameOutcome::from_goal_diff);

    let last_period_type = if played {
        string_or_blank(game_record, "/gameOutcome/lastPeriodType")
    } else {
        String::new()
    };

    let opponent = if is_home_game {
        format!("vs {away_team}")
    } else {
        format!("@ {home_team}")
    };

    let score_summary = if played {
        let (team_score, opp_score) = if is_home_game {
            (home_score, away_score)
        } else {
            (away_score, home_score)
        };
        score_summary(team_score, opp_score, outcome, &last_period_type)
    } else {
        String::new()
    };

    let winning_goalie = award_display(game_record, "/winningGoalie", played);
    let winning_goal_scorer = award_display(game_record, "/winningGoalScorer", played);

    Some(ScheduleRow {
        game_id,
        season: i64_at(game_record, "/season"),
        game_type: i64_at(game_record, "/gameType").unwrap_or_default(),
        game_date: string_or_blank(game_record, "/gameDate"),
        start_time_utc: string_or_blank(game_record, "/startTimeUTC"),
        game_state,
        home_abbrev,
        away_abbrev,
        home_team,
        away_team,
        is_home_game,
        played,
        home_score,
        away_score,
        goal_diff,
        outcome,
        last_period_type,
        opponent,
        score_summary,
        winning_goalie,
        winning_goal_scorer,
    })
}

/// Goal differential from the queried team's side; `None` if either score is unknown.
pub fn goal_differential(
    home_score: Option<i64>,
    away_score: Option<i64>,
    is_home_game: bool,
) -> Option<i64> {
    let (home, away) = (home_score?, away_score?);
    Some(if is_home_game { home - away } else { away - home })
}

/// Overtime/shootout annotation for a summary.
///
/// Blank without an outcome, for ties, for regulation games and for missing
/// period types.
pub fn outcome_suffix<'a>(outcome: Option<GameOutcome>, last_period_type: &'a str) -> &'a str {
    let period = last_period_type.trim();
    let annotate = matches!(outcome, Some(GameOutcome::Win | GameOutcome::Loss))
        && !period.is_empty()
        && period != game::REGULATION_PERIOD;
    if annotate { period } else { "" }
}

/// `"<team>-<opp> <W/L/T> <suffix>"`; the separator before a blank suffix is kept.
///
/// Blank when either score is unknown.
pub fn score_summary(
    team_score: Option<i64>,
    opp_score: Option<i64>,
    outcome: Option<GameOutcome>,
    last_period_type: &str,
) -> String {
    let (Some(team), Some(opp), Some(outcome)) = (team_score, opp_score, outcome) else {
        return String::new();
    };
    format!(
        "{team}-{opp} {outcome} {}",
        outcome_suffix(Some(outcome), last_period_type)
    )
}

fn award_display(game_record: &Value, base: &str, played: bool) -> String {
    if !played {
        return String::new();
    }
    let first = str_at(game_record, &format!("{base}/firstInitial/default")).unwrap_or("");
    let last = str_at(game_record, &format!("{base}/lastName/default")).unwrap_or("");
    display_name(first, last)
}

/// Local `HH:MM` start time of an ISO-8601 UTC timestamp such as `2024-10-11T02:30:00Z`.
pub fn local_start_time(start_time_utc: &str) -> Option<String> {
    DateTime::parse_from_rfc3339(start_time_utc)
        .ok()
        .map(|time| time.with_timezone(&Local).format("%H:%M").to_string())
}

/// Projects a schedule onto the columns shown to the user.
pub fn trim_for_display(schedule: &TeamSchedule) -> Vec<ScheduleDisplayRow> {
    schedule.rows.iter().map(ScheduleDisplayRow::from).collect()
}
