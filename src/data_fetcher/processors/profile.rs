//! Player profile shaping: vital statistics and career totals tables.

use crate::constants::COUNTRIES_WITH_PROVINCE;
use crate::data_fetcher::models::{CareerStats, SeasonTotal};
use serde_json::Value;

/// A column of a career totals table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TotalsColumn {
    /// Key of the stat in a `seasonTotals` record
    pub key: &'static str,
    pub header: &'static str,
}

const fn column(key: &'static str, header: &'static str) -> TotalsColumn {
    TotalsColumn { key, header }
}

const SEASON: TotalsColumn = column("season", "Season");
const LEAGUE: TotalsColumn = column("leagueAbbrev", "League");
const TEAM: TotalsColumn = column("teamName", "Team");

const GOALIE_OPTIONAL: [TotalsColumn; 7] = [
    column("assists", "A"),
    column("gamesStarted", "GS"),
    column("goals", "G"),
    column("pim", "PIM"),
    column("shotsAgainst", "SA"),
    column("timeOnIce", "TOI"),
    column("otLosses", "OTL"),
];

const SKATER_OPTIONAL: [TotalsColumn; 5] = [
    column("plusMinus", "+/-"),
    column("avgToi", "TOI/GP"),
    column("shots", "S"),
    column("shootingPctg", "S%"),
    column("faceoffWinningPctg", "FO%"),
];

/// Formats a season id for display.
///
/// # Example
/// ```
/// use nhl_display_board::data_fetcher::processors::profile::format_season;
///
/// assert_eq!(format_season(20232024), "2023-24");
/// assert_eq!(format_season(19992000), "1999-2000");
/// ```
pub fn format_season(season: i64) -> String {
    let text = season.to_string();
    if text == "19992000" {
        return "1999-2000".to_string();
    }
    match (text.get(..4), text.len().checked_sub(2).and_then(|i| text.get(i..))) {
        (Some(start), Some(end)) if text.len() == 8 => format!("{start}-{end}"),
        _ => text,
    }
}

/// `"city, state, country"` for the USA and Canada, `"city, country"` elsewhere.
pub fn birth_location(city: &str, state_province: &str, country: &str) -> String {
    if COUNTRIES_WITH_PROVINCE.contains(&country) {
        [city, state_province, country].join(", ")
    } else {
        [city, country].join(", ")
    }
}

/// Label/value pairs of a player's vital statistics.
pub fn stat_summary(stats: &CareerStats) -> Vec<(String, String)> {
    let number = |value: Option<i64>| value.map(|v| v.to_string()).unwrap_or_default();
    let hand_label = if stats.is_goalie() { "Catches" } else { "Shoots" };

    vec![
        ("Number".to_string(), number(stats.sweater_number)),
        ("Position".to_string(), stats.position_code.clone()),
        (hand_label.to_string(), stats.shoots_catches.clone()),
        ("Height (in)".to_string(), number(stats.height_in_inches)),
        ("Weight (lb)".to_string(), number(stats.weight_in_pounds)),
        ("Birth date".to_string(), stats.birth_date.clone()),
        (
            "Birth location".to_string(),
            birth_location(
                &stats.birth_city,
                &stats.birth_state_province,
                &stats.birth_country,
            ),
        ),
    ]
}

/// Columns of the career totals tables for this player.
///
/// Optional columns are included when any season line reports them, so the
/// regular season and playoff tables share one column set.
pub fn totals_columns(stats: &CareerStats) -> Vec<TotalsColumn> {
    let present = |key: &str| stats.season_totals.iter().any(|t| t.stat(key).is_some());

    let mut columns = vec![SEASON, LEAGUE, TEAM, column("gamesPlayed", "GP")];
    if stats.is_goalie() {
        columns.push(column("goalsAgainstAvg", "GAA"));
        if present("savePctg") {
            columns.push(column("savePctg", "SV%"));
        }
        columns.extend([
            column("goalsAgainst", "GA"),
            column("shutouts", "SO"),
            column("wins", "W"),
        ]);
        if present("ties") {
            columns.push(column("ties", "T"));
        }
        columns.push(column("losses", "L"));
        columns.extend(GOALIE_OPTIONAL.into_iter().filter(|c| present(c.key)));
    } else {
        columns.extend([
            column("goals", "G"),
            column("assists", "A"),
            column("points", "P"),
            column("pim", "PIM"),
        ]);
        columns.extend(SKATER_OPTIONAL.into_iter().filter(|c| present(c.key)));
    }
    columns
}

/// Rows of one game type's totals table, one per season line.
pub fn totals_table(
    stats: &CareerStats,
    game_type_id: i64,
    columns: &[TotalsColumn],
) -> Vec<Vec<String>> {
    stats
        .totals_for(game_type_id)
        .map(|total| columns.iter().map(|c| totals_cell(total, c)).collect())
        .collect()
}

fn totals_cell(total: &SeasonTotal, column: &TotalsColumn) -> String {
    match column.key {
        "season" => format_season(total.season),
        "leagueAbbrev" => total.league_abbrev.clone(),
        "teamName" => total.team_name.clone(),
        key => total.stat(key).map(format_stat).unwrap_or_default(),
    }
}

fn format_stat(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) if number.is_f64() => number
            .as_f64()
            .map(|f| {
                if f.fract() == 0.0 {
                    format!("{f:.0}")
                } else {
                    format!("{f:.3}")
                }
            })
            .unwrap_or_default(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::game;
    use crate::testing_utils::TestDataBuilder;

    fn skater() -> CareerStats {
        CareerStats::from_landing(&TestDataBuilder::career_landing(8478402, "C")).unwrap()
    }

    fn goalie() -> CareerStats {
        CareerStats::from_landing(&TestDataBuilder::career_landing(8480045, "G")).unwrap()
    }

    #[test]
    fn test_format_season() {
        assert_eq!(format_season(20232024), "2023-24");
        assert_eq!(format_season(19992000), "1999-2000");
        assert_eq!(format_season(19181919), "1918-19");
        assert_eq!(format_season(123), "123");
    }

    #[test]
    fn test_birth_location() {
        assert_eq!(
            birth_location("Richmond Hill", "ON", "CAN"),
            "Richmond Hill, ON, CAN"
        );
        assert_eq!(birth_location("Omsk", "", "RUS"), "Omsk, RUS");
    }

    #[test]
    fn test_stat_summary_labels() {
        let summary = stat_summary(&skater());
        let labels: Vec<&str> = summary.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(labels[2], "Shoots");
        assert_eq!(summary[0].1, "97");
        assert_eq!(summary[6].1, "Richmond Hill, ON, CAN");

        let goalie_summary = stat_summary(&goalie());
        assert_eq!(goalie_summary[2].0, "Catches");
    }

    #[test]
    fn test_missing_sweater_number_is_blank() {
        let mut stats = skater();
        stats.sweater_number = None;
        assert_eq!(stat_summary(&stats)[0].1, "");
    }

    #[test]
    fn test_skater_columns_include_present_optionals() {
        let headers: Vec<&str> = totals_columns(&skater()).iter().map(|c| c.header).collect();
        assert_eq!(
            headers,
            vec!["Season", "League", "Team", "GP", "G", "A", "P", "PIM", "+/-", "S"]
        );
    }

    #[test]
    fn test_goalie_columns() {
        let headers: Vec<&str> = totals_columns(&goalie()).iter().map(|c| c.header).collect();
        assert_eq!(
            headers,
            vec![
                "Season", "League", "Team", "GP", "GAA", "SV%", "GA", "SO", "W", "L", "GS"
            ]
        );
    }

    #[test]
    fn test_totals_table_rows() {
        let stats = skater();
        let columns = totals_columns(&stats);

        let regular = totals_table(&stats, game::REGULAR_SEASON, &columns);
        assert_eq!(regular.len(), 2);
        assert_eq!(regular[0][0], "2015-16");
        assert_eq!(regular[0][2], "Edmonton Oilers");
        assert_eq!(regular[0][4], "16");

        let playoffs = totals_table(&stats, game::PLAYOFFS, &columns);
        assert_eq!(playoffs.len(), 1);
        assert_eq!(playoffs[0].len(), columns.len());
    }

    #[test]
    fn test_format_stat_values() {
        assert_eq!(format_stat(&serde_json::json!(2.4567)), "2.457");
        assert_eq!(format_stat(&serde_json::json!(12)), "12");
        assert_eq!(format_stat(&serde_json::json!(3.0)), "3");
        assert_eq!(format_stat(&serde_json::json!("21:47")), "21:47");
    }
}
