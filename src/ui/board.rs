//! Display board sections: seasons, teams, roster, standing summary and schedule.

use super::RenderOptions;
use super::colors::{caption_fg, loss_fg, title_fg, win_fg};
use super::stat_table::StatTable;
use super::table::{TextTable, write_colored};
use crate::data_fetcher::models::{
    GameOutcome, RosterPlayer, Season, Team, TeamSchedule, TeamSummary,
};
use crate::data_fetcher::processors::schedule::local_start_time;
use crate::data_fetcher::processors::trim_for_display;
use std::io::{self, Write};

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Section title followed by an underline.
pub fn write_title<W: Write>(out: &mut W, title: &str, options: RenderOptions) -> io::Result<()> {
    writeln!(out)?;
    write_colored(out, title, title_fg(), options)?;
    writeln!(out, "{}", "═".repeat(title.chars().count()))
}

pub fn render_seasons<W: Write>(
    out: &mut W,
    seasons: &[Season],
    selected: Option<i32>,
    options: RenderOptions,
) -> io::Result<()> {
    write_title(out, "Seasons", options)?;
    let mut table = TextTable::new(["", "Season", "Start", "End", "Games"]).align_right(&[4]);
    for season in seasons {
        let marker = if Some(season.id) == selected { "*" } else { "" };
        table.add_row(vec![
            marker.to_string(),
            season.formatted_id.clone(),
            season.start_date.clone(),
            season.end_date.clone(),
            season.number_of_games.to_string(),
        ]);
    }
    table.render(out, options)
}

pub fn render_teams<W: Write>(
    out: &mut W,
    season: &Season,
    teams: &[Team],
    options: RenderOptions,
) -> io::Result<()> {
    write_title(out, &format!("{} Teams", season.formatted_id), options)?;
    let mut table = TextTable::new(["Abbr", "Team", "Conference", "Division"]);
    for team in teams {
        table.add_row(vec![
            team.abbr.clone(),
            team.name.clone(),
            team.conference.clone(),
            team.division.clone(),
        ]);
    }
    table.render(out, options)
}

pub fn render_roster<W: Write>(
    out: &mut W,
    season: &Season,
    team: &Team,
    roster: &[RosterPlayer],
    options: RenderOptions,
) -> io::Result<()> {
    write_title(out, &format!("{} {}", season.formatted_id, team.name), options)?;
    if roster.is_empty() {
        return writeln!(out, "No roster available.");
    }

    let mut table = TextTable::new([
        "No.",
        "Last name",
        "First name",
        "Pos",
        "Shoots/Catches",
        "Wt (lb)",
        "Ht (in)",
        "Birth date",
        "Country",
    ])
    .align_right(&[0, 5, 6]);
    for player in roster {
        table.add_row(vec![
            optional(player.sweater_number),
            player.last_name.clone(),
            player.first_name.clone(),
            player.position_code.clone(),
            player.shoots_catches.clone(),
            optional(player.weight_in_pounds),
            optional(player.height_in_inches),
            player.birth_date.clone(),
            player.birth_country.clone(),
        ]);
    }
    table.render(out, options)
}

/// Season summary of one team, or a notice when the season has no standings.
pub fn render_standing_summary<W: Write>(
    out: &mut W,
    season: &Season,
    standing: Option<&TeamSummary>,
    options: RenderOptions,
) -> io::Result<()> {
    let Some(standing) = standing else {
        writeln!(out)?;
        return writeln!(
            out,
            "Standings for season {} are not available.",
            season.formatted_id
        );
    };

    write_title(
        out,
        &format!(
            "{} {} Season Summary",
            standing.team_name, season.formatted_id
        ),
        options,
    )?;
    write_colored(
        out,
        &format!("as of {}", standing.standing_date),
        caption_fg(),
        options,
    )?;

    writeln!(out)?;
    StatTable::new()
        .add_stat("Games played", standing.games_played)
        .add_stat("Wins", standing.wins)
        .add_stat("Losses", standing.losses)
        .add_stat("Ties", standing.ties)
        .add_stat("OT Losses", standing.ot_losses)
        .render(out, options)?;

    writeln!(out)?;
    StatTable::new()
        .add_stat("Points", standing.points)
        .add_optional("Goals for", standing.goal_for)
        .add_optional("Goals against", standing.goal_against)
        .render(out, options)?;

    writeln!(out)?;
    let mut standings = StatTable::new().add_stat("League standing", standing.league_seq);
    if !standing.conference.is_empty() {
        standings = standings.add_optional(
            format!("{} Conference standing", standing.conference),
            standing.conference_seq,
        );
    }
    if !standing.division.is_empty() {
        standings = standings.add_optional(
            format!("{} Division standing", standing.division),
            standing.division_seq,
        );
    }
    standings.render(out, options)
}

pub fn render_schedule<W: Write>(
    out: &mut W,
    schedule: &TeamSchedule,
    options: RenderOptions,
) -> io::Result<()> {
    write_title(out, "Regular Schedule", options)?;
    if schedule.rows.is_empty() {
        return writeln!(out, "No regular season games scheduled.");
    }

    let mut table = TextTable::new([
        "Date",
        "Start",
        "Opponent",
        "Score",
        "Winning Goalie",
        "Winning Goal Scorer",
    ]);
    for (display, row) in trim_for_display(schedule).into_iter().zip(&schedule.rows) {
        let start = if row.played {
            String::new()
        } else {
            local_start_time(&row.start_time_utc).unwrap_or_default()
        };
        let color = match row.outcome {
            Some(GameOutcome::Win) => Some(win_fg()),
            Some(GameOutcome::Loss) => Some(loss_fg()),
            _ => None,
        };
        table.add_colored_row(
            vec![
                display.game_date,
                start,
                display.opponent,
                display.score_summary,
                display.winning_goalie,
                display.winning_goal_scorer,
            ],
            color,
        );
    }
    table.render(out, options)?;

    let (wins, losses, ties) = schedule.record();
    writeln!(out)?;
    writeln!(out, "Record: {wins}-{losses}-{ties}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::processors::shape_regular_schedule;
    use crate::testing_utils::TestDataBuilder;

    fn season() -> Season {
        Season {
            id: 20242025,
            formatted_id: "2024-25".to_string(),
            start_date: "2024-10-04".to_string(),
            end_date: "2025-04-17".to_string(),
            number_of_games: 82,
        }
    }

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_missing_standings_notice() {
        let text = render(|out| render_standing_summary(out, &season(), None, RenderOptions::plain()));
        assert!(text.contains("Standings for season 2024-25 are not available."));
    }

    #[test]
    fn test_standing_summary_sections() {
        let record = TestDataBuilder::standing_record("SJS", "Sharks", "San Jose Sharks");
        let standing = TeamSummary::from_standing(&record).unwrap();

        let text = render(|out| {
            render_standing_summary(out, &season(), Some(&standing), RenderOptions::plain())
        });
        assert!(text.contains("Sharks 2024-25 Season Summary"));
        assert!(text.contains("as of 2025-04-17"));
        assert!(text.contains("Western Conference standing  16"));
        assert!(text.contains("Pacific Division standing"));
        assert!(text.contains("Goals against"));
    }

    #[test]
    fn test_standing_without_conference_hides_row() {
        let mut record = TestDataBuilder::standing_record("SJS", "Sharks", "San Jose Sharks");
        record["conferenceName"] = serde_json::Value::Null;
        let standing = TeamSummary::from_standing(&record).unwrap();

        let text = render(|out| {
            render_standing_summary(out, &season(), Some(&standing), RenderOptions::plain())
        });
        assert!(!text.contains("Conference standing"));
        assert!(text.contains("Division standing"));
    }

    #[test]
    fn test_schedule_rows_and_record() {
        let doc = TestDataBuilder::schedule_doc(vec![
            TestDataBuilder::played_game(1, "SJS", 4, "ANA", 2, "REG"),
            TestDataBuilder::future_game(2, "LAK", "SJS"),
        ]);
        let schedule = shape_regular_schedule(&doc, "SJS", 20242025);

        let text = render(|out| render_schedule(out, &schedule, RenderOptions::plain()));
        assert!(text.contains("vs Ducks"));
        assert!(text.contains("4-2 W"));
        assert!(text.contains("@ Kings"));
        assert!(text.contains("Record: 1-0-0"));
    }

    #[test]
    fn test_empty_roster_notice() {
        let team = crate::data_fetcher::models::Team::from_standing(
            &TestDataBuilder::standing_record("SJS", "Sharks", "San Jose Sharks"),
        )
        .unwrap();
        let text = render(|out| render_roster(out, &season(), &team, &[], RenderOptions::plain()));
        assert!(text.contains("2024-25 San Jose Sharks"));
        assert!(text.contains("No roster available."));
    }

    #[test]
    fn test_selected_season_is_marked() {
        let text = render(|out| {
            render_seasons(out, &[season()], Some(20242025), RenderOptions::plain())
        });
        assert!(text.lines().any(|l| l.starts_with('*') && l.contains("2024-25")));
    }
}
