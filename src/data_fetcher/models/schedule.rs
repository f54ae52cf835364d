use serde::Serialize;
use std::fmt;

/// Result of a played game from the queried team's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GameOutcome {
    Win,
    Loss,
    Tie,
}

impl GameOutcome {
    /// Classifies a goal differential by its sign.
    pub fn from_goal_diff(goal_diff: i64) -> Self {
        match goal_diff.signum() {
            1 => GameOutcome::Win,
            -1 => GameOutcome::Loss,
            _ => GameOutcome::Tie,
        }
    }

    /// `W`, `L` or `T`
    pub fn as_str(&self) -> &'static str {
        match self {
            GameOutcome::Win => "W",
            GameOutcome::Loss => "L",
            GameOutcome::Tie => "T",
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One regular season game of a team schedule with derived display fields.
///
/// Derived fields are `None` or blank for games that have not been played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleRow {
    pub game_id: i64,
    pub season: Option<i64>,
    pub game_type: i64,
    pub game_date: String,
    pub start_time_utc: String,
    pub game_state: String,
    pub home_abbrev: String,
    pub away_abbrev: String,
    /// Home team common name
    pub home_team: String,
    /// Away team common name
    pub away_team: String,
    pub is_home_game: bool,
    pub played: bool,
    pub home_score: Option<i64>,
    pub away_score: Option<i64>,
    pub goal_diff: Option<i64>,
    pub outcome: Option<GameOutcome>,
    /// `gameOutcome.lastPeriodType` (`REG`, `OT`, `SO`), blank when unplayed
    pub last_period_type: String,
    pub opponent: String,
    pub score_summary: String,
    pub winning_goalie: String,
    pub winning_goal_scorer: String,
}

impl ScheduleRow {
    /// `W`/`L`/`T`, blank when there is no outcome.
    pub fn win_loss_tie(&self) -> &'static str {
        self.outcome.map(|o| o.as_str()).unwrap_or("")
    }

    /// The queried team's goals, when played.
    pub fn team_score(&self) -> Option<i64> {
        if self.is_home_game {
            self.home_score
        } else {
            self.away_score
        }
    }

    /// The opponent's goals, when played.
    pub fn opponent_score(&self) -> Option<i64> {
        if self.is_home_game {
            self.away_score
        } else {
            self.home_score
        }
    }
}

/// The regular season schedule of one team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamSchedule {
    pub team_abbrev: String,
    pub season: i32,
    pub rows: Vec<ScheduleRow>,
}

impl TeamSchedule {
    /// Looks up a game by its ID.
    pub fn game(&self, game_id: i64) -> Option<&ScheduleRow> {
        self.rows.iter().find(|row| row.game_id == game_id)
    }

    pub fn played_games(&self) -> impl Iterator<Item = &ScheduleRow> {
        self.rows.iter().filter(|row| row.played)
    }

    /// Wins, losses and ties over played games.
    pub fn record(&self) -> (usize, usize, usize) {
        self.played_games()
            .fold((0, 0, 0), |(w, l, t), row| match row.outcome {
                Some(GameOutcome::Win) => (w + 1, l, t),
                Some(GameOutcome::Loss) => (w, l + 1, t),
                Some(GameOutcome::Tie) => (w, l, t + 1),
                None => (w, l, t),
            })
    }
}

/// The columns of a schedule row that are shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleDisplayRow {
    pub game_date: String,
    pub opponent: String,
    pub score_summary: String,
    pub winning_goalie: String,
    pub winning_goal_scorer: String,
}

impl From<&ScheduleRow> for ScheduleDisplayRow {
    fn from(row: &ScheduleRow) -> Self {
        ScheduleDisplayRow {
            game_date: row.game_date.clone(),
            opponent: row.opponent.clone(),
            score_summary: row.score_summary.clone(),
            winning_goalie: row.winning_goalie.clone(),
            winning_goal_scorer: row.winning_goal_scorer.clone(),
        }
    }
}
