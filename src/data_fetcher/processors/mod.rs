pub mod profile;
pub mod roster;
pub mod schedule;
pub mod standings;

pub use profile::{
    TotalsColumn, birth_location, format_season, stat_summary, totals_columns, totals_table,
};
pub use roster::shape_roster;
pub use schedule::{score_summary, shape_regular_schedule, trim_for_display};
pub use standings::{
    find_team_standing, standings_end_for_season, standings_records, teams_from_standings,
};
