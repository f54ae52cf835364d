pub mod career;
pub mod localized;
pub mod roster;
pub mod schedule;
pub mod season;
pub mod team;
pub mod team_summary;

pub use career::{Badge, CareerStats, SeasonTotal};
pub use localized::LocalizedString;
pub use roster::{RosterEntry, RosterPlayer, RosterResponse};
pub use schedule::{GameOutcome, ScheduleDisplayRow, ScheduleRow, TeamSchedule};
pub use season::{Season, SeasonRule, SeasonRulesResponse};
pub use team::Team;
pub use team_summary::TeamSummary;
