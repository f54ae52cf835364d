pub mod api;
pub mod cache;
pub mod dal;
pub mod json_pointer;
pub mod models;
pub mod player_names;
pub mod processors;

pub use api::NhlClient;
pub use dal::{CacheStats, DataAccess};
pub use models::{CareerStats, RosterPlayer, Season, Team, TeamSchedule, TeamSummary};
