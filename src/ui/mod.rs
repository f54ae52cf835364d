pub mod board;
pub mod colors;
pub mod profile;
pub mod selection;
pub mod stat_table;
pub mod table;

pub use board::{
    render_roster, render_schedule, render_seasons, render_standing_summary, render_teams,
};
pub use profile::render_profile;
pub use selection::SelectionContext;
pub use stat_table::StatTable;
pub use table::TextTable;

/// Output settings shared by every renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit ANSI colors
    pub color: bool,
}

impl RenderOptions {
    /// No escape codes, for pipes and tests.
    pub fn plain() -> Self {
        RenderOptions { color: false }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions { color: true }
    }
}
