//! Season and team selection remembered across renders.

use crate::data_fetcher::models::{Season, Team};
use tracing::debug;

/// The season and team the user last selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionContext {
    last_season_id: Option<i32>,
    selected_team_abbr: Option<String>,
}

impl SelectionContext {
    pub fn new() -> Self {
        SelectionContext::default()
    }

    pub fn last_season_id(&self) -> Option<i32> {
        self.last_season_id
    }

    pub fn selected_team_abbr(&self) -> Option<&str> {
        self.selected_team_abbr.as_deref()
    }

    /// Picks the requested season if known, else the remembered season if
    /// known, else the first (current) season. `None` only for an empty list.
    pub fn select_season<'a>(
        &self,
        seasons: &'a [Season],
        requested: Option<i32>,
    ) -> Option<&'a Season> {
        let find = |id: Option<i32>| id.and_then(|id| seasons.iter().find(|s| s.id == id));
        find(requested)
            .or_else(|| find(self.last_season_id))
            .or_else(|| seasons.first())
    }

    /// Picks the team for `season` out of that season's `teams`.
    ///
    /// When the season differs from the last one, a remembered team is kept
    /// only if it plays in the new season. A known requested abbreviation
    /// replaces the remembered team; an unknown one clears the selection.
    pub fn select_team<'a>(
        &mut self,
        season: &Season,
        teams: &'a [Team],
        requested: Option<&str>,
    ) -> Option<&'a Team> {
        let find = |abbr: &str| teams.iter().find(|t| t.abbr == abbr);

        if self.last_season_id != Some(season.id) {
            if let Some(abbr) = self.selected_team_abbr.as_deref()
                && find(abbr).is_none()
            {
                debug!("{abbr} did not play in {}, clearing team", season.formatted_id);
                self.selected_team_abbr = None;
            }
            self.last_season_id = Some(season.id);
        }

        if let Some(abbr) = requested {
            self.selected_team_abbr = find(abbr).map(|team| team.abbr.clone());
        }

        self.selected_team_abbr.as_deref().and_then(find)
    }
}
