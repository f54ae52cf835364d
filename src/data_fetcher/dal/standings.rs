use super::DataAccess;
use crate::data_fetcher::models::TeamSummary;
use crate::data_fetcher::processors::{
    find_team_standing, standings_end_for_season, standings_records,
};
use crate::error::AppError;
use serde_json::Value;
use std::sync::Arc;
use tracing::{instrument, warn};

impl DataAccess {
    /// Final standings records of a season.
    ///
    /// The date comes from the `standingsEnd` of the season in the standings
    /// manifest. A season missing from the manifest has no standings.
    #[instrument(skip(self))]
    pub async fn get_standings(&self, season_id: i32) -> Result<Arc<Vec<Value>>, AppError> {
        self.standings
            .get_or_try_insert_with(season_id, || async {
                let manifest = self.client.standings_manifest().await?;
                let Some(end_date) = standings_end_for_season(&manifest, season_id) else {
                    warn!("No standings dates for season {season_id}");
                    return Ok::<_, AppError>(Vec::new());
                };
                let doc = self.client.league_standings(Some(&end_date)).await?;
                Ok(standings_records(&doc))
            })
            .await
    }

    /// The standing of one team, `None` when the season has no standings or
    /// the team is not in them.
    pub async fn get_team_standing(
        &self,
        season_id: i32,
        team_abbrev: &str,
    ) -> Result<Option<TeamSummary>, AppError> {
        let records = self.get_standings(season_id).await?;
        find_team_standing(&records, team_abbrev)
    }

    pub async fn clear_standings(&self) {
        self.standings.clear().await;
    }
}
