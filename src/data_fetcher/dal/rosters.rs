use super::DataAccess;
use crate::data_fetcher::models::RosterPlayer;
use crate::data_fetcher::processors::shape_roster;
use crate::error::AppError;
use std::sync::Arc;
use tracing::instrument;

impl DataAccess {
    /// A team's roster for a season, sorted by last name.
    #[instrument(skip(self))]
    pub async fn get_roster(
        &self,
        season_id: i32,
        team_abbrev: &str,
    ) -> Result<Arc<Vec<RosterPlayer>>, AppError> {
        self.rosters
            .get_or_try_insert_with((season_id, team_abbrev.to_string()), || async {
                let doc = self.client.team_roster(team_abbrev, season_id).await?;
                shape_roster(&doc)
            })
            .await
    }

    pub async fn clear_rosters(&self) {
        self.rosters.clear().await;
    }
}
