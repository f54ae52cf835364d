use super::DataAccess;
use crate::data_fetcher::models::Team;
use crate::data_fetcher::processors::teams_from_standings;
use crate::error::AppError;
use std::sync::Arc;
use tracing::instrument;

impl DataAccess {
    /// Teams in the standings of `date` (`YYYY-MM-DD`), or the current teams,
    /// sorted by name.
    #[instrument(skip(self))]
    pub async fn get_teams(&self, date: Option<&str>) -> Result<Arc<Vec<Team>>, AppError> {
        self.teams
            .get_or_try_insert_with(date.map(str::to_string), || async {
                let doc = self.client.league_standings(date).await?;
                teams_from_standings(&doc)
            })
            .await
    }

    pub async fn clear_teams(&self) {
        self.teams.clear().await;
    }
}
