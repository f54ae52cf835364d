use super::DataAccess;
use crate::data_fetcher::models::Season;
use crate::error::AppError;
use std::sync::Arc;
use tracing::{info, instrument};

impl DataAccess {
    /// All seasons from the stats API, most recent first.
    #[instrument(skip(self))]
    pub async fn get_seasons(&self) -> Result<Arc<Vec<Season>>, AppError> {
        self.seasons
            .get_or_try_insert_with((), || async {
                let rules = self.client.season_rules().await?;
                let mut seasons: Vec<Season> = rules.data.into_iter().map(Season::from).collect();
                seasons.sort_by(|a, b| b.formatted_id.cmp(&a.formatted_id));
                info!("Loaded {} seasons", seasons.len());
                Ok::<_, AppError>(seasons)
            })
            .await
    }

    /// Looks up one season by id.
    pub async fn find_season(&self, season_id: i32) -> Result<Season, AppError> {
        self.get_seasons()
            .await?
            .iter()
            .find(|season| season.id == season_id)
            .cloned()
            .ok_or_else(|| AppError::season_not_found(season_id))
    }

    pub async fn clear_seasons(&self) {
        self.seasons.clear().await;
    }
}
