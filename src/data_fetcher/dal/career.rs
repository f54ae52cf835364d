use super::DataAccess;
use crate::data_fetcher::models::CareerStats;
use crate::error::AppError;
use std::sync::Arc;
use tracing::instrument;

impl DataAccess {
    /// Biography, badges and career totals of a player.
    #[instrument(skip(self))]
    pub async fn get_career_stats(&self, player_id: i64) -> Result<Arc<CareerStats>, AppError> {
        self.career_stats
            .get_or_try_insert_with(player_id, || async {
                let doc = self.client.player_career_stats(player_id).await?;
                Ok::<_, AppError>(CareerStats::from_landing(&doc)?)
            })
            .await
    }

    pub async fn clear_career_stats(&self) {
        self.career_stats.clear().await;
    }
}
