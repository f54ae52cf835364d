use super::DataAccess;
use crate::data_fetcher::models::TeamSchedule;
use crate::data_fetcher::processors::shape_regular_schedule;
use crate::error::AppError;
use std::sync::Arc;
use tracing::instrument;

impl DataAccess {
    /// A team's regular season schedule with derived result columns.
    #[instrument(skip(self))]
    pub async fn get_team_schedule(
        &self,
        team_abbrev: &str,
        season_id: i32,
    ) -> Result<Arc<TeamSchedule>, AppError> {
        self.schedules
            .get_or_try_insert_with((team_abbrev.to_string(), season_id), || async {
                let doc = self
                    .client
                    .team_season_schedule(team_abbrev, season_id)
                    .await?;
                Ok::<_, AppError>(shape_regular_schedule(&doc, team_abbrev, season_id))
            })
            .await
    }

    pub async fn clear_schedules(&self) {
        self.schedules.clear().await;
    }
}
