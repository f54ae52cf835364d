use reqwest::Client;
use serde_json::Value;
use tracing::instrument;

use super::fetch_utils::fetch;
use super::http_client::create_http_client_with_timeout;
use super::urls::{
    build_club_schedule_url, build_player_landing_url, build_roster_url,
    build_season_rules_url, build_standings_manifest_url, build_standings_url,
};
use crate::config::Config;
use crate::data_fetcher::models::SeasonRulesResponse;
use crate::error::AppError;

/// Thin client over the NHL web and stats APIs.
///
/// Every method performs exactly one GET and returns the decoded document.
#[derive(Debug, Clone)]
pub struct NhlClient {
    http: Client,
    api_domain: String,
    stats_api_domain: String,
}

impl NhlClient {
    /// Creates a client for the domains and timeout of `config`.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let http = create_http_client_with_timeout(config.http_timeout_seconds)?;
        Ok(Self::with_http_client(
            http,
            &config.api_domain,
            &config.stats_api_domain,
        ))
    }

    /// Creates a client around an existing `reqwest` client.
    pub fn with_http_client(http: Client, api_domain: &str, stats_api_domain: &str) -> Self {
        NhlClient {
            http,
            api_domain: api_domain.trim_end_matches('/').to_string(),
            stats_api_domain: stats_api_domain.trim_end_matches('/').to_string(),
        }
    }

    pub fn api_domain(&self) -> &str {
        &self.api_domain
    }

    pub fn stats_api_domain(&self) -> &str {
        &self.stats_api_domain
    }

    /// Roster document of a team in a season.
    #[instrument(skip(self))]
    pub async fn team_roster(&self, team_abbrev: &str, season: i32) -> Result<Value, AppError> {
        fetch(&self.http, &build_roster_url(&self.api_domain, team_abbrev, season)).await
    }

    /// Full season schedule of a team, all game types included.
    #[instrument(skip(self))]
    pub async fn team_season_schedule(
        &self,
        team_abbrev: &str,
        season: i32,
    ) -> Result<Value, AppError> {
        fetch(
            &self.http,
            &build_club_schedule_url(&self.api_domain, team_abbrev, season),
        )
        .await
    }

    /// League standings as of `date` (`YYYY-MM-DD`), or the current standings.
    #[instrument(skip(self))]
    pub async fn league_standings(&self, date: Option<&str>) -> Result<Value, AppError> {
        fetch(&self.http, &build_standings_url(&self.api_domain, date)).await
    }

    /// Manifest of every season's standings date range.
    #[instrument(skip(self))]
    pub async fn standings_manifest(&self) -> Result<Value, AppError> {
        fetch(&self.http, &build_standings_manifest_url(&self.api_domain)).await
    }

    /// Season rules from the stats API.
    #[instrument(skip(self))]
    pub async fn season_rules(&self) -> Result<SeasonRulesResponse, AppError> {
        fetch(&self.http, &build_season_rules_url(&self.stats_api_domain)).await
    }

    /// Player landing document with biography, badges and career totals.
    #[instrument(skip(self))]
    pub async fn player_career_stats(&self, player_id: i64) -> Result<Value, AppError> {
        fetch(
            &self.http,
            &build_player_landing_url(&self.api_domain, player_id),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::create_test_http_client;
    use crate::testing_utils::TestDataBuilder;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(mock_server: &MockServer) -> NhlClient {
        let stats = format!("{}/stats/rest", mock_server.uri());
        NhlClient::with_http_client(create_test_http_client(), &mock_server.uri(), &stats)
    }

    #[tokio::test]
    async fn test_team_roster_hits_roster_endpoint() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/roster/SJS/20242025"))
            .respond_with(ResponseTemplate::new(200).set_body_json(TestDataBuilder::roster_doc()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let doc = client_for(&mock_server)
            .team_roster("SJS", 20242025)
            .await
            .unwrap();
        assert_eq!(doc["goalies"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_standings_now_and_dated() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/standings/now"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"standings": []})))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v1/standings/2024-04-18"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(TestDataBuilder::standings_doc(vec![
                    TestDataBuilder::standing_record("SJS", "Sharks", "San Jose Sharks"),
                ])),
            )
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let now = client.league_standings(None).await.unwrap();
        assert!(now["standings"].as_array().unwrap().is_empty());
        let dated = client.league_standings(Some("2024-04-18")).await.unwrap();
        assert_eq!(dated["standings"][0]["teamAbbrev"]["default"], "SJS");
    }

    #[tokio::test]
    async fn test_season_rules_from_stats_domain() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/stats/rest/en/season"))
            .respond_with(ResponseTemplate::new(200).set_body_json(
                TestDataBuilder::season_rules_doc(vec![TestDataBuilder::season_rule(
                    20242025,
                    "2024-25",
                    "2024-10-04",
                    82,
                )]),
            ))
            .mount(&mock_server)
            .await;

        let rules = client_for(&mock_server).season_rules().await.unwrap();
        assert_eq!(rules.data.len(), 1);
        assert_eq!(rules.data[0].formatted_season_id, "2024-25");
    }

    #[tokio::test]
    async fn test_not_found_is_propagated() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/player/1/landing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server)
            .player_career_stats(1)
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_trailing_slashes_are_trimmed() {
        let client = NhlClient::with_http_client(
            create_test_http_client(),
            "https://api-web.nhle.com/",
            "https://api.nhle.com/stats/rest/",
        );
        assert_eq!(client.api_domain(), "https://api-web.nhle.com");
        assert_eq!(client.stats_api_domain(), "https://api.nhle.com/stats/rest");
    }
}
