//! URL building utilities for the NHL web and stats API endpoints

/// Builds a team roster URL.
///
/// # Example
/// ```
/// use nhl_display_board::data_fetcher::api::build_roster_url;
///
/// let url = build_roster_url("https://api-web.nhle.com", "SJS", 20242025);
/// assert_eq!(url, "https://api-web.nhle.com/v1/roster/SJS/20242025");
/// ```
pub fn build_roster_url(api_domain: &str, team_abbrev: &str, season: i32) -> String {
    format!("{api_domain}/v1/roster/{team_abbrev}/{season}")
}

/// Builds a club season schedule URL.
///
/// # Example
/// ```
/// use nhl_display_board::data_fetcher::api::build_club_schedule_url;
///
/// let url = build_club_schedule_url("https://api-web.nhle.com", "SJS", 20242025);
/// assert_eq!(url, "https://api-web.nhle.com/v1/club-schedule-season/SJS/20242025");
/// ```
pub fn build_club_schedule_url(api_domain: &str, team_abbrev: &str, season: i32) -> String {
    format!("{api_domain}/v1/club-schedule-season/{team_abbrev}/{season}")
}

/// Builds a league standings URL for a `YYYY-MM-DD` date, or the current
/// standings when no date is given.
///
/// # Example
/// ```
/// use nhl_display_board::data_fetcher::api::build_standings_url;
///
/// assert_eq!(
///     build_standings_url("https://api-web.nhle.com", Some("2024-04-18")),
///     "https://api-web.nhle.com/v1/standings/2024-04-18"
/// );
/// assert_eq!(
///     build_standings_url("https://api-web.nhle.com", None),
///     "https://api-web.nhle.com/v1/standings/now"
/// );
/// ```
pub fn build_standings_url(api_domain: &str, date: Option<&str>) -> String {
    format!("{api_domain}/v1/standings/{}", date.unwrap_or("now"))
}

/// Builds the URL of the standings manifest listing every season's standings dates.
pub fn build_standings_manifest_url(api_domain: &str) -> String {
    format!("{api_domain}/v1/standings-season")
}

/// Builds a player landing URL (biography, badges and career totals).
///
/// # Example
/// ```
/// use nhl_display_board::data_fetcher::api::build_player_landing_url;
///
/// let url = build_player_landing_url("https://api-web.nhle.com", 8478402);
/// assert_eq!(url, "https://api-web.nhle.com/v1/player/8478402/landing");
/// ```
pub fn build_player_landing_url(api_domain: &str, player_id: i64) -> String {
    format!("{api_domain}/v1/player/{player_id}/landing")
}

/// Builds the stats API season rules URL.
pub fn build_season_rules_url(stats_api_domain: &str) -> String {
    format!("{stats_api_domain}/en/season")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_standings_manifest_url() {
        assert_eq!(
            build_standings_manifest_url("http://localhost:1234"),
            "http://localhost:1234/v1/standings-season"
        );
    }

    #[test]
    fn test_build_season_rules_url() {
        assert_eq!(
            build_season_rules_url("https://api.nhle.com/stats/rest"),
            "https://api.nhle.com/stats/rest/en/season"
        );
    }
}
