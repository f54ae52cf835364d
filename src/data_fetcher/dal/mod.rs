//! Data access per resource: fetch, shape and memoize.
//!
//! Each resource lives in its own module as an `impl DataAccess` block with
//! a memoized `get_*` function and a `clear_*` invalidation function.

mod career;
mod rosters;
mod schedules;
mod seasons;
mod standings;
mod teams;

use crate::config::Config;
use crate::constants::cache_capacity;
use crate::data_fetcher::api::NhlClient;
use crate::data_fetcher::cache::{CacheInfo, MemoCache};
use crate::data_fetcher::models::{CareerStats, RosterPlayer, Season, Team, TeamSchedule};
use crate::error::AppError;
use serde_json::Value;
use tracing::info;

/// Size and capacity of every resource cache
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheStats {
    pub seasons: CacheInfo,
    pub teams: CacheInfo,
    pub rosters: CacheInfo,
    pub schedules: CacheInfo,
    pub standings: CacheInfo,
    pub career_stats: CacheInfo,
}

/// Entry point to every NHL resource, holding the API client and the memo caches.
#[derive(Debug)]
pub struct DataAccess {
    client: NhlClient,
    seasons: MemoCache<(), Vec<Season>>,
    /// Keyed by standings date; `None` is the current standings
    teams: MemoCache<Option<String>, Vec<Team>>,
    rosters: MemoCache<(i32, String), Vec<RosterPlayer>>,
    schedules: MemoCache<(String, i32), TeamSchedule>,
    standings: MemoCache<i32, Vec<Value>>,
    career_stats: MemoCache<i64, CareerStats>,
}

impl DataAccess {
    /// Creates the data access layer for the configured API domains.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        Ok(Self::with_client(NhlClient::new(config)?))
    }

    pub fn with_client(client: NhlClient) -> Self {
        DataAccess {
            client,
            seasons: MemoCache::new("season cache", cache_capacity::SEASONS),
            teams: MemoCache::new("team cache", cache_capacity::DEFAULT),
            rosters: MemoCache::new("roster cache", cache_capacity::DEFAULT),
            schedules: MemoCache::new("schedule cache", cache_capacity::DEFAULT),
            standings: MemoCache::new("standings cache", cache_capacity::DEFAULT),
            career_stats: MemoCache::new("career stats cache", cache_capacity::DEFAULT),
        }
    }

    pub fn client(&self) -> &NhlClient {
        &self.client
    }

    pub async fn cache_stats(&self) -> CacheStats {
        CacheStats {
            seasons: self.seasons.info().await,
            teams: self.teams.info().await,
            rosters: self.rosters.info().await,
            schedules: self.schedules.info().await,
            standings: self.standings.info().await,
            career_stats: self.career_stats.info().await,
        }
    }

    /// Clears every resource cache.
    pub async fn clear_all_caches(&self) {
        self.clear_seasons().await;
        self.clear_teams().await;
        self.clear_rosters().await;
        self.clear_schedules().await;
        self.clear_standings().await;
        self.clear_career_stats().await;
        info!("All caches cleared");
    }
}
