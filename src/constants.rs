//! Application-wide constants and configuration values
//!
//! This module centralizes magic numbers, API identifiers and default
//! settings so the data pipeline and configuration agree on them.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 100;

/// Default domain of the NHL web API (rosters, schedules, standings, players)
pub const DEFAULT_API_DOMAIN: &str = "https://api-web.nhle.com";

/// Default domain of the NHL stats REST API (season rules)
pub const DEFAULT_STATS_API_DOMAIN: &str = "https://api.nhle.com/stats/rest";

/// Name used for the config directory and the default log file
pub const APP_DIR_NAME: &str = "nhl_display_board";

/// Default log file name
pub const LOG_FILE_NAME: &str = "nhl_display_board.log";

/// Game identifiers used by the NHL APIs
pub mod game {
    /// `gameType` / `gameTypeId` of a regular season game
    pub const REGULAR_SEASON: i64 = 2;

    /// `gameType` / `gameTypeId` of a playoff game
    pub const PLAYOFFS: i64 = 3;

    /// `gameState` of a game that has not started yet
    pub const FUTURE_STATE: &str = "FUT";

    /// `gameOutcome.lastPeriodType` of a game decided in regulation
    pub const REGULATION_PERIOD: &str = "REG";
}

/// Memo cache capacities per resource
pub mod cache_capacity {
    /// The season list is a single entry
    pub const SEASONS: usize = 1;

    /// Capacity shared by the per-argument resources
    pub const DEFAULT: usize = 16;
}

/// Birth countries for which the API reports a state or province
pub const COUNTRIES_WITH_PROVINCE: [&str; 2] = ["USA", "CAN"];

/// Environment variable names
pub mod env_vars {
    /// Environment variable for API domain override
    pub const API_DOMAIN: &str = "NHL_API_DOMAIN";

    /// Environment variable for stats API domain override
    pub const STATS_API_DOMAIN: &str = "NHL_STATS_API_DOMAIN";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "NHL_LOG_FILE";

    /// Environment variable for HTTP timeout override in seconds
    pub const HTTP_TIMEOUT: &str = "NHL_HTTP_TIMEOUT";
}
