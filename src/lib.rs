//! NHL Display Board Library
//!
//! This library fetches NHL team rosters, regular season schedules, season
//! standings and player career statistics from the public NHL APIs and
//! renders them as plain terminal tables.
//!
//! # Examples
//!
//! ```rust,no_run
//! use nhl_display_board::{Config, DataAccess};
//! use nhl_display_board::error::AppError;
//! use nhl_display_board::ui::{RenderOptions, render_schedule};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let data = DataAccess::new(&config)?;
//!
//!     // Regular season schedule of the Sharks in 2023-24
//!     let schedule = data.get_team_schedule("SJS", 20232024).await?;
//!
//!     let mut stdout = std::io::stdout();
//!     render_schedule(&mut stdout, &schedule, RenderOptions::default())?;
//!
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod logging;
pub mod testing_utils;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::{CacheStats, DataAccess, NhlClient};
pub use error::AppError;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
