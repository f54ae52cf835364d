use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Returns true when the arguments change the stored configuration.
pub fn is_config_update(args: &Args) -> bool {
    args.new_api_domain.is_some()
        || args.new_stats_api_domain.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
}

/// NHL Display Board
///
/// Shows NHL team rosters, regular season schedules, season standings and
/// player career profiles from the public NHL APIs.
///
/// Without a team the current season's teams are listed. With a team the
/// roster, season summary and regular season schedule are shown.
#[derive(Parser, Debug, Default)]
#[command(about, long_about = None)]
#[command(disable_version_flag = true)]
#[command(styles = get_styles())]
pub struct Args {
    /// Season id such as 20232024. Defaults to the current season.
    #[arg(short = 's', long = "season", help_heading = "Selection")]
    pub season: Option<i32>,

    /// Team abbreviation such as SJS.
    #[arg(short = 't', long = "team", help_heading = "Selection")]
    pub team: Option<String>,

    /// Show the career profile of a player by id (see the roster).
    #[arg(short = 'p', long = "player", help_heading = "Selection")]
    pub player: Option<i64>,

    /// List all seasons and exit.
    #[arg(long = "list-seasons", help_heading = "Selection")]
    pub list_seasons: bool,

    /// List the teams of the selected season and exit.
    #[arg(long = "list-teams", help_heading = "Selection")]
    pub list_teams: bool,

    /// Show only the regular season schedule of the selected team.
    #[arg(long = "schedule-only", help_heading = "Display Options")]
    pub schedule_only: bool,

    /// Disable colors in the output.
    #[arg(long = "plain", help_heading = "Display Options")]
    pub plain: bool,

    /// Update the NHL web API domain in config.
    #[arg(long = "config", help_heading = "Configuration", value_name = "API_DOMAIN")]
    pub new_api_domain: Option<String>,

    /// Update the NHL stats API domain in config.
    #[arg(
        long = "set-stats-domain",
        help_heading = "Configuration",
        value_name = "STATS_API_DOMAIN"
    )]
    pub new_stats_api_domain: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Show version information
    #[arg(short = 'V', long = "version", help_heading = "Info")]
    pub version: bool,

    /// Also write logs to the terminal.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
