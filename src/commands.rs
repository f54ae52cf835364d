use crate::cli::Args;
use crate::config::Config;
use crate::data_fetcher::models::{Season, Team};
use crate::data_fetcher::DataAccess;
use crate::error::AppError;
use crate::ui::{
    RenderOptions, SelectionContext, render_profile, render_roster, render_schedule,
    render_seasons, render_standing_summary, render_teams,
};
use std::io::Write;
use tracing::info;

/// Validates command line argument combinations.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if args.player.is_some() && (args.team.is_some() || args.schedule_only) {
        return Err(AppError::config_error(
            "Cannot combine --player with --team or --schedule-only",
        ));
    }
    if args.list_seasons && args.list_teams {
        return Err(AppError::config_error(
            "Cannot use both --list-seasons and --list-teams",
        ));
    }
    Ok(())
}

/// Handles the --version command.
pub fn handle_version_command() {
    println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--config, --set-stats-domain,
/// --set-log-file, --clear-log-file).
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load().await.unwrap_or_default();

    if let Some(new_domain) = &args.new_api_domain {
        config.api_domain = new_domain.clone();
    }

    if let Some(new_domain) = &args.new_stats_api_domain {
        config.stats_api_domain = new_domain.clone();
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}

/// Resolves the season for the command line selection.
///
/// An explicitly requested season must exist.
pub async fn resolve_season(
    data: &DataAccess,
    context: &SelectionContext,
    requested: Option<i32>,
) -> Result<(Season, bool), AppError> {
    let seasons = data.get_seasons().await?;
    let season = context.select_season(&seasons, requested).ok_or_else(|| {
        AppError::api_no_data("Season list is empty", data.client().stats_api_domain())
    })?;

    if let Some(requested) = requested
        && season.id != requested
    {
        return Err(AppError::season_not_found(requested));
    }

    let is_current = seasons.first().is_some_and(|current| current.id == season.id);
    Ok((season.clone(), is_current))
}

/// Teams of a season: the current standings for the current season, the
/// standings of its first day otherwise.
pub async fn season_teams(
    data: &DataAccess,
    season: &Season,
    is_current: bool,
) -> Result<Vec<Team>, AppError> {
    let date = (!is_current).then_some(season.start_date.as_str());
    Ok(data.get_teams(date).await?.to_vec())
}

/// Handles --list-seasons.
pub async fn handle_list_seasons<W: Write>(
    data: &DataAccess,
    context: &SelectionContext,
    args: &Args,
    options: RenderOptions,
    out: &mut W,
) -> Result<(), AppError> {
    let seasons = data.get_seasons().await?;
    let selected = context.select_season(&seasons, args.season).map(|s| s.id);
    render_seasons(out, &seasons, selected, options)?;
    Ok(())
}

/// Handles --list-teams.
pub async fn handle_list_teams<W: Write>(
    data: &DataAccess,
    context: &SelectionContext,
    args: &Args,
    options: RenderOptions,
    out: &mut W,
) -> Result<(), AppError> {
    let (season, is_current) = resolve_season(data, context, args.season).await?;
    let teams = season_teams(data, &season, is_current).await?;
    render_teams(out, &season, &teams, options)?;
    Ok(())
}

/// Handles --player.
pub async fn handle_player_command<W: Write>(
    data: &DataAccess,
    player_id: i64,
    options: RenderOptions,
    out: &mut W,
) -> Result<(), AppError> {
    let stats = data.get_career_stats(player_id).await?;
    render_profile(out, &stats, options)?;
    Ok(())
}

/// Shows the display board for the selected season and team.
///
/// Without a team the season's teams are listed instead.
pub async fn handle_board_command<W: Write>(
    data: &DataAccess,
    context: &mut SelectionContext,
    args: &Args,
    options: RenderOptions,
    out: &mut W,
) -> Result<(), AppError> {
    let (season, is_current) = resolve_season(data, context, args.season).await?;
    let teams = season_teams(data, &season, is_current).await?;

    let requested = args.team.as_deref().map(str::to_uppercase);
    let Some(team) = context
        .select_team(&season, &teams, requested.as_deref())
        .cloned()
    else {
        if let Some(requested) = requested {
            return Err(AppError::team_not_found(requested, season.formatted_id));
        }
        render_teams(out, &season, &teams, options)?;
        writeln!(out)?;
        writeln!(out, "Please select a team with --team to view the season summary.")?;
        return Ok(());
    };

    info!("Showing {} for {}", team.abbr, season.formatted_id);

    if !args.schedule_only {
        let roster = data.get_roster(season.id, &team.abbr).await?;
        render_roster(out, &season, &team, &roster, options)?;

        let standing = data.get_team_standing(season.id, &team.abbr).await?;
        render_standing_summary(out, &season, standing.as_ref(), options)?;
    }

    let schedule = data.get_team_schedule(&team.abbr, season.id).await?;
    render_schedule(out, &schedule, options)?;
    Ok(())
}
