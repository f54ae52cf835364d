use crate::cli::Args;
use crate::commands::{
    handle_board_command, handle_list_seasons, handle_list_teams, handle_player_command,
};
use crate::config::Config;
use crate::data_fetcher::DataAccess;
use crate::error::AppError;
use crate::ui::{RenderOptions, SelectionContext};
use std::io::{Write, stdout};
use tracing::debug;

/// Runs the display flow selected by the command line arguments.
///
/// Loads the configuration, renders into a locked stdout and flushes once
/// at the end.
pub async fn run(args: &Args) -> Result<(), AppError> {
    let config = Config::load().await?;
    let data = DataAccess::new(&config)?;
    let mut context = SelectionContext::new();
    let options = RenderOptions { color: !args.plain };

    let mut out = stdout().lock();
    let result = run_with(&data, &mut context, args, options, &mut out).await;
    out.flush()?;

    debug!("Cache usage: {:?}", data.cache_stats().await);
    result
}

/// Dispatches to the command for `args`, writing to `out`.
///
/// `context` carries the season and team selection between calls. [`run`]
/// starts from a fresh context, so remembered selections only apply when the
/// same context is reused across several calls.
pub async fn run_with<W: Write>(
    data: &DataAccess,
    context: &mut SelectionContext,
    args: &Args,
    options: RenderOptions,
    out: &mut W,
) -> Result<(), AppError> {
    if let Some(player_id) = args.player {
        return handle_player_command(data, player_id, options, out).await;
    }
    if args.list_seasons {
        return handle_list_seasons(data, context, args, options, out).await;
    }
    if args.list_teams {
        return handle_list_teams(data, context, args, options, out).await;
    }
    handle_board_command(data, context, args, options, out).await
}
