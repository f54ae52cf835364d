// src/main.rs
use clap::Parser;
use nhl_display_board::cli::{Args, is_config_update};
use nhl_display_board::commands::{
    handle_config_update_command, handle_list_config_command, handle_version_command,
    validate_args,
};
use nhl_display_board::error::AppError;
use nhl_display_board::{app, logging};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    validate_args(&args)?;

    // Handle version flag first
    if args.version {
        handle_version_command();
        return Ok(());
    }

    if args.list_config {
        return handle_list_config_command().await;
    }

    if is_config_update(&args) {
        return handle_config_update_command(&args).await;
    }

    // The guard must be kept alive for the duration of the program
    let (log_file_path, _guard) = logging::setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    let result = app::run(&args).await;
    if let Err(e) = &result {
        tracing::error!("{e}");
    }
    result
}
