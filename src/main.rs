// src/main.rs
mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Args, is_config_update};
use school_erp_client::error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    if args.list_endpoints {
        commands::handle_list_endpoints_command();
        return Ok(());
    }

    if args.list_config {
        return commands::handle_list_config_command().await;
    }

    if is_config_update(&args) {
        return commands::handle_config_update_command(&args).await;
    }

    // The guard must outlive every call so buffered log lines are flushed
    let (log_file_path, _guard) = logging::setup_logging(&args).await?;
    tracing::debug!("Logging to {}", log_file_path);

    commands::handle_call_command(&args).await
}
