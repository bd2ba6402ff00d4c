// src/main.rs
use clap::Parser;
use user_autocomplete::app;
use user_autocomplete::cli::Args;
use user_autocomplete::error::AppError;
use user_autocomplete::logging::setup_logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // The guard must be kept alive for the duration of the program
    let (log_file_path, _guard) = setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    let result = app::run(&args).await;
    if let Err(e) = &result {
        tracing::error!("Exiting with error: {e}");
    }
    result
}
