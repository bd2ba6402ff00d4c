use crate::cli::{Args, is_config_command};
use crate::commands::{
    handle_config_update_command, handle_list_config_command, handle_once_command, validate_args,
};
use crate::config::Config;
use crate::error::AppError;
use crate::ui;

/// Run the interactive application flow.
///
/// Terminal setup and cleanup happen inside the UI so they also run when the
/// loop returns an error.
pub async fn run_interactive(args: &Args, config: Config) -> Result<(), AppError> {
    ui::run_interactive_ui(config, args.debug).await
}

/// Dispatches parsed arguments to the matching command.
///
/// Config commands run before the config is loaded so a broken config file
/// can still be fixed from the command line.
pub async fn run(args: &Args) -> Result<(), AppError> {
    validate_args(args)?;

    if args.list_config {
        return handle_list_config_command().await;
    }

    if is_config_command(args) {
        return handle_config_update_command(args).await;
    }

    // Load config first to fail early if there's an issue
    let config = Config::load().await?;
    tracing::debug!("Using users endpoint {}", config.users_endpoint);

    if args.once {
        return handle_once_command(args, &config).await;
    }

    run_interactive(args, config).await
}
