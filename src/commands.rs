use crate::cli::Args;
use crate::config::Config;
use crate::config::validation::normalize_endpoint;
use crate::constants::TERMINAL_TITLE;
use crate::data_fetcher::{UserWithNameMeta, fetch_users_with_config};
use crate::error::AppError;
use crate::ui::{detail_lines, matches_query};
use crossterm::{execute, terminal::SetTitle};
use std::io::stdout;

/// Validates command line argument combinations.
///
/// Returns an error if incompatible arguments are used together.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if !args.once && (args.search.is_some() || args.select.is_some()) {
        return Err(AppError::config_error(
            "--search and --select can only be used together with --once",
        ));
    }
    if args.new_log_file_path.is_some() && args.clear_log_file_path {
        return Err(AppError::config_error(
            "Cannot use both --set-log-file and --clear-log-file",
        ));
    }
    Ok(())
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    execute!(stdout(), SetTitle(TERMINAL_TITLE))?;
    Config::display().await
}

/// Applies the configuration changes requested in `args` to `config`.
///
/// Returns true when the custom log path was cleared.
pub fn apply_config_updates(config: &mut Config, args: &Args) -> bool {
    if let Some(endpoint) = &args.new_users_endpoint {
        config.users_endpoint = normalize_endpoint(endpoint);
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
        false
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        true
    } else {
        false
    }
}

/// Picks the config an update starts from.
///
/// A config that failed to load is replaced by the defaults, and the returned
/// notice tells the user which settings were reset.
pub fn config_for_update(loaded: Result<Config, AppError>) -> (Config, Option<String>) {
    match loaded {
        Ok(config) => (config, None),
        Err(e) => {
            tracing::warn!("Existing config could not be loaded ({e}), starting from defaults");
            let notice = format!(
                "Warning: existing config could not be loaded ({e}).\n\
                 Stored settings were reset to defaults before applying this update."
            );
            (Config::default(), Some(notice))
        }
    }
}

/// Handles configuration update commands (--config, --set-log-file, --clear-log-file).
///
/// A config file that fails to load or validate is replaced rather than
/// blocking the update that might fix it.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let (mut config, reset_notice) = config_for_update(Config::load().await);
    if let Some(notice) = reset_notice {
        println!("{notice}");
    }

    if apply_config_updates(&mut config, args) {
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}

/// Plain-text listing of `users`, one display name per line with its id.
///
/// Users are kept in the given order; only those matching `query` are listed.
pub fn format_user_list(users: &[UserWithNameMeta], query: Option<&str>) -> Vec<String> {
    let query = query.unwrap_or("");
    users
        .iter()
        .filter(|user| matches_query(user.display(), query))
        .map(|user| format!("{:>4}  {}", user.user.id, user.display()))
        .collect()
}

/// Lines printed for `--once --select <id>`, or `None` if no user has that id.
pub fn format_selected_user(users: &[UserWithNameMeta], id: u64) -> Option<Vec<String>> {
    users
        .iter()
        .find(|user| user.user.id == id)
        .map(detail_lines)
}

/// Handles the --once command.
///
/// Fetches the users, prints the sorted and optionally filtered list, or the
/// address block of the selected user, then exits. A failed fetch prints the
/// error and returns it so the process exits non-zero.
pub async fn handle_once_command(args: &Args, config: &Config) -> Result<(), AppError> {
    execute!(stdout(), SetTitle(TERMINAL_TITLE))?;

    let users = match fetch_users_with_config(config).await {
        Ok(users) => users,
        Err(e) => {
            eprintln!("Failed to load users: {e}");
            return Err(e);
        }
    };

    if let Some(id) = args.select {
        return match format_selected_user(&users, id) {
            Some(lines) => {
                for line in lines {
                    println!("{line}");
                }
                Ok(())
            }
            None => Err(AppError::user_not_found(id)),
        };
    }

    let lines = format_user_list(&users, args.search.as_deref());
    if lines.is_empty() {
        println!("No options");
    }
    for line in lines {
        println!("{line}");
    }

    Ok(())
}
