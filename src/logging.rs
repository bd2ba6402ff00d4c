use crate::cli::Args;
use crate::config::Config;
use crate::constants::{DEFAULT_LOG_DIRECTIVE, LOG_FILE_NAME};
use crate::error::AppError;
use std::io::stdout;
use std::path::Path;
use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Builds the filter shared by every layer: `RUST_LOG` plus the crate-level default.
fn env_filter() -> Result<EnvFilter, AppError> {
    let directive = DEFAULT_LOG_DIRECTIVE
        .parse()
        .map_err(|e| AppError::log_setup_error(format!("Invalid log directive: {e}")))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}

/// Splits the chosen log file location into directory and file name.
///
/// `custom_path` wins over the default location inside the config directory.
pub fn resolve_log_location(custom_path: Option<&str>) -> (String, String) {
    match custom_path {
        Some(custom_path) => {
            let path = Path::new(custom_path);
            let parent = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(LOG_FILE_NAME);
            (parent.to_string_lossy().to_string(), file_name.to_string())
        }
        None => (Config::get_log_dir_path(), LOG_FILE_NAME.to_string()),
    }
}

/// Plain `--once` keeps stdout for the listing; other non-interactive modes also log there.
pub fn log_to_stdout(args: &Args) -> bool {
    crate::cli::is_noninteractive_mode(args) && (!args.once || args.debug)
}

/// Assembles the subscriber: an optional ANSI stdout layer over a plain-text
/// layer writing to `file_writer`, each with its own [`env_filter`].
pub fn build_subscriber<W>(
    file_writer: W,
    with_stdout: bool,
) -> Result<impl Subscriber + Send + Sync + 'static, AppError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let stdout_layer = if with_stdout {
        Some(
            fmt::Layer::new()
                .with_writer(stdout)
                .with_ansi(true)
                .with_filter(env_filter()?),
        )
    } else {
        None
    };

    let file_layer = fmt::Layer::new()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_filter(env_filter()?);

    Ok(tracing_subscriber::registry()
        .with(stdout_layer)
        .with(file_layer))
}

/// Sets up logging configuration for the application.
///
/// Configures logging based on the provided arguments and config:
/// - Interactive mode: logs only to file
/// - Once mode without debug: logs only to file
/// - Other non-interactive modes: logs to both stdout and file
/// - Creates log directory if it doesn't exist
/// - Uses daily rolling file appender
///
/// Returns the path to the log file and the guard that must be kept alive
/// for the duration of the program to ensure proper log flushing.
pub async fn setup_logging(args: &Args) -> Result<(String, WorkerGuard), AppError> {
    // A broken config must not prevent logging; it is reported later by the command itself
    let config_log_path = Config::load()
        .await
        .ok()
        .and_then(|config| config.log_file_path);

    let custom_log_path = args.log_file.as_deref().or(config_log_path.as_deref());
    let (log_dir, log_file_name) = resolve_log_location(custom_log_path);

    if !Path::new(&log_dir).exists() {
        tokio::fs::create_dir_all(&log_dir).await.map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);

    // The guard must be kept alive for the duration of the program
    // to ensure logs are flushed properly
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    build_subscriber(non_blocking, log_to_stdout(args))?
        .try_init()
        .map_err(|e| AppError::log_setup_error(format!("Failed to install subscriber: {e}")))?;

    let log_file_path = format!("{log_dir}/{log_file_name}");
    Ok((log_file_path, guard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::tempdir;

    fn args(argv: &[&str]) -> Args {
        let mut full = vec!["user_autocomplete"];
        full.extend_from_slice(argv);
        Args::parse_from(full)
    }

    fn log_through_subscriber(with_stdout: bool) -> String {
        let dir = tempdir().unwrap();
        let appender = tracing_appender::rolling::never(dir.path(), "test.log");
        let subscriber = build_subscriber(appender, with_stdout).unwrap();

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("users loaded");
            tracing::debug!("hidden below the default level");
        });

        std::fs::read_to_string(dir.path().join("test.log")).unwrap()
    }

    #[test]
    fn test_file_only_subscriber_writes_log_file() {
        let contents = log_through_subscriber(false);
        assert!(contents.contains("users loaded"));
        assert!(!contents.contains('\u{1b}'), "file output must not contain ANSI codes");
    }

    #[test]
    fn test_subscriber_with_stdout_still_writes_log_file() {
        let contents = log_through_subscriber(true);
        assert!(contents.contains("users loaded"));
    }

    #[test]
    fn test_log_to_stdout_by_mode() {
        assert!(!log_to_stdout(&args(&[])));
        assert!(!log_to_stdout(&args(&["--once"])));
        assert!(log_to_stdout(&args(&["--once", "--debug"])));
        assert!(log_to_stdout(&args(&["--list-config"])));
        assert!(log_to_stdout(&args(&["--clear-log-file"])));
    }

    #[test]
    fn test_env_filter_builds() {
        assert!(env_filter().is_ok());
    }

    #[test]
    fn test_resolve_custom_log_location() {
        let (dir, file) = resolve_log_location(Some("/tmp/logs/app.log"));
        assert_eq!(dir, "/tmp/logs");
        assert_eq!(file, "app.log");
    }

    #[test]
    fn test_resolve_bare_file_name_uses_current_dir() {
        let (dir, file) = resolve_log_location(Some("app.log"));
        assert_eq!(dir, ".");
        assert_eq!(file, "app.log");
    }

    #[test]
    fn test_resolve_default_log_location() {
        let (dir, file) = resolve_log_location(None);
        assert_eq!(dir, Config::get_log_dir_path());
        assert_eq!(file, LOG_FILE_NAME);
    }
}
