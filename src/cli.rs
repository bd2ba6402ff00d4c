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

/// Determines if the application should run in non-interactive mode
/// Non-interactive mode is used when any of these conditions are met:
/// - --once flag is set (print the list and exit)
/// - config operations are requested
/// - --list-config is set
pub fn is_noninteractive_mode(args: &Args) -> bool {
    args.once || args.list_config || is_config_command(args)
}

/// True when the arguments ask to change the stored configuration
pub fn is_config_command(args: &Args) -> bool {
    args.new_users_endpoint.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
}

/// Searchable user directory for the terminal
///
/// Fetches the user list, formats every name as "Last, First (Titles)" and
/// lets you filter it by typing.
///
/// In interactive mode (default):
/// - Type to filter, Backspace to delete
/// - Use arrow keys (↑/↓) to move the highlight, Enter to select
/// - Press Esc to clear the search, or to quit when it is already empty
/// - Press Ctrl+C to quit at any time
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Print the formatted user list once and exit.
    /// The output stays visible in terminal history.
    #[arg(short, long)]
    pub once: bool,

    /// Only print users whose formatted name contains this text (case-insensitive). Requires --once.
    #[arg(short, long, value_name = "QUERY", help_heading = "Display Options")]
    pub search: Option<String>,

    /// Print the address block of the user with this id. Requires --once.
    #[arg(long, value_name = "ID", help_heading = "Display Options")]
    pub select: Option<u64>,

    /// Update the users endpoint URL in config.
    #[arg(long = "config", help_heading = "Configuration", value_name = "URL")]
    pub new_users_endpoint: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Enable debug mode which doesn't switch to the alternate screen or raw mode.
    /// Logs are also echoed to the terminal in --once mode.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args_are_interactive() {
        let args = Args::parse_from(["user_autocomplete"]);
        assert!(!is_noninteractive_mode(&args));
        assert!(!is_config_command(&args));
    }

    #[test]
    fn test_once_with_search_and_select() {
        let args =
            Args::parse_from(["user_autocomplete", "--once", "-s", "howell", "--select", "2"]);
        assert!(args.once);
        assert_eq!(args.search.as_deref(), Some("howell"));
        assert_eq!(args.select, Some(2));
        assert!(is_noninteractive_mode(&args));
    }

    #[test]
    fn test_config_flags_are_noninteractive() {
        let args = Args::parse_from(["user_autocomplete", "--config", "https://example.com/users"]);
        assert_eq!(
            args.new_users_endpoint.as_deref(),
            Some("https://example.com/users")
        );
        assert!(is_config_command(&args));
        assert!(is_noninteractive_mode(&args));

        let args = Args::parse_from(["user_autocomplete", "--clear-log-file"]);
        assert!(is_config_command(&args));
    }

    #[test]
    fn test_select_rejects_non_numeric_id() {
        assert!(Args::try_parse_from(["user_autocomplete", "--once", "--select", "abc"]).is_err());
    }
}
