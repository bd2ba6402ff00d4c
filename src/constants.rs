//! Application-wide constants and configuration values
//!
//! This module centralizes magic numbers and names so the fetch, config and
//! UI layers agree on them.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Endpoint used when neither the config file nor the environment names one
pub const DEFAULT_USERS_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

/// Directory name used under the platform config directory
pub const APP_DIR_NAME: &str = "user_autocomplete";

/// File name of the default log file
pub const LOG_FILE_NAME: &str = "user_autocomplete.log";

/// Tracing directive applied on top of `RUST_LOG`
pub const DEFAULT_LOG_DIRECTIVE: &str = "user_autocomplete=info";

/// Terminal title shown while the app is running
pub const TERMINAL_TITLE: &str = "User Search";

/// Environment variable names
pub mod env_vars {
    /// Overrides the users endpoint URL
    pub const USERS_ENDPOINT: &str = "USER_AUTOCOMPLETE_ENDPOINT";

    /// Overrides the log file path
    pub const LOG_FILE: &str = "USER_AUTOCOMPLETE_LOG_FILE";

    /// Overrides the HTTP timeout in seconds
    pub const HTTP_TIMEOUT: &str = "USER_AUTOCOMPLETE_HTTP_TIMEOUT";
}

/// UI timing and layout
pub mod ui {
    /// How long one `event::poll` waits for input before the loop ticks (milliseconds)
    pub const EVENT_POLL_MS: u64 = 50;

    /// Spinner advances once per this many milliseconds
    pub const SPINNER_FRAME_MS: u64 = 120;

    /// Maximum number of options drawn in the list at once
    pub const MAX_VISIBLE_OPTIONS: usize = 10;

    /// Width of the picker column, in terminal cells
    pub const PICKER_WIDTH: usize = 48;

    /// Label shown above the search field
    pub const SEARCH_LABEL: &str = "Search users";

    /// Text shown while the user list is being fetched
    pub const LOADING_TEXT: &str = "Loading...";
}
