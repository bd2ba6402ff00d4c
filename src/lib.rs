//! Searchable user directory for the terminal
//!
//! This library fetches a list of user records, formats every free-form full
//! name into a `"Last Suffix, First (Titles)"` display string with a
//! lowercase last-name sort key, and offers a type-to-filter picker over the
//! sorted list.
//!
//! # Examples
//!
//! ```rust,no_run
//! use user_autocomplete::config::Config;
//! use user_autocomplete::data_fetcher::fetch_users_with_config;
//! use user_autocomplete::error::AppError;
//! use user_autocomplete::ui::UserPicker;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let users = fetch_users_with_config(&config).await?;
//!
//!     let mut picker = UserPicker::new(users);
//!     picker.set_query("how");
//!     if let Some(user) = picker.select_highlighted() {
//!         println!("{}", user.display());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! Name formatting on its own needs no network access:
//!
//! ```
//! use user_autocomplete::names::format_name;
//!
//! let meta = format_name("Dr. Ervin Howell Jr.");
//! assert_eq!(meta.display(), "Howell Jr., Ervin (Dr.)");
//! assert_eq!(meta.sortable_last_name(), "howell");
//! ```

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod logging;
pub mod names;
pub mod testing_utils;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::{User, UserWithNameMeta, fetch_users};
pub use error::AppError;
pub use names::{NameMeta, format_name};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
