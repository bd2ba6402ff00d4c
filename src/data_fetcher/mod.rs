//! Fetching and preparing user records.
//!
//! - `models`: serde schema of the users endpoint and the formatted record type
//! - `http_client`: reqwest client construction
//! - `fetch`: single GET with status mapping and validated deserialization
//! - `users`: fetch, attach name metadata and sort by last name

pub mod fetch;
pub mod http_client;
pub mod models;
pub mod users;

pub use fetch::{fetch_json, parse_json_body};
pub use http_client::create_http_client_with_timeout;
pub use models::{Address, User, UserWithNameMeta};
pub use users::{attach_name_meta, fetch_users, fetch_users_with_config, sort_by_last_name};
