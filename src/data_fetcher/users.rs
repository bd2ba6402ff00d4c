//! Loading the user list: fetch, format names, sort.

use reqwest::Client;
use tracing::{info, instrument, warn};

use super::fetch::fetch_json;
use super::http_client::create_http_client_with_timeout;
use super::models::{User, UserWithNameMeta};
use crate::config::Config;
use crate::error::AppError;
use crate::names::compare_sort_keys;

/// Pairs every user with the formatted form of its name, keeping input order.
pub fn attach_name_meta(users: Vec<User>) -> Vec<UserWithNameMeta> {
    users
        .into_iter()
        .map(|user| {
            if user.name.trim().is_empty() {
                warn!("User {} has a blank name", user.id);
            }
            UserWithNameMeta::new(user)
        })
        .collect()
}

/// Sorts users by their lowercase last name, ignoring accents.
///
/// Accented letters sort with their base letter, so "Ångström" comes before
/// "Ebert". Keys that only differ in accents are ordered by code point. The
/// sort is stable, so users sharing a last name keep the order the endpoint
/// returned them in.
pub fn sort_by_last_name(users: &mut [UserWithNameMeta]) {
    users.sort_by(|a, b| compare_sort_keys(a.sortable_last_name(), b.sortable_last_name()));
}

/// Fetches the user list from `url`, formats every name and sorts by last name.
#[instrument(skip(client))]
pub async fn fetch_users(client: &Client, url: &str) -> Result<Vec<UserWithNameMeta>, AppError> {
    let users: Vec<User> = fetch_json(client, url).await?;
    info!("Fetched {} users", users.len());

    let mut formatted = attach_name_meta(users);
    sort_by_last_name(&mut formatted);
    Ok(formatted)
}

/// Builds a client from `config` and loads the users from its endpoint.
pub async fn fetch_users_with_config(config: &Config) -> Result<Vec<UserWithNameMeta>, AppError> {
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
    fetch_users(&client, &config.users_endpoint).await
}
