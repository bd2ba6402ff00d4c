//! Generic HTTP fetching with status mapping and validated deserialization

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use tracing::{debug, error, info, instrument};

use crate::error::AppError;

/// Fetches `url` once and deserializes the body into `T`.
///
/// A single request is made; there is no retry. Non-success statuses map to
/// the specific `AppError` variants so callers can tell a missing endpoint
/// from an overloaded one.
///
/// # Errors
/// * `NetworkTimeout` / `NetworkConnection` / `ApiFetch` - transport failures
/// * `ApiNotFound`, `ApiRateLimit`, `ApiClientError`, `ApiServiceUnavailable`,
///   `ApiServerError` - non-success status codes
/// * `ApiNoData`, `ApiMalformedJson`, `SchemaMismatch` - see [`parse_json_body`]
#[instrument(skip(client))]
pub async fn fetch_json<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, AppError> {
    info!("Fetching data from URL: {url}");

    let response = match client.get(url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return if e.is_timeout() {
                Err(AppError::network_timeout(url))
            } else if e.is_connect() {
                Err(AppError::network_connection(url, e.to_string()))
            } else {
                Err(AppError::ApiFetch(e))
            };
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        return Err(match status_code {
            404 => AppError::api_not_found(url),
            429 => AppError::api_rate_limit(reason, url),
            400..=499 => AppError::api_client_error(status_code, reason, url),
            502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
            _ => AppError::api_server_error(status_code, reason, url),
        });
    }

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(AppError::ApiFetch(e));
        }
    };

    debug!("Response length: {} bytes", response_text.len());

    parse_json_body(&response_text, url)
}

/// Deserializes a response body, separating broken JSON from JSON of the wrong shape.
///
/// # Errors
/// * `ApiNoData` - the body is empty or whitespace
/// * `ApiMalformedJson` - the body is not syntactically valid JSON
/// * `SchemaMismatch` - the JSON is valid but does not match `T`
pub fn parse_json_body<T: DeserializeOwned>(body: &str, url: &str) -> Result<T, AppError> {
    if body.trim().is_empty() {
        return Err(AppError::api_no_data("Response body is empty", url));
    }

    serde_json::from_str::<T>(body).map_err(|e| {
        error!("Failed to parse API response: {} (URL: {})", e, url);
        debug!(
            "Response text (first 200 chars): {}",
            body.chars().take(200).collect::<String>()
        );

        match e.classify() {
            Category::Data => AppError::schema_mismatch(e.to_string(), url),
            Category::Syntax | Category::Eof => AppError::api_malformed_json(e.to_string(), url),
            Category::Io => AppError::ApiParse(e),
        }
    })
}
