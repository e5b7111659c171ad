//! Shared HTTP response helpers for the GitHub loaders.
//!
//! Centralizes status-code checks (rate limiting with `Retry-After` parsing,
//! non-success → [`FetchError::Status`]) and tolerant JSON array decoding so
//! the loader modules stay focused on request construction and filtering.

use serde::de::DeserializeOwned;

use crate::error::FetchError;

/// Send a GET request and check the response status.
pub async fn get(http: &reqwest::Client, url: &str) -> Result<reqwest::Response, FetchError> {
    tracing::debug!(url, "fetching");
    let resp = http
        .get(url)
        .header(reqwest::header::ACCEPT, "application/vnd.github+json")
        .send()
        .await
        .map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;
    check_response(url, resp).await
}

/// Check an HTTP response for error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **429**, or **403** with `x-ratelimit-remaining: 0` → [`FetchError::RateLimited`]
///   (`Retry-After` in seconds, falling back to 60 s)
/// - **Non-success status** → [`FetchError::Status`] with the response body
pub async fn check_response(
    url: &str,
    resp: reqwest::Response,
) -> Result<reqwest::Response, FetchError> {
    let status = resp.status();
    if status == 429 || (status == 403 && rate_limit_exhausted(&resp)) {
        return Err(FetchError::RateLimited {
            url: url.to_string(),
            status: status.as_u16(),
            retry_after_secs: parse_retry_after(&resp),
        });
    }
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Read a JSON array body, decoding each element independently.
///
/// Elements that do not fit `T` are dropped with a debug log; only a body
/// that is not a JSON array at all is an error.
pub async fn json_records<T: DeserializeOwned>(
    url: &str,
    resp: reqwest::Response,
) -> Result<Vec<T>, FetchError> {
    let body = resp.bytes().await.map_err(|source| FetchError::Transport {
        url: url.to_string(),
        source,
    })?;
    decode_records(url, &body)
}

pub(crate) fn decode_records<T: DeserializeOwned>(
    url: &str,
    body: &[u8],
) -> Result<Vec<T>, FetchError> {
    let values: Vec<serde_json::Value> =
        serde_json::from_slice(body).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })?;
    let total = values.len();
    let records: Vec<T> = values
        .into_iter()
        .filter_map(|value| serde_json::from_value(value).ok())
        .collect();
    if records.len() < total {
        tracing::debug!(url, skipped = total - records.len(), "skipped malformed records");
    }
    Ok(records)
}

fn rate_limit_exhausted(resp: &reqwest::Response) -> bool {
    resp.headers()
        .get("x-ratelimit-remaining")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.trim() == "0")
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}
