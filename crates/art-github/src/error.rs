//! Loader error types.

use thiserror::Error;

/// A failed upstream fetch. Every variant names the URL that failed.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The API answered with a non-success status.
    #[error("HTTP {status} for {url}: {message}")]
    Status {
        url: String,
        status: u16,
        /// Response body, usually GitHub's JSON error message.
        message: String,
    },

    /// Anonymous rate limit exhausted (403/429 with rate-limit headers).
    #[error("HTTP {status} for {url}: rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        url: String,
        status: u16,
        retry_after_secs: u64,
    },

    /// The request never produced a response (DNS, connect, timeout, body read).
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body was not the expected JSON shape.
    #[error("unexpected response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// URL of the request that failed.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Status { url, .. }
            | Self::RateLimited { url, .. }
            | Self::Transport { url, .. }
            | Self::Decode { url, .. } => url,
        }
    }

    /// HTTP status, when the server answered.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } | Self::RateLimited { status, .. } => Some(*status),
            Self::Transport { .. } | Self::Decode { .. } => None,
        }
    }
}
