//! Reservation loader over the issues endpoint.
//!
//! The issues endpoint also returns pull requests; those carry a
//! `pull_request` object and are never treated as reservations.

use art_core::ReservationSet;
use serde::Deserialize;

use crate::{GitHubClient, error::FetchError, http};

/// One element of `GET /repos/{owner}/{repo}/issues`.
#[derive(Debug, Deserialize)]
pub struct IssueRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub pull_request: Option<serde_json::Value>,
}

impl IssueRecord {
    #[must_use]
    pub const fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }
}

/// Reserved filenames named by the issue (not pull request) titles.
#[must_use]
pub fn reserved_set(records: &[IssueRecord], prefix: &str) -> ReservationSet {
    ReservationSet::from_titles(
        records
            .iter()
            .filter(|r| !r.is_pull_request())
            .filter_map(|r| r.title.as_deref()),
        prefix,
    )
}

impl GitHubClient {
    /// URL of the single page of open issues that is scanned.
    #[must_use]
    pub fn issues_url(&self) -> String {
        format!(
            "{}/issues?state=open&per_page={}",
            self.repo_url(),
            self.page_size
        )
    }

    /// Fetch open issues and extract the reserved filenames.
    ///
    /// Only the first page is read; reservations beyond it are not seen.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the request fails, the API returns a
    /// non-success status, or the body is not a JSON array.
    pub async fn fetch_reservations(&self) -> Result<ReservationSet, FetchError> {
        let url = self.issues_url();
        let resp = http::get(&self.http, &url).await?;
        let records: Vec<IssueRecord> = http::json_records(&url, resp).await?;

        let reserved = reserved_set(&records, &self.prefix);
        if records.len() >= self.page_size as usize {
            tracing::warn!(
                url,
                page_size = self.page_size,
                "issue page is full; reservations past it are not visible"
            );
        }
        tracing::debug!(url, issues = records.len(), reserved = reserved.len(), "loaded reservations");
        Ok(reserved)
    }
}
