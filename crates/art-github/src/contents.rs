//! Catalog loader over the repository contents endpoint.

use art_core::ImageEntry;
use art_core::catalog::sort_entries;
use art_core::filename::is_image_file;
use serde::Deserialize;

use crate::{GitHubClient, error::FetchError, http};

/// One element of `GET /repos/{owner}/{repo}/contents/{path}`.
#[derive(Debug, Deserialize)]
pub struct ContentsRecord {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub path: String,
}

impl ContentsRecord {
    /// Whether this record is an image file for the gallery.
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.kind == "file" && is_image_file(&self.name)
    }
}

/// Keep image files and turn them into catalog entries, in listing order.
#[must_use]
pub fn image_entries(records: Vec<ContentsRecord>) -> Vec<ImageEntry> {
    records
        .into_iter()
        .filter(ContentsRecord::is_image)
        .map(|r| ImageEntry::from_listing(r.name, r.path))
        .collect()
}

impl GitHubClient {
    /// URL of the image directory listing.
    #[must_use]
    pub fn contents_url(&self) -> String {
        let dir = self
            .image_dir
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/");
        format!(
            "{}/contents/{dir}?ref={}",
            self.repo_url(),
            urlencoding::encode(&self.branch)
        )
    }

    /// Fetch the image directory and return its images in catalog order.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the request fails, the API returns a
    /// non-success status, or the body is not a JSON array.
    pub async fn fetch_catalog(&self) -> Result<Vec<ImageEntry>, FetchError> {
        let url = self.contents_url();
        let resp = http::get(&self.http, &url).await?;
        let records: Vec<ContentsRecord> = http::json_records(&url, resp).await?;
        let listed = records.len();

        let mut entries = image_entries(records);
        sort_entries(&mut entries, &self.collator);
        tracing::debug!(url, listed, images = entries.len(), "loaded catalog");
        Ok(entries)
    }
}
