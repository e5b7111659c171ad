//! # art-github
//!
//! GitHub REST loaders for the gallery.
//!
//! - [`GitHubClient::fetch_catalog`]: repository directory listing → ordered catalog
//! - [`GitHubClient::fetch_reservations`]: one page of open issues → reserved filenames
//!
//! `GitHubClient` implements [`CatalogSource`] and [`ReservationSource`] through
//! these. Both are anonymous, single-shot requests: no auth, no retry, no pagination.

pub mod contents;
pub mod issues;

mod error;
mod http;

pub use error::FetchError;

use art_config::GalleryConfig;
use art_core::{CatalogSource, CategoryCollator, CoreError, ImageEntry, ReservationSet, ReservationSource};
use thiserror::Error;

/// Errors building a [`GitHubClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Collation(#[from] CoreError),
}

/// HTTP client for one gallery repository.
pub struct GitHubClient {
    http: reqwest::Client,
    api_base: String,
    owner: String,
    repo: String,
    branch: String,
    image_dir: String,
    prefix: String,
    page_size: u32,
    collator: CategoryCollator,
}

impl GitHubClient {
    /// Create a client from the loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the HTTP client cannot be built or the
    /// configured locale has no collation data.
    pub fn new(config: &GalleryConfig) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder().user_agent(config.http.user_agent.clone());
        if let Some(timeout) = config.http.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            api_base: config.http.api_base.trim_end_matches('/').to_string(),
            owner: config.repo.owner.clone(),
            repo: config.repo.name.clone(),
            branch: config.repo.branch.clone(),
            image_dir: config.repo.image_dir.trim_matches('/').to_string(),
            prefix: config.reservations.prefix.trim().to_string(),
            page_size: config.reservations.effective_page_size(),
            collator: CategoryCollator::new(&config.display.locale)?,
        })
    }

    fn repo_url(&self) -> String {
        format!(
            "{}/repos/{}/{}",
            self.api_base,
            urlencoding::encode(&self.owner),
            urlencoding::encode(&self.repo)
        )
    }
}

impl CatalogSource for GitHubClient {
    type Error = FetchError;

    async fn list_images(&self) -> Result<Vec<ImageEntry>, FetchError> {
        self.fetch_catalog().await
    }
}

impl ReservationSource for GitHubClient {
    type Error = FetchError;

    async fn list_reserved_keys(&self) -> Result<ReservationSet, FetchError> {
        self.fetch_reservations().await
    }
}
