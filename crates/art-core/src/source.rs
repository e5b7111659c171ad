//! Loader seams.
//!
//! The page pipeline is generic over these two traits. `art-github`
//! implements both against the GitHub REST API.

use std::future::Future;

use crate::catalog::ImageEntry;
use crate::reservation::ReservationSet;

/// Produces the gallery catalog in catalog order.
pub trait CatalogSource {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Entries sorted by category (collated) then number.
    fn list_images(&self) -> impl Future<Output = Result<Vec<ImageEntry>, Self::Error>> + Send;
}

/// Produces the set of reserved filenames.
pub trait ReservationSource {
    type Error: std::error::Error + Send + Sync + 'static;

    fn list_reserved_keys(&self) -> impl Future<Output = Result<ReservationSet, Self::Error>> + Send;
}
