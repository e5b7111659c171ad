//! Error types for core gallery values.
//!
//! Network failures are not modelled here; they belong to the loader crate
//! that talks to the upstream service.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// The configured collation locale is not a valid BCP-47 tag.
    #[error("Invalid locale '{locale}': {reason}")]
    InvalidLocale { locale: String, reason: String },

    /// Collation data for the locale could not be loaded.
    #[error("Collation data unavailable for '{locale}': {reason}")]
    CollationData { locale: String, reason: String },
}
