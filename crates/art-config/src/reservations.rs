//! Reservation lookup settings.

use art_core::ReservationForm;
use art_core::reservation::DEFAULT_PREFIX;
use serde::{Deserialize, Serialize};

/// Issues fetched per load. GitHub caps `per_page` at 100.
pub const MAX_PAGE_SIZE: u32 = 100;

const fn default_page_size() -> u32 {
    MAX_PAGE_SIZE
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReservationsConfig {
    /// Title prefix marking an open issue as a reservation.
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Size of the single page of open issues that is scanned.
    /// Reservations beyond it are not seen.
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Template for the pre-filled reservation issue body.
    #[serde(default)]
    pub form: ReservationForm,
}

impl Default for ReservationsConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            page_size: default_page_size(),
            form: ReservationForm::default(),
        }
    }
}

impl ReservationsConfig {
    /// Page size clamped to what the issues endpoint accepts.
    #[must_use]
    pub fn effective_page_size(&self) -> u32 {
        self.page_size.clamp(1, MAX_PAGE_SIZE)
    }
}
