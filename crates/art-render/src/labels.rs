//! Text shown on the rendered page.

use art_config::DisplayConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub page_title: String,
    pub loading: String,
    pub summary: String,
    pub error: String,
    pub reserved: String,
    pub free: String,
    pub reserve_action: String,
    pub reserved_action: String,
}

impl Labels {
    #[must_use]
    pub fn from_config(display: &DisplayConfig) -> Self {
        Self {
            page_title: display.page_title.clone(),
            loading: display.loading_text.clone(),
            summary: display.summary_text.clone(),
            error: display.error_text.clone(),
            reserved: display.reserved_label.clone(),
            free: display.free_label.clone(),
            reserve_action: display.reserve_action.clone(),
            reserved_action: display.reserved_action.clone(),
        }
    }

    /// Status line after a successful load.
    #[must_use]
    pub fn summary_line(&self, images: usize, reservations: usize) -> String {
        self.summary
            .replace("{images}", &images.to_string())
            .replace("{reservations}", &reservations.to_string())
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::from_config(&DisplayConfig::default())
    }
}
