//! Page text and collation locale.
//!
//! Every string the rendered page shows comes from here, so the gallery can
//! be localized without code changes. Defaults are Ukrainian.

use art_core::collation::DEFAULT_LOCALE;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// BCP-47 locale used to order category headings.
    pub locale: String,
    /// `<title>` and top heading of the page.
    pub page_title: String,
    /// Status line while loading.
    pub loading_text: String,
    /// Status line after a successful load. `{images}` and `{reservations}`
    /// are replaced with the counts.
    pub summary_text: String,
    /// Status line when either load fails.
    pub error_text: String,
    /// Badge on a reserved image.
    pub reserved_label: String,
    /// Badge on a free image.
    pub free_label: String,
    /// Button on a free image.
    pub reserve_action: String,
    /// Inert button on a reserved image.
    pub reserved_action: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            page_title: "Малюнки".to_string(),
            loading_text: "Завантажую малюнки…".to_string(),
            summary_text: "Знайдено малюнків: {images}. Броней: {reservations}.".to_string(),
            error_text:
                "Помилка завантаження. Перевір, чи є папка img і чи GitHub Pages активний."
                    .to_string(),
            reserved_label: "Заброньовано".to_string(),
            free_label: "Вільний".to_string(),
            reserve_action: "Забронювати".to_string(),
            reserved_action: "Уже заброньовано".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::{assert_eq, assert_ne};

    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = DisplayConfig::default();
        assert_eq!(config.locale, "uk");
        assert!(config.summary_text.contains("{images}"));
        assert!(config.summary_text.contains("{reservations}"));
        assert_ne!(config.reserved_label, config.free_label);
        assert_ne!(config.reserve_action, config.reserved_action);
    }
}
