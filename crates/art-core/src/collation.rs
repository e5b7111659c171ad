//! Locale-aware comparison of category labels.

use std::cmp::Ordering;

use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed, CollatorPreferences};
use icu_locale_core::Locale;

use crate::errors::CoreError;

/// Default collation locale for category headings.
pub const DEFAULT_LOCALE: &str = "uk";

/// Compares category labels the way readers of `locale` expect them ordered.
pub struct CategoryCollator {
    collator: CollatorBorrowed<'static>,
}

impl CategoryCollator {
    /// Build a collator for a BCP-47 locale tag such as `uk` or `en-US`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidLocale`] if the tag does not parse and
    /// [`CoreError::CollationData`] if no collation data can be loaded for it.
    pub fn new(locale: &str) -> Result<Self, CoreError> {
        let parsed = parse_locale(locale)?;
        let collator = Collator::try_new(CollatorPreferences::from(&parsed), CollatorOptions::default())
            .map_err(|e| CoreError::CollationData {
                locale: locale.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self { collator })
    }

    #[must_use]
    pub fn compare(&self, left: &str, right: &str) -> Ordering {
        self.collator.compare(left, right)
    }
}

impl std::fmt::Debug for CategoryCollator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CategoryCollator").finish_non_exhaustive()
    }
}

/// Parse a BCP-47 locale tag.
///
/// # Errors
///
/// Returns [`CoreError::InvalidLocale`] if the tag is malformed.
pub fn parse_locale(locale: &str) -> Result<Locale, CoreError> {
    locale
        .parse::<Locale>()
        .map_err(|e| CoreError::InvalidLocale {
            locale: locale.to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ukrainian_alphabet_order() {
        let collator = CategoryCollator::new("uk").unwrap();
        // Ukrainian places і after и and ї after і; byte order would not.
        assert_eq!(collator.compare("Ирина", "Ікона"), Ordering::Less);
        assert_eq!(collator.compare("Ікона", "Їжак"), Ordering::Less);
        assert_eq!(collator.compare("Їжак", "Йога"), Ordering::Less);
    }

    #[test]
    fn case_is_a_tertiary_difference() {
        let collator = CategoryCollator::new("en").unwrap();
        assert_eq!(collator.compare("cats", "Dogs"), Ordering::Less);
        assert_eq!(collator.compare("Cats", "Cats"), Ordering::Equal);
    }

    #[test]
    fn rejects_malformed_locale() {
        let err = CategoryCollator::new("not a locale!").unwrap_err();
        assert!(matches!(err, CoreError::InvalidLocale { .. }));
    }
}
