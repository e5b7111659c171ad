//! Reservations derived from issue titles.
//!
//! A reservation is an open issue titled `"<prefix> <filename>"`. The prefix
//! match ignores case and surrounding whitespace.

use std::collections::HashSet;

use serde::{Serialize, Serializer};

/// Default title prefix marking an issue as a reservation.
pub const DEFAULT_PREFIX: &str = "Бронь:";

/// Filenames that are currently reserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservationSet {
    keys: HashSet<String>,
}

impl ReservationSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the set from issue titles, keeping those that carry `prefix`.
    pub fn from_titles<'a, I>(titles: I, prefix: &str) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        titles
            .into_iter()
            .filter_map(|title| reserved_key(title, prefix))
            .collect()
    }

    /// Exact-match membership against an image filename.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.keys.contains(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// Keys in byte order, for stable output.
    #[must_use]
    pub fn sorted(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.iter().collect();
        keys.sort_unstable();
        keys
    }
}

impl FromIterator<String> for ReservationSet {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}

impl Serialize for ReservationSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.sorted())
    }
}

/// Extract the reserved filename from an issue title.
///
/// The title is trimmed, its first `prefix.chars().count()` characters are
/// compared to `prefix` ignoring case, and the trimmed remainder is returned
/// if non-empty.
#[must_use]
pub fn reserved_key(title: &str, prefix: &str) -> Option<String> {
    let title = title.trim();
    let split = title
        .char_indices()
        .nth(prefix.chars().count())
        .map_or(title.len(), |(idx, _)| idx);
    let (head, rest) = title.split_at(split);
    if head.to_lowercase() != prefix.to_lowercase() {
        return None;
    }
    let key = rest.trim();
    (!key.is_empty()).then(|| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("Бронь: 57-Nadir.jpg", Some("57-Nadir.jpg"))]
    #[case("бронь: 57-Nadir.jpg", Some("57-Nadir.jpg"))]
    #[case("БРОНЬ:57-Nadir.jpg", Some("57-Nadir.jpg"))]
    #[case("   Бронь:   57-Nadir.jpg  ", Some("57-Nadir.jpg"))]
    #[case("Бронь:", None)]
    #[case("  Бронь:    ", None)]
    #[case("Бронь", None)]
    #[case("Питання: 57-Nadir.jpg", None)]
    #[case("57-Nadir.jpg", None)]
    #[case("", None)]
    fn extracts_key_from_title(#[case] title: &str, #[case] expected: Option<&str>) {
        assert_eq!(reserved_key(title, DEFAULT_PREFIX).as_deref(), expected);
    }

    #[test]
    fn prefix_token_is_configurable() {
        assert_eq!(
            reserved_key("reservation:  5-Dogs.jpg", "Reservation:").as_deref(),
            Some("5-Dogs.jpg")
        );
        assert_eq!(reserved_key("Бронь: 5-Dogs.jpg", "Reservation:"), None);
    }

    #[test]
    fn from_titles_deduplicates() {
        let set = ReservationSet::from_titles(
            ["Бронь: 1-A.jpg", "бронь: 1-A.jpg", "Бронь: 2-B.jpg", "bug report"],
            DEFAULT_PREFIX,
        );
        assert_eq!(set.len(), 2);
        assert!(set.contains("1-A.jpg"));
        assert!(set.contains("2-B.jpg"));
        assert!(!set.contains("1-a.jpg"));
    }

    #[test]
    fn serializes_as_sorted_list() {
        let set: ReservationSet = ["b.jpg".to_string(), "a.jpg".to_string()]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["a.jpg","b.jpg"]"#);
    }
}
