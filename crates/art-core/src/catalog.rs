//! Catalog entries and their ordering.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::collation::CategoryCollator;
use crate::filename;

/// One image in the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageEntry {
    /// Filename with extension, e.g. `57-Nadir.jpg`. Reservation key.
    pub name: String,
    /// Repository-relative path, e.g. `img/57-Nadir.jpg`.
    pub path: String,
    /// Sort key within a category.
    pub number: u64,
    /// Section heading the entry is grouped under.
    pub category: String,
}

impl ImageEntry {
    /// Build an entry from a listing record, parsing number and category
    /// from the filename.
    #[must_use]
    pub fn from_listing(name: impl Into<String>, path: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            number: filename::parse_number(&name),
            category: filename::parse_category(&name),
            path: path.into(),
            name,
        }
    }

    /// Display title: filename without its extension.
    #[must_use]
    pub fn title(&self) -> &str {
        filename::display_title(&self.name)
    }
}

/// Catalog order: category by collation, then number ascending.
///
/// Categories the collator treats as equal but that differ in code points
/// (NFC and NFD spellings of the same word) are split by byte order, so
/// every distinct category string stays one contiguous run.
#[must_use]
pub fn compare(a: &ImageEntry, b: &ImageEntry, collator: &CategoryCollator) -> Ordering {
    collator
        .compare(&a.category, &b.category)
        .then_with(|| a.category.cmp(&b.category))
        .then(a.number.cmp(&b.number))
}

/// Sort entries into catalog order. Stable, so ties keep listing order.
pub fn sort_entries(entries: &mut [ImageEntry], collator: &CategoryCollator) {
    entries.sort_by(|a, b| compare(a, b, collator));
}

/// Whether `entries` are already in catalog order.
#[must_use]
pub fn is_sorted(entries: &[ImageEntry], collator: &CategoryCollator) -> bool {
    entries
        .windows(2)
        .all(|pair| compare(&pair[0], &pair[1], collator) != Ordering::Greater)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(name: &str) -> ImageEntry {
        ImageEntry::from_listing(name, format!("img/{name}"))
    }

    fn names(entries: &[ImageEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn from_listing_parses_filename() {
        let e = entry("57-Nadir.jpg");
        assert_eq!(e.number, 57);
        assert_eq!(e.category, "Nadir");
        assert_eq!(e.path, "img/57-Nadir.jpg");
        assert_eq!(e.title(), "57-Nadir");
    }

    #[test]
    fn sorts_by_category_then_number() {
        let collator = CategoryCollator::new("en").unwrap();
        let mut entries = vec![
            entry("10-Dogs.jpg"),
            entry("10-Cats.jpg"),
            entry("2-Cats.jpg"),
            entry("1-Dogs.jpg"),
        ];
        sort_entries(&mut entries, &collator);
        assert_eq!(
            names(&entries),
            vec!["2-Cats.jpg", "10-Cats.jpg", "1-Dogs.jpg", "10-Dogs.jpg"]
        );
        assert!(is_sorted(&entries, &collator));
    }

    #[test]
    fn number_order_is_numeric_not_lexical() {
        let collator = CategoryCollator::new("en").unwrap();
        let mut entries = vec![entry("10-Cats.jpg"), entry("9-Cats.jpg")];
        sort_entries(&mut entries, &collator);
        assert_eq!(names(&entries), vec!["9-Cats.jpg", "10-Cats.jpg"]);
    }

    #[test]
    fn unnumbered_names_share_fallback_group_and_sort_last_in_it() {
        let collator = CategoryCollator::new("uk").unwrap();
        let mut entries = vec![
            entry("cover.png"),
            ImageEntry {
                name: "4-Інше.png".to_string(),
                path: "img/4-Інше.png".to_string(),
                number: 4,
                category: "Інше".to_string(),
            },
        ];
        sort_entries(&mut entries, &collator);
        assert_eq!(names(&entries), vec!["4-Інше.png", "cover.png"]);
    }

    #[test]
    fn sorting_sorted_catalog_is_noop() {
        let collator = CategoryCollator::new("uk").unwrap();
        let mut entries = vec![
            entry("3-Їжаки.png"),
            entry("1-Коти.jpg"),
            entry("2-Ікони.jpg"),
            entry("5-Авто.gif"),
            entry("misc.webp"),
        ];
        sort_entries(&mut entries, &collator);
        let once = entries.clone();
        sort_entries(&mut entries, &collator);
        assert_eq!(entries, once);
        assert_eq!(
            names(&entries),
            vec!["5-Авто.gif", "2-Ікони.jpg", "misc.webp", "3-Їжаки.png", "1-Коти.jpg"]
        );
    }

    #[test]
    fn canonically_equal_spellings_do_not_interleave() {
        let collator = CategoryCollator::new("uk").unwrap();
        let mut entries = vec![
            entry("1-І\u{0308}жаки.jpg"),
            entry("2-Їжаки.jpg"),
            entry("3-І\u{0308}жаки.jpg"),
        ];
        sort_entries(&mut entries, &collator);
        let categories: Vec<&str> = entries.iter().map(|e| e.category.as_str()).collect();
        assert_eq!(categories[0], categories[1]);
        assert_ne!(categories[1], categories[2]);
        assert!(is_sorted(&entries, &collator));
    }

    #[test]
    fn detects_unsorted_input() {
        let collator = CategoryCollator::new("en").unwrap();
        let entries = vec![entry("10-Cats.jpg"), entry("2-Cats.jpg")];
        assert!(!is_sorted(&entries, &collator));
    }
}
