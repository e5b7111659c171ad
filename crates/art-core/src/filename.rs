//! Image filename convention.
//!
//! Gallery images are named `<number>-<category>.<ext>`, e.g. `57-Nadir.jpg`.
//! The number is a sort key and the category is the section heading the image
//! is grouped under. Names that do not follow the convention are still shown:
//! they get [`UNNUMBERED`] and [`FALLBACK_CATEGORY`].
//!
//! All parsing of this convention lives here so the parse/format pair can be
//! checked as a unit.

use std::fmt;

/// Sort key for names without a numeric prefix. Places them last in a category.
pub const UNNUMBERED: u64 = 999_999;

/// Category label for names that do not carry one.
pub const FALLBACK_CATEGORY: &str = "Інше";

/// Extensions accepted as gallery images (compared case-insensitively).
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif"];

/// Split `"<digits>-<rest>"` into the parsed number and `<rest>`.
///
/// Returns `None` when the name has no leading digits, the digits are not
/// followed by a hyphen, or the number does not fit in a `u64`.
fn split_number_prefix(name: &str) -> Option<(u64, &str)> {
    let digits = name.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let rest = name[digits..].strip_prefix('-')?;
    let number = name[..digits].parse::<u64>().ok()?;
    Some((number, rest))
}

/// Leading number of an image name, or [`UNNUMBERED`].
///
/// `"57-Nadir.jpg"` → `57`.
#[must_use]
pub fn parse_number(name: &str) -> u64 {
    split_number_prefix(name).map_or(UNNUMBERED, |(number, _)| number)
}

/// Category of an image name, or [`FALLBACK_CATEGORY`].
///
/// The category runs from after the `"<digits>-"` prefix up to the last dot:
/// `"57-Nadir.jpg"` → `"Nadir"`, `"3-Still.Life.png"` → `"Still.Life"`.
#[must_use]
pub fn parse_category(name: &str) -> String {
    split_number_prefix(name)
        .and_then(|(_, rest)| rest.rsplit_once('.'))
        .map(|(category, _)| category)
        .filter(|category| !category.is_empty())
        .map_or_else(|| FALLBACK_CATEGORY.to_string(), str::to_string)
}

/// Title shown under an image: the name without its extension.
///
/// Only a non-empty extension is stripped, so `"draft."` stays as is.
#[must_use]
pub fn display_title(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !ext.is_empty() => stem,
        _ => name,
    }
}

/// Whether `name` carries one of the [`IMAGE_EXTENSIONS`].
#[must_use]
pub fn is_image_file(name: &str) -> bool {
    name.rsplit_once('.').is_some_and(|(_, ext)| {
        IMAGE_EXTENSIONS
            .iter()
            .any(|allowed| ext.eq_ignore_ascii_case(allowed))
    })
}

/// A name that follows the convention exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageName {
    pub number: u64,
    pub category: String,
    pub extension: String,
}

impl ImageName {
    /// Strict parse: `None` unless all three parts are present.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        let (number, rest) = split_number_prefix(name)?;
        let (category, extension) = rest.rsplit_once('.')?;
        if category.is_empty() || extension.is_empty() {
            return None;
        }
        Some(Self {
            number,
            category: category.to_string(),
            extension: extension.to_string(),
        })
    }
}

impl fmt::Display for ImageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}.{}", self.number, self.category, self.extension)
    }
}
