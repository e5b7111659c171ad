//! Display surface seam.
//!
//! The renderer never touches a concrete output. It writes a status line and
//! replaces the gallery container through this trait, so a page, a terminal or
//! a test double can stand behind it.

use crate::view::GalleryNode;

/// The two handles the gallery writes to.
pub trait DisplaySurface {
    /// Replace the status line.
    fn set_status(&mut self, text: &str);

    /// Replace the whole gallery container with `nodes`.
    fn replace_gallery(&mut self, nodes: Vec<GalleryNode>);
}

/// In-memory surface that records what was written.
#[derive(Debug, Default, Clone)]
pub struct MemorySurface {
    /// Every status line set, oldest first.
    pub statuses: Vec<String>,
    pub gallery: Vec<GalleryNode>,
    /// How many times the gallery was replaced.
    pub renders: usize,
}

impl MemorySurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current status line.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.statuses.last().map(String::as_str)
    }
}

impl DisplaySurface for MemorySurface {
    fn set_status(&mut self, text: &str) {
        self.statuses.push(text.to_string());
    }

    fn replace_gallery(&mut self, nodes: Vec<GalleryNode>) {
        self.gallery = nodes;
        self.renders += 1;
    }
}
