//! Repository coordinates of the gallery.

use art_core::ImageHost;
use serde::{Deserialize, Serialize};

fn default_owner() -> String {
    "storico1929-19-29".to_string()
}

fn default_name() -> String {
    "student-art-market".to_string()
}

fn default_branch() -> String {
    "main".to_string()
}

fn default_image_dir() -> String {
    "img".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RepoConfig {
    /// Repository owner (user or organization).
    #[serde(default = "default_owner")]
    pub owner: String,

    /// Repository name.
    #[serde(default = "default_name")]
    pub name: String,

    /// Branch the images are listed and served from.
    #[serde(default = "default_branch")]
    pub branch: String,

    /// Directory holding the images, relative to the repository root.
    #[serde(default = "default_image_dir")]
    pub image_dir: String,

    /// How image URLs are built.
    #[serde(default)]
    pub image_host: ImageHost,
}

impl Default for RepoConfig {
    fn default() -> Self {
        Self {
            owner: default_owner(),
            name: default_name(),
            branch: default_branch(),
            image_dir: default_image_dir(),
            image_host: ImageHost::default(),
        }
    }
}
