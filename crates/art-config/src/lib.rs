//! # art-config
//!
//! Layered configuration loading for the gallery using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ARTM_*` prefix, `__` as separator)
//! 2. An explicit `--config` file, when given
//! 3. Project-level `.artm/config.toml`
//! 4. User-level `~/.config/artm/config.toml`
//! 5. Built-in defaults (the deployed gallery)
//!
//! # Environment Variable Mapping
//!
//! Figment maps `ARTM_REPO__OWNER` -> `repo.owner`,
//! `ARTM_RESERVATIONS__PREFIX` -> `reservations.prefix`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use art_config::GalleryConfig;
//!
//! let config = GalleryConfig::load_with_dotenv(None).expect("config");
//! println!("{}/{}@{}", config.repo.owner, config.repo.name, config.repo.branch);
//! ```

mod display;
mod error;
mod http;
mod repo;
mod reservations;

pub use display::DisplayConfig;
pub use error::ConfigError;
pub use http::HttpConfig;
pub use repo::RepoConfig;
pub use reservations::{MAX_PAGE_SIZE, ReservationsConfig};

use art_core::LinkBuilder;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GalleryConfig {
    #[serde(default)]
    pub repo: RepoConfig,
    #[serde(default)]
    pub reservations: ReservationsConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

impl GalleryConfig {
    /// Load configuration from all sources and validate it.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or a value is invalid.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(explicit).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or a value is invalid.
    pub fn load_with_dotenv(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load(explicit)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or add providers on top.
    #[must_use]
    pub fn figment(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".artm/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Explicit file; missing is an error, not a silent skip
        if let Some(path) = explicit {
            figment = figment.merge(Toml::file_exact(path));
        }

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed("ARTM_").split("__"))
    }

    /// Reject values the loaders cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("repo.owner", &self.repo.owner),
            ("repo.name", &self.repo.name),
            ("repo.branch", &self.repo.branch),
            ("reservations.prefix", &self.reservations.prefix),
            ("http.api_base", &self.http.api_base),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        }

        art_core::collation::parse_locale(&self.display.locale).map_err(|e| {
            ConfigError::InvalidValue {
                field: "display.locale".to_string(),
                reason: e.to_string(),
            }
        })?;

        Ok(())
    }

    /// URL builder for this repository.
    #[must_use]
    pub fn link_builder(&self) -> LinkBuilder {
        LinkBuilder {
            owner: self.repo.owner.clone(),
            repo: self.repo.name.clone(),
            branch: self.repo.branch.clone(),
            prefix: self.reservations.prefix.trim().to_string(),
            host: self.repo.image_host,
            form: self.reservations.form.clone(),
        }
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("artm").join("config.toml"))
    }
}
