//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use art_config::GalleryConfig;
use art_core::ImageHost;
use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;

#[test]
fn loads_repo_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[repo]
owner = "octo"
name = "gallery"
branch = "gh-pages"
image_dir = "art/2024"
image_host = "pages"
"#,
        )?;

        let config: GalleryConfig = Figment::from(Serialized::defaults(GalleryConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.repo.owner, "octo");
        assert_eq!(config.repo.name, "gallery");
        assert_eq!(config.repo.branch, "gh-pages");
        assert_eq!(config.repo.image_dir, "art/2024");
        assert_eq!(config.repo.image_host, ImageHost::Pages);
        Ok(())
    });
}

#[test]
fn partial_form_override_keeps_other_lines() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[reservations]
prefix = "Reservation:"
page_size = 50

[reservations.form]
intro = "I would like to reserve:"
"#,
        )?;

        let config: GalleryConfig = Figment::from(Serialized::defaults(GalleryConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.reservations.prefix, "Reservation:");
        assert_eq!(config.reservations.page_size, 50);
        assert_eq!(config.reservations.form.intro, "I would like to reserve:");
        assert_eq!(config.reservations.form.name_field, "ПІБ:");
        Ok(())
    });
}

#[test]
fn loads_display_strings_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[display]
locale = "en-US"
free_label = "Available"
reserved_label = "Reserved"
"#,
        )?;

        let config: GalleryConfig = Figment::from(Serialized::defaults(GalleryConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.display.locale, "en-US");
        assert_eq!(config.display.free_label, "Available");
        assert_eq!(config.display.reserved_label, "Reserved");
        assert_eq!(config.display.reserve_action, "Забронювати");
        Ok(())
    });
}

#[test]
fn env_var_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.set_env("ARTM_REPO__OWNER", "from-env");

        jail.create_file(
            "config.toml",
            r#"
[repo]
owner = "from-toml"
branch = "dev"
"#,
        )?;

        let config: GalleryConfig = Figment::from(Serialized::defaults(GalleryConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("ARTM_").split("__"))
            .extract()?;

        assert_eq!(config.repo.owner, "from-env");
        assert_eq!(config.repo.branch, "dev");
        Ok(())
    });
}

#[test]
fn project_local_config_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".artm")?;
        jail.create_file(
            ".artm/config.toml",
            r#"
[http]
api_base = "http://127.0.0.1:9999"
timeout_secs = 5
"#,
        )?;

        let config = GalleryConfig::load(None).expect("config loads");
        assert_eq!(config.http.api_base, "http://127.0.0.1:9999");
        assert_eq!(config.http.timeout_secs, 5);
        Ok(())
    });
}

#[test]
fn explicit_file_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".artm")?;
        jail.create_file(".artm/config.toml", "[repo]\nname = \"local\"\n")?;
        jail.create_file("custom.toml", "[repo]\nname = \"explicit\"\n")?;

        let config = GalleryConfig::load(Some(std::path::Path::new("custom.toml")))
            .expect("config loads");
        assert_eq!(config.repo.name, "explicit");
        Ok(())
    });
}

#[test]
fn missing_explicit_file_is_an_error() {
    Jail::expect_with(|_jail| {
        let result = GalleryConfig::load(Some(std::path::Path::new("nope.toml")));
        assert!(result.is_err());
        Ok(())
    });
}

#[test]
fn invalid_value_from_env_fails_validation() {
    Jail::expect_with(|jail| {
        jail.set_env("ARTM_DISPLAY__LOCALE", "not a locale!");
        let result = GalleryConfig::load(None);
        assert!(result.is_err());
        Ok(())
    });
}
