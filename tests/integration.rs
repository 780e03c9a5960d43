// SPDX-License-Identifier: MPL-2.0
use bant_media::app::config::{self, Config, GeneralConfig, DEFAULT_API_BASE_URL};
use bant_media::i18n::fluent::I18n;
use bant_media::ui::gallery::{self, display_order};
use std::fs;
use tempfile::tempdir;

fn urls(names: &[&str]) -> Vec<String> {
    names
        .iter()
        .map(|name| format!("https://multi-media-server.naimurrhman.com/uploads/{name}"))
        .collect()
}

#[test]
fn default_settings_are_written_once() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let created = config::write_defaults_if_missing(Some(dir.path().to_path_buf()))
        .expect("Failed to write defaults");
    assert!(created);
    assert!(dir.path().join("settings.toml").exists());

    let again = config::write_defaults_if_missing(Some(dir.path().to_path_buf()))
        .expect("Second call should succeed");
    assert!(!again);

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert_eq!(loaded.api.base_url, DEFAULT_API_BASE_URL);
    assert!(warning.is_none());
}

#[test]
fn corrupt_settings_fall_back_to_defaults_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "[api\nbase_url = ")
        .expect("Failed to write corrupt settings");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}

#[test]
fn api_origin_is_read_from_settings_and_overridden_by_cli() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(
        dir.path().join("settings.toml"),
        "[api]\nbase_url = \"https://media.example.com\"\ntimeout_secs = 15\n",
    )
    .expect("Failed to write settings");

    let (mut loaded, _) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded.api.base_url, "https://media.example.com");
    assert_eq!(loaded.api.timeout_secs, Some(15));

    loaded.apply_api_url_override(Some("http://127.0.0.1:8080".to_string()));
    assert_eq!(loaded.api.base_url, "http://127.0.0.1:8080");
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let french = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&french, &path).expect("Failed to write french config");

    let loaded = config::load_from_path(&path).expect("Failed to load french config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("copy-feedback"), "URL copiée !");

    let english = I18n::new(Some("en-US".to_string()), &loaded);
    assert_eq!(english.tr("gallery-title"), "Your Gallery");
}

#[test]
fn image_count_badge_is_pluralized() {
    let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
    assert_eq!(
        i18n.tr_with_args("gallery-image-count", &[("count", "1")]),
        "1 image"
    );
    assert_eq!(
        i18n.tr_with_args("gallery-image-count", &[("count", "12")]),
        "12 images"
    );
}

#[test]
fn gallery_renders_in_descending_lexical_order() {
    let images = urls(&["a.png", "c.png", "b.png"]);
    let ordered = display_order(&images);
    assert_eq!(ordered, vec![&*images[1], &*images[2], &*images[0]]);
}

#[test]
fn uploaded_url_is_placed_by_sort_without_refetch() {
    let mut state = gallery::State::new(urls(&["a.png", "c.png", "b.png"]), &Config::default().gallery);
    state.append(urls(&["d.png"]).remove(0));

    let names: Vec<&str> = state
        .display_order()
        .into_iter()
        .filter_map(|url| url.rsplit('/').next())
        .collect();
    assert_eq!(names, vec!["d.png", "c.png", "b.png", "a.png"]);
    assert!(!state.is_loading());
}
