// SPDX-License-Identifier: MPL-2.0
use iced_slideshow::app::App;
use iced_slideshow::config::{self, Config, GeneralConfig};
use iced_slideshow::i18n::fluent::I18n;
use iced_slideshow::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            theme_mode: ThemeMode::System,
        },
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("slideshow-play-button"), "Play");

    // 2. Change config to ja
    let japanese_config = Config {
        general: GeneralConfig {
            language: Some("ja".to_string()),
            theme_mode: ThemeMode::System,
        },
    };
    config::save_to_path(&japanese_config, &temp_config_file_path)
        .expect("Failed to write japanese config file");

    let loaded_japanese_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load japanese config from path");
    let i18n_ja = I18n::new(None, &loaded_japanese_config);
    assert_eq!(i18n_ja.current_locale().to_string(), "ja");
    assert_eq!(i18n_ja.tr("slideshow-play-button"), "再生");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_cli_language_overrides_config() {
    let config = Config {
        general: GeneralConfig {
            language: Some("ja".to_string()),
            theme_mode: ThemeMode::Dark,
        },
    };
    let app = App::with_config(Some("en-US".to_string()), &config);
    assert_eq!(app.i18n.current_locale().to_string(), "en-US");
    assert_eq!(app.title(), "grape.png - IcedSlideshow");
}

#[test]
fn test_unreadable_config_falls_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[general\nlanguage = ")
        .expect("Failed to write broken config file");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert!(warning.is_some());
}
