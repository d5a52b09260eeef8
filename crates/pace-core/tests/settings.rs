use std::fs;

use pace_core::{
    pacing::Mode,
    profile::{EngineConfig, ProfileKind},
    settings::{Settings, SettingsError},
};

#[test]
fn settings_round_trip_through_toml() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("settings.toml");
    let settings = Settings {
        wpm: 420.0,
        mode: Mode::Vertical,
        profile: ProfileKind::Pixels,
        transition_delay_ms: 100.0,
    };
    settings.save_to(&path).expect("save");
    let loaded = Settings::load_from(&path).expect("load");
    assert_eq!(loaded, settings);
}

#[test]
fn missing_keys_fall_back_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.toml");
    fs::write(&path, "wpm = 350.0\n").expect("write");
    let loaded = Settings::load_from(&path).expect("load");
    assert_eq!(loaded.wpm, 350.0);
    assert_eq!(loaded.mode, Mode::Horizontal);
    assert_eq!(loaded.profile, ProfileKind::Terminal);
}

#[test]
fn legacy_scroll_mode_name_is_accepted() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.toml");
    fs::write(&path, "mode = \"scroll\"\n").expect("write");
    let loaded = Settings::load_from(&path).expect("load");
    assert_eq!(loaded.mode, Mode::Horizontal);
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.toml");
    fs::write(&path, "wpm = \"fast\"\n").expect("write");
    let err = Settings::load_from(&path).expect_err("should fail");
    assert!(matches!(err, SettingsError::Parse(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = Settings::load_from(&dir.path().join("absent.toml")).expect_err("should fail");
    assert!(matches!(err, SettingsError::Io(_)));
}

#[test]
fn engine_config_follows_profile_and_delay() {
    let settings = Settings {
        profile: ProfileKind::Pixels,
        transition_delay_ms: 100.0,
        ..Settings::default()
    };
    let config = settings.engine_config();
    assert_eq!(config.horizontal, EngineConfig::pixels().horizontal);
    assert_eq!(config.transition_delay_ms, 100.0);
}
