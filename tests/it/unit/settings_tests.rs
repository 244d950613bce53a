//! Settings load/save tests.

use data_playground::settings::{Settings, StorageBackend, StorageSettings};
use std::fs;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::load_from(&dir.path().join("absent.json"));
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.chart.width, 800.0);
    assert_eq!(settings.chart.height, 500.0);
    assert_eq!(settings.log_filter, "info");
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{"storage": {"backend": "file"}, "chart": {"width": 1024}}"#).unwrap();

    let settings = Settings::load_from(&path);
    assert_eq!(settings.storage.backend, StorageBackend::File);
    assert_eq!(settings.storage.quota_bytes, StorageSettings::default().quota_bytes);
    assert_eq!(settings.chart.width, 1024.0);
    assert_eq!(settings.chart.height, 500.0);
}

#[test]
fn test_malformed_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "not json").unwrap();
    assert_eq!(Settings::load_from(&path), Settings::default());
}

#[test]
fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    let mut settings = Settings::default();
    settings.log_filter = "debug".to_string();
    settings.storage.dir = Some(dir.path().join("session"));
    settings.save_to(&path).unwrap();

    assert_eq!(Settings::load_from(&path), settings);
}

#[test]
fn test_file_backend_opens_configured_dir() {
    let dir = tempfile::tempdir().unwrap();
    let storage = StorageSettings {
        backend: StorageBackend::File,
        dir: Some(dir.path().join("s")),
        ..Default::default()
    };
    let persistence = storage.open("ignored");
    assert!(persistence.save(&Default::default()));
    assert!(dir.path().join("s").join("dataPlayground.json").exists());
}
