use spacekit_settings::{Config, SettingsError, SettingsPersistence, StartupView};
use tempfile::TempDir;

#[test]
fn test_toml_and_json_round_trip() {
    let dir = TempDir::new().unwrap();
    let mut config = Config::default();
    config.editor.max_history = Some(50);
    config.editor.rotation_step = 0.5;
    config.view.mode = StartupView::Plan;
    config.assistant.token_budget = 10_000;

    for name in ["config.toml", "config.json"] {
        let path = dir.path().join(name);
        config.save_to_file(&path).unwrap();
        assert_eq!(Config::load_from_file(&path).unwrap(), config);
    }
}

#[test]
fn test_unknown_extension_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    let err = Config::default().save_to_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::UnsupportedFormat(ext) if ext == "yaml"));
}

#[test]
fn test_invalid_file_is_rejected_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[editor]\nhit_tolerance = -1.0\n").unwrap();
    let err = Config::load_from_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::InvalidSetting { ref key, .. } if key == "editor.hit_tolerance"));
}

#[test]
fn test_load_or_default_and_save_creates_directory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("spacekit").join("config.toml");

    let mut persistence = SettingsPersistence::load_or_default(&path).unwrap();
    assert_eq!(persistence.config(), &Config::default());

    persistence.config_mut().editor.snap_to_grid = false;
    persistence.save().unwrap();
    assert!(path.exists());

    let reloaded = SettingsPersistence::load_or_default(&path).unwrap();
    assert!(!reloaded.config().editor.snap_to_grid);
    assert_eq!(reloaded.path(), path.as_path());
}
