use pocketbudget_config::{Config, ConfigManager};
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn default_config_enables_color_and_derives_a_data_root() {
    let cfg = Config::default();

    assert!(cfg.ui_color_enabled);
    assert!(cfg.data_root.is_none());
    assert!(cfg.resolve_data_root().ends_with("pocketbudget"));
}

#[test]
fn explicit_data_root_wins_over_the_derived_one() {
    let cfg = Config {
        data_root: Some(PathBuf::from("/tmp/elsewhere")),
        ..Config::default()
    };
    assert_eq!(cfg.resolve_data_root(), PathBuf::from("/tmp/elsewhere"));
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let cfg = Config {
        ui_color_enabled: false,
        data_root: Some(dir.path().join("data")),
    };

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert!(!loaded.ui_color_enabled);
    assert_eq!(loaded.data_root, Some(dir.path().join("data")));
}

#[test]
fn missing_config_file_yields_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let loaded = manager.load().expect("load config");
    assert!(loaded.ui_color_enabled);
}
