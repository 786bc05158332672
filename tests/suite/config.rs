//! Configuration loading and its effect on the application state.

use std::fs;

use stadia_engine::{App, ConfigError, DEFAULT_HISTORY_WINDOW, StadiaConfig};
use stadia_types::Operator;
use tempfile::tempdir;

fn write_config(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("write config");
    (dir, path)
}

#[test]
fn missing_file_is_not_an_error() {
    let dir = tempdir().expect("temp dir");
    let loaded = StadiaConfig::load_from(&dir.path().join("absent.toml")).unwrap();
    assert!(loaded.is_none());
}

#[test]
fn app_section_is_parsed() {
    let (_dir, path) = write_config(
        r#"
[app]
history_window = 6
high_contrast = true
"#,
    );
    let config = StadiaConfig::load_from(&path).unwrap().unwrap();
    assert_eq!(config.history_window(), 6);
    assert!(config.ui_options().high_contrast);
    assert!(!config.ui_options().ascii_only);
}

#[test]
fn defaults_apply_without_an_app_section() {
    let (_dir, path) = write_config("");
    let config = StadiaConfig::load_from(&path).unwrap().unwrap();
    assert_eq!(config.history_window(), DEFAULT_HISTORY_WINDOW);
    assert_eq!(config.resolve_presets().len(), 11);
}

#[test]
fn preset_table_replaces_the_builtin_constants() {
    let (_dir, path) = write_config(
        r#"
[[preset]]
label = "k1"
value = "0.0123"

[[preset]]
label = "k2"
value = "0.0456"
"#,
    );
    let config = StadiaConfig::load_from(&path).unwrap().unwrap();
    let presets = config.resolve_presets();
    assert_eq!(presets.len(), 2);
    assert_eq!(presets[0].label(), "k1");
    assert_eq!(presets[1].value().to_string(), "0.0456");
}

#[test]
fn malformed_preset_value_fails_the_load() {
    let (_dir, path) = write_config(
        r#"
[[preset]]
label = "bad"
value = "not-a-number"
"#,
    );
    let err = StadiaConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert_eq!(err.path(), &path);
}

#[test]
fn malformed_toml_fails_the_load() {
    let (_dir, path) = write_config("[app\nhistory_window = ");
    assert!(matches!(
        StadiaConfig::load_from(&path),
        Err(ConfigError::Parse { .. })
    ));
}

#[test]
fn app_honors_configured_window_and_presets() {
    let (_dir, path) = write_config(
        r#"
[app]
history_window = 2

[[preset]]
label = "k"
value = "0.5"
"#,
    );
    let config = StadiaConfig::load_from(&path).unwrap().unwrap();
    let mut app = App::new(Some(&config));

    for _ in 0..3 {
        app.press_digit(1);
        app.press_operator(Operator::Add);
        app.press_digit(1);
        app.press_equals();
    }
    assert_eq!(app.visible_history().len(), 2);

    app.press_selected_preset();
    assert_eq!(app.display(), "0.5");
}
