//! Integration tests for loading and saving window options.

use par_window_config::{CommandId, ConfigError, LogLevel, MenuItem, MenuModel, SizeLimit, WindowOptions};
use tempfile::tempdir;

#[test]
fn save_then_load_preserves_options() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("window.yaml");

    let mut options = WindowOptions::default()
        .with_title("Editor")
        .with_size(1024, 768)
        .with_auto_hide_menu_bar(true)
        .with_menu(
            MenuModel::new().with_item(MenuItem::command(CommandId(42), "Save").with_accelerator("Ctrl+S")),
        );
    options.min_size = SizeLimit::new(200, 200);

    options.save_to(&path).unwrap();
    let loaded = WindowOptions::load_from(&path).unwrap();

    assert_eq!(loaded, options);
    assert!(!path.with_extension("yaml.tmp").exists());
}

#[test]
fn partial_yaml_fills_defaults() {
    let yaml = r#"
title: Partial
auto_hide_menu_bar: true
log_level: debug
menu:
  items:
    - type: submenu
      label: File
      submenu:
        items:
          - type: command
            id: 7
            label: Quit
            accelerator: CmdOrCtrl+Q
"#;
    let options = WindowOptions::from_yaml(yaml).unwrap();
    assert_eq!(options.title, "Partial");
    assert_eq!(options.width, 800);
    assert!(options.auto_hide_menu_bar);
    assert_eq!(options.log_level, LogLevel::Debug);

    let menu = options.menu.unwrap();
    let quit = menu.find(CommandId(7)).unwrap();
    assert_eq!(quit.accelerator.as_deref(), Some("CmdOrCtrl+Q"));
}

#[test]
fn invalid_limits_are_a_validation_error() {
    let yaml = r#"
min_size: { width: 300, height: 300 }
max_size: { width: 100, height: 100 }
"#;
    let err = WindowOptions::from_yaml(yaml).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::Validation(_))
    ));
}

#[test]
fn malformed_yaml_is_a_parse_error() {
    let err = WindowOptions::from_yaml("width: [not a number").unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::Parse(_))
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    let err = WindowOptions::load_from(&dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::Io(_))
    ));
}
