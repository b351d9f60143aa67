use std::io::Write;
use std::path::Path;

use arbor::node::TreeModel;
use arbor::widgets::tree::{LEAF_MARKER, TREE_LEVEL_INDENT};
use arbor::{ConfigError, TreeConfig};
use arbor_term::ThemeDefinition;

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_empty_object_gives_defaults() {
    let config = TreeConfig::from_json_str("{}").unwrap();
    assert_eq!(config, TreeConfig::default());
    assert_eq!(config.columns, 35);
    assert_eq!(config.window_height, 15);
    assert!(config.display_root);
    assert!(!config.overflow_circle);
    assert!(config.theme.is_empty());
}

#[test]
fn test_full_config() {
    let json = r#"{
        "columns": 40,
        "window_height": 8,
        "overflow_circle": true,
        "display_root": false,
        "theme": {
            "characters": { "LEAF_MARKER": "*" },
            "integers": { "TREE_LEVEL_INDENT": 2 },
            "booleans": { "DISPLAY_BRACKETS": false }
        }
    }"#;
    let config = TreeConfig::from_json_str(json).unwrap();

    assert_eq!(config.columns, 40);
    assert_eq!(config.window_height, 8);
    assert!(config.overflow_circle);
    assert!(!config.display_root);

    let theme = config.theme(ThemeDefinition::dark());
    assert_eq!(theme.character(LEAF_MARKER, '.'), '*');
    assert_eq!(theme.integer(TREE_LEVEL_INDENT, 1), 2);

    let renderer = config.renderer(ThemeDefinition::dark()).unwrap();
    assert_eq!(renderer.indent(), 2);
    assert!(!renderer.display_brackets());
}

#[test]
fn test_malformed_json_is_a_parse_error() {
    let err = TreeConfig::from_json_str("{ \"columns\": \"wide\" }").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

// ============================================================================
// Files
// ============================================================================

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "window_height": 3 }}"#).unwrap();

    let config = TreeConfig::load(file.path()).unwrap();
    assert_eq!(config.window_height, 3);
    assert_eq!(config.columns, 35);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tree.json");

    let err = TreeConfig::load(&path).unwrap_err();
    match err {
        ConfigError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected Io error, got {other:?}"),
    }

    assert_eq!(TreeConfig::load_or_default(&path).unwrap(), TreeConfig::default());
}

#[test]
fn test_io_error_message_names_the_file() {
    let err = TreeConfig::load(Path::new("/nonexistent/arbor/tree.json")).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/arbor/tree.json"));
}

// ============================================================================
// Building views
// ============================================================================

#[test]
fn test_build_view_applies_flags() {
    let mut model = TreeModel::new();
    let root = model.insert("root").unwrap();
    let first = model.add_child_value(root, "first", true).unwrap();

    let config = TreeConfig {
        columns: 30,
        window_height: 6,
        overflow_circle: true,
        display_root: false,
        ..Default::default()
    };
    let view = config.build_view(model, root).unwrap();

    assert_eq!(view.size(), (30, 6));
    assert!(view.is_overflow_circle());
    assert!(!view.is_display_root());
    assert_eq!(view.selected_node(), first);
}

#[test]
fn test_build_view_rejects_zero_height() {
    let mut model = TreeModel::new();
    let root = model.insert("root").unwrap();
    let config = TreeConfig {
        window_height: 0,
        ..Default::default()
    };
    assert!(config.build_view(model, root).is_err());
}
