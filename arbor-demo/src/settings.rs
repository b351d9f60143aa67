//! Demo settings: one [`TreeConfig`] per pane.

use std::collections::HashMap;
use std::path::Path;

use arbor::widgets::tree::{
    DISPLAY_BLOCK, DISPLAY_BLOCK_FILLER, DISPLAY_BRACKETS, LEAF_MARKER, TREE_LEVEL_INDENT,
};
use arbor::config::read_json_or_default;
use arbor::{ConfigError, TreeConfig};
use arbor_term::ThemeOverrides;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub bracket: TreeConfig,
    pub block: TreeConfig,
}

impl Default for Settings {
    fn default() -> Self {
        let bracket = TreeConfig {
            overflow_circle: true,
            display_root: false,
            ..TreeConfig::default()
        };

        let block = TreeConfig {
            theme: ThemeOverrides {
                characters: HashMap::from([
                    (LEAF_MARKER.to_string(), '*'),
                    (DISPLAY_BLOCK_FILLER.to_string(), '.'),
                ]),
                booleans: HashMap::from([
                    (DISPLAY_BRACKETS.to_string(), false),
                    (DISPLAY_BLOCK.to_string(), true),
                ]),
                integers: HashMap::from([(TREE_LEVEL_INDENT.to_string(), 2)]),
            },
            ..TreeConfig::default()
        };

        Self { bracket, block }
    }
}

impl Settings {
    /// Read settings from `path`, or use the defaults when there is no file.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => read_json_or_default(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_two_panes() {
        let settings = Settings::default();
        assert!(!settings.bracket.display_root);
        assert!(settings.bracket.overflow_circle);
        assert_eq!(settings.block.theme.integers.get(TREE_LEVEL_INDENT), Some(&2));
        assert_eq!(settings.block.theme.characters.get(LEAF_MARKER), Some(&'*'));
    }

    #[test]
    fn missing_file_uses_defaults() {
        let settings = Settings::load_or_default(Some(Path::new("/nonexistent/tree.json"))).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(Settings::load_or_default(None).unwrap(), Settings::default());
    }

    #[test]
    fn file_is_read_through_the_config_loader() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tree.json");
        std::fs::write(&path, r#"{ "bracket": { "window_height": 6 } }"#).unwrap();

        let settings = Settings::load_or_default(Some(&path)).unwrap();
        assert_eq!(settings.bracket.window_height, 6);
        assert_eq!(settings.block, Settings::default().block);

        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            Settings::load_or_default(Some(&path)),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn partial_json_overrides_one_pane() {
        let settings: Settings = serde_json::from_str(r#"{ "block": { "columns": 50 } }"#).unwrap();
        assert_eq!(settings.block.columns, 50);
        assert_eq!(settings.bracket, Settings::default().bracket);
    }
}
