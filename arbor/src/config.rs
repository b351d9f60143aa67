//! Tree view configuration.
//!
//! A [`TreeConfig`] is read from JSON. Every field is optional; missing
//! fields fall back to the defaults below. Theme properties in the `theme`
//! block are layered over a base [`ThemeDefinition`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use arbor_term::{ThemeDefinition, ThemeOverrides};
use log::{debug, info};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::error::TreeError;
use crate::node::{NodeId, TreeModel};
use crate::widgets::tree::{TreeRenderer, TreeView};

/// Config error type.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    pub columns: usize,
    pub window_height: usize,
    pub overflow_circle: bool,
    pub display_root: bool,
    pub theme: ThemeOverrides,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            columns: 35,
            window_height: 15,
            overflow_circle: false,
            display_root: true,
            theme: ThemeOverrides::default(),
        }
    }
}

impl TreeConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config = read_json(path)?;
        info!("Loaded tree config from {}", path.display());
        Ok(config)
    }

    /// Like [`load`](Self::load), but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        read_json_or_default(path)
    }

    /// `base` with this config's theme properties applied on top.
    pub fn theme(&self, mut base: ThemeDefinition) -> ThemeDefinition {
        base.apply(&self.theme);
        base
    }

    /// Build a renderer from the themed properties.
    pub fn renderer(&self, base: ThemeDefinition) -> Result<TreeRenderer, TreeError> {
        TreeRenderer::from_theme(&self.theme(base))
    }

    /// Build a view with this config's dimensions and behaviour flags.
    pub fn build_view<V>(&self, model: TreeModel<V>, root: NodeId) -> Result<TreeView<V>, TreeError> {
        let mut view = TreeView::new(model, root, self.columns, self.window_height)?;
        view.set_overflow_circle(self.overflow_circle);
        if !self.display_root {
            view.set_display_root(false);
        }
        Ok(view)
    }
}

/// Deserialize a JSON file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&json)?)
}

/// Like [`read_json`], but a missing file yields `T::default()`.
pub fn read_json_or_default<T: DeserializeOwned + Default>(path: &Path) -> Result<T, ConfigError> {
    if !path.exists() {
        debug!("No config at {}, using defaults", path.display());
        return Ok(T::default());
    }
    read_json(path)
}
