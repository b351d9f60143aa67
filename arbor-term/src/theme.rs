//! Theme definitions.
//!
//! A [`ThemeDefinition`] carries the four styles a widget switches between
//! (normal, active, prelight, selected) plus loosely typed properties looked
//! up by key. Widgets define their own keys and always supply a default, so a
//! theme only needs to mention what it overrides.

use std::collections::HashMap;

use serde::Deserialize;

use crate::types::{Color, Style, TextStyle};

#[derive(Debug, Clone, PartialEq)]
pub struct ThemeDefinition {
    normal: Style,
    active: Style,
    prelight: Style,
    selected: Style,
    characters: HashMap<String, char>,
    booleans: HashMap<String, bool>,
    integers: HashMap<String, i32>,
}

impl ThemeDefinition {
    pub fn new(normal: Style, active: Style, prelight: Style, selected: Style) -> Self {
        Self {
            normal,
            active,
            prelight,
            selected,
            characters: HashMap::new(),
            booleans: HashMap::new(),
            integers: HashMap::new(),
        }
    }

    /// Light text on a dark background, with an inverted highlight for
    /// the active element.
    pub fn dark() -> Self {
        let background = Color::oklch(0.18, 0.0, 0.0);
        let foreground = Color::oklch(0.92, 0.0, 0.0);
        let accent = Color::oklch(0.75, 0.12, 230.0);

        Self::new(
            Style::new(foreground, background),
            Style::new(background, accent),
            Style::new(accent, background).bold(),
            Style::new(accent, background).text_style(TextStyle::new().bold().underline()),
        )
    }

    pub fn normal(&self) -> Style {
        self.normal
    }

    pub fn active(&self) -> Style {
        self.active
    }

    pub fn prelight(&self) -> Style {
        self.prelight
    }

    pub fn selected(&self) -> Style {
        self.selected
    }

    pub fn set_normal(&mut self, style: Style) {
        self.normal = style;
    }

    pub fn set_active(&mut self, style: Style) {
        self.active = style;
    }

    /// Character property, or `default` if the theme doesn't define `key`.
    pub fn character(&self, key: &str, default: char) -> char {
        self.characters.get(key).copied().unwrap_or(default)
    }

    pub fn boolean(&self, key: &str, default: bool) -> bool {
        self.booleans.get(key).copied().unwrap_or(default)
    }

    pub fn integer(&self, key: &str, default: i32) -> i32 {
        self.integers.get(key).copied().unwrap_or(default)
    }

    pub fn set_character(&mut self, key: impl Into<String>, value: char) {
        self.characters.insert(key.into(), value);
    }

    pub fn set_boolean(&mut self, key: impl Into<String>, value: bool) {
        self.booleans.insert(key.into(), value);
    }

    pub fn set_integer(&mut self, key: impl Into<String>, value: i32) {
        self.integers.insert(key.into(), value);
    }

    pub fn with_character(mut self, key: impl Into<String>, value: char) -> Self {
        self.set_character(key, value);
        self
    }

    pub fn with_boolean(mut self, key: impl Into<String>, value: bool) -> Self {
        self.set_boolean(key, value);
        self
    }

    pub fn with_integer(mut self, key: impl Into<String>, value: i32) -> Self {
        self.set_integer(key, value);
        self
    }

    /// Copy every property in `overrides` onto this theme.
    pub fn apply(&mut self, overrides: &ThemeOverrides) {
        for (key, value) in &overrides.characters {
            self.set_character(key.clone(), *value);
        }
        for (key, value) in &overrides.booleans {
            self.set_boolean(key.clone(), *value);
        }
        for (key, value) in &overrides.integers {
            self.set_integer(key.clone(), *value);
        }
    }
}

impl Default for ThemeDefinition {
    fn default() -> Self {
        Self::dark()
    }
}

/// Keyed property overrides, typically read from a config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeOverrides {
    pub characters: HashMap<String, char>,
    pub booleans: HashMap<String, bool>,
    pub integers: HashMap<String, i32>,
}

impl ThemeOverrides {
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty() && self.booleans.is_empty() && self.integers.is_empty()
    }
}
