// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Dark/light theme, persisted under the `theme` storage key.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::effects::{DomEffect, Target};

pub const THEME_STORAGE_KEY: &str = "theme";
pub const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Anything other than `light` is treated as `dark`
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key/value persistence for user preferences
pub trait ThemeStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str);
}

/// In-process store
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.save(key, value);
        store
    }
}

impl ThemeStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Theme applied to the root element
#[derive(Debug, Default)]
pub struct ThemeState {
    current: Theme,
}

impl ThemeState {
    /// Read the stored theme and apply it
    pub fn init(store: &dyn ThemeStore) -> (Self, DomEffect) {
        let current = Theme::from_stored(store.load(THEME_STORAGE_KEY).as_deref());
        (Self { current }, apply(current))
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip, persist and apply
    pub fn toggle(&mut self, store: &mut dyn ThemeStore) -> DomEffect {
        self.current = self.current.toggled();
        store.save(THEME_STORAGE_KEY, self.current.as_str());
        apply(self.current)
    }
}

fn apply(theme: Theme) -> DomEffect {
    DomEffect::SetAttribute {
        target: Target::Root,
        name: THEME_ATTRIBUTE,
        value: theme.as_str().to_string(),
    }
}
