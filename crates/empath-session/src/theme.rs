//! UI theme preference.
//!
//! The host document owns the rendered theme; this is the state holder
//! behind it, kept separate so the transition logic is testable without
//! a DOM.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// The current theme preference.
#[derive(Debug, Default)]
pub struct ThemeState {
    current: Theme,
}

impl ThemeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Adopts the theme the host document already renders, e.g. on
    /// first mount.
    pub fn sync_from_host(&mut self, dark: bool) {
        self.current = if dark { Theme::Dark } else { Theme::Light };
    }

    /// Flips the theme and returns the new value.
    pub fn toggle(&mut self) -> Theme {
        self.current = match self.current {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
        self.current
    }
}
