//! Color theme selection and persistence
//!
//! The calculator offers three themes. The choice is stored under a single
//! preference key, read once at startup and written on every change. With
//! nothing stored, the system's dark/light signal picks the starting theme.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{PrefsError, PrefsResult};
use crate::prefs::PreferenceStore;

/// Preference key holding the theme identifier
pub const THEME_KEY: &str = "theme";

/// One of the three color themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Theme {
    /// Theme 1 (light default)
    #[default]
    #[serde(rename = "theme-1")]
    One,
    /// Theme 2
    #[serde(rename = "theme-2")]
    Two,
    /// Theme 3 (dark default)
    #[serde(rename = "theme-3")]
    Three,
}

impl Theme {
    /// All themes in toggle order
    pub const ALL: [Self; 3] = [Self::One, Self::Two, Self::Three];

    /// Returns the zero-based position of this theme
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
            Self::Three => 2,
        }
    }

    /// Returns the theme at `index`, wrapping around
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Returns the stored identifier (`theme-1`, `theme-2`, `theme-3`)
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::One => "theme-1",
            Self::Two => "theme-2",
            Self::Three => "theme-3",
        }
    }

    /// Returns the next theme in toggle order
    #[must_use]
    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Theme used when nothing is stored
    #[must_use]
    pub const fn system_default(prefers_dark: bool) -> Self {
        if prefers_dark {
            Self::Three
        } else {
            Self::One
        }
    }
}

impl FromStr for Theme {
    type Err = PrefsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.id() == s)
            .ok_or_else(|| PrefsError::UnknownTheme(s.to_string()))
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Reads the starting theme from `store`
///
/// A stored valid identifier wins. A missing or unknown value, or a store
/// that fails to read, falls back to the system signal.
pub fn load_theme<S: PreferenceStore + ?Sized>(store: &S, prefers_dark: bool) -> Theme {
    match store.get(THEME_KEY) {
        Ok(Some(value)) => match value.parse::<Theme>() {
            Ok(theme) => {
                info!(theme = %theme, "loaded stored theme");
                return theme;
            }
            Err(err) => warn!(%err, "ignoring stored theme"),
        },
        Ok(None) => {}
        Err(err) => warn!(%err, "could not read theme preference"),
    }
    let theme = Theme::system_default(prefers_dark);
    info!(theme = %theme, prefers_dark, "using system theme");
    theme
}

/// Writes `theme` to `store`
pub fn save_theme<S: PreferenceStore + ?Sized>(store: &mut S, theme: Theme) -> PrefsResult<()> {
    store.set(THEME_KEY, theme.id())
}

/// Interprets the `COLORFGBG` convention (`"fg;bg"`) used by many terminals
///
/// Background colors 0-6 and 8 are the dark half of the 16-color palette.
/// Returns `None` when the value is absent or unparseable.
#[must_use]
pub fn prefers_dark_from_colorfgbg(value: Option<&str>) -> Option<bool> {
    let bg = value?.rsplit(';').next()?.trim().parse::<u8>().ok()?;
    Some(matches!(bg, 0..=6 | 8))
}
