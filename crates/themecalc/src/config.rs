//! Application configuration

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::prefs::FileStore;
use crate::theme::{prefers_dark_from_colorfgbg, Theme};

/// Directory name under the user config directory
pub const APP_DIR: &str = "themecalc";

/// Color scheme hint used when no theme is stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Ask the terminal (`COLORFGBG`)
    #[default]
    Auto,
    /// Treat the system as dark
    Dark,
    /// Treat the system as light
    Light,
}

impl ColorScheme {
    /// Resolves the hint to a dark/light answer
    ///
    /// `colorfgbg` is the raw environment value; `Auto` without a usable
    /// value counts as light.
    #[must_use]
    pub fn prefers_dark(self, colorfgbg: Option<&str>) -> bool {
        match self {
            Self::Dark => true,
            Self::Light => false,
            Self::Auto => prefers_dark_from_colorfgbg(colorfgbg).unwrap_or(false),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Preference file; defaults to `<config_dir>/themecalc/prefs.json`
    pub prefs_path: Option<PathBuf>,
    /// Theme to start with, overriding the stored preference
    pub theme: Option<Theme>,
    /// Dark/light hint for the first run
    pub color_scheme: ColorScheme,
    /// Log filter used when `RUST_LOG` is unset
    pub log_level: String,
    /// Log destination; stderr when unset
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            prefs_path: None,
            theme: None,
            color_scheme: ColorScheme::Auto,
            log_level: "warn".to_string(),
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        serde_json::from_str(&contents)
            .map_err(|e| AppError::config(format!("invalid config {}: {e}", path.display())))
    }

    /// Set preference file path
    #[must_use]
    pub fn with_prefs_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.prefs_path = Some(path.into());
        self
    }

    /// Set the starting theme
    #[must_use]
    pub const fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Set the color scheme hint
    #[must_use]
    pub const fn with_color_scheme(mut self, scheme: ColorScheme) -> Self {
        self.color_scheme = scheme;
        self
    }

    /// Set the log filter
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Set the log file
    #[must_use]
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Returns the preference file path, falling back to the user config directory
    pub fn resolved_prefs_path(&self) -> AppResult<PathBuf> {
        if let Some(path) = &self.prefs_path {
            return Ok(path.clone());
        }
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join(FileStore::FILE_NAME))
            .ok_or_else(|| AppError::config("no user config directory; pass --prefs"))
    }

    /// Opens the file-backed preference store
    pub fn prefs_store(&self) -> AppResult<FileStore> {
        Ok(FileStore::new(self.resolved_prefs_path()?))
    }
}
