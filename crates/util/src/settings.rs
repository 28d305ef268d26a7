//! Runtime settings for the jobdeck dashboard.
//!
//! Settings are layered, lowest precedence first:
//! 1. built-in defaults
//! 2. a JSON file (`~/.config/jobdeck/settings.json` on most platforms, or
//!    the path in `JOBDECK_CONFIG_PATH`)
//! 3. `JOBDECK_*` environment variables
//!
//! Command-line flags are applied on top by the binary. A missing file is not
//! an error; a malformed file is logged and ignored.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::path_processing::app_file_path;

/// Environment variable allowing callers to override the settings file path.
pub const SETTINGS_PATH_ENV: &str = "JOBDECK_CONFIG_PATH";
/// Default filename for the JSON payload.
pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const PAGE_SIZE_ENV: &str = "JOBDECK_PAGE_SIZE";
pub const API_BASE_ENV: &str = "JOBDECK_API_BASE";
pub const API_TOKEN_ENV: &str = "JOBDECK_API_TOKEN";
pub const API_DELAY_ENV: &str = "JOBDECK_API_DELAY_MS";

const DEFAULT_PAGE_SIZE: usize = 6;
const DEFAULT_API_DELAY_MS: u64 = 500;
const DEFAULT_COMPACT_WIDTH: u16 = 100;

/// Error surfaced when reading or validating settings fails.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// I/O failure other than a missing file.
    #[error("settings I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A value is out of range or could not be parsed.
    #[error("invalid setting `{field}`: {message}")]
    Invalid { field: &'static str, message: String },
}

/// Effective settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Jobs per feed page. Must be at least 1.
    pub page_size: usize,
    /// Base URL of a navigation backend. `None` selects the mock source.
    pub api_base: Option<String>,
    /// Bearer token sent to the navigation backend.
    #[serde(skip_serializing)]
    pub api_token: Option<String>,
    /// Latency of the mock source in milliseconds.
    pub api_delay_ms: u64,
    /// Terminal widths below this hide the sidebar behind the menu button.
    pub compact_width: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            api_base: None,
            api_token: None,
            api_delay_ms: DEFAULT_API_DELAY_MS,
            compact_width: DEFAULT_COMPACT_WIDTH,
        }
    }
}

impl Settings {
    /// Load from `path` (or the default location), then apply env overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(default_settings_path);
        let mut settings = load_file(&path)?;
        settings.apply_env()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Apply `JOBDECK_*` overrides from the process environment.
    pub fn apply_env(&mut self) -> Result<(), SettingsError> {
        if let Some(raw) = non_empty_env(PAGE_SIZE_ENV) {
            self.page_size = raw.parse().map_err(|_| SettingsError::Invalid {
                field: "page_size",
                message: format!("{PAGE_SIZE_ENV}='{raw}' is not a number"),
            })?;
        }
        if let Some(raw) = non_empty_env(API_DELAY_ENV) {
            self.api_delay_ms = raw.parse().map_err(|_| SettingsError::Invalid {
                field: "api_delay_ms",
                message: format!("{API_DELAY_ENV}='{raw}' is not a number"),
            })?;
        }
        if let Some(base) = non_empty_env(API_BASE_ENV) {
            self.api_base = Some(base);
        }
        if let Some(token) = non_empty_env(API_TOKEN_ENV) {
            self.api_token = Some(token);
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.page_size == 0 {
            return Err(SettingsError::Invalid {
                field: "page_size",
                message: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}

/// Path of the settings file honoring `JOBDECK_CONFIG_PATH`.
pub fn default_settings_path() -> PathBuf {
    app_file_path(SETTINGS_PATH_ENV, SETTINGS_FILE_NAME)
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn load_file(path: &Path) -> Result<Settings, SettingsError> {
    match fs::read_to_string(path) {
        Ok(data) => match serde_json::from_str(&data) {
            Ok(settings) => Ok(settings),
            Err(error) => {
                warn!(
                    path = %path.display(),
                    error = %error,
                    "Failed to parse settings file; using defaults"
                );
                Ok(Settings::default())
            }
        },
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(Settings::default()),
        Err(error) => Err(SettingsError::Io(error)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ENV: [&str; 4] = [PAGE_SIZE_ENV, API_BASE_ENV, API_TOKEN_ENV, API_DELAY_ENV];

    fn without_env<R>(f: impl FnOnce() -> R) -> R {
        temp_env::with_vars_unset(ALL_ENV, f)
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = without_env(|| Settings::load(Some(&dir.path().join("absent.json")))).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.page_size, 6);
    }

    #[test]
    fn file_values_are_merged_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        fs::write(&path, r#"{ "page_size": 3, "api_delay_ms": 0 }"#).unwrap();
        let settings = without_env(|| Settings::load(Some(&path))).unwrap();
        assert_eq!(settings.page_size, 3);
        assert_eq!(settings.api_delay_ms, 0);
        assert_eq!(settings.compact_width, DEFAULT_COMPACT_WIDTH);
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        fs::write(&path, "{ not json").unwrap();
        let settings = without_env(|| Settings::load(Some(&path))).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn env_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        fs::write(&path, r#"{ "page_size": 3 }"#).unwrap();
        let settings = temp_env::with_vars(
            [
                (PAGE_SIZE_ENV, Some("4")),
                (API_BASE_ENV, Some("http://localhost:8080")),
                (API_TOKEN_ENV, None),
                (API_DELAY_ENV, None),
            ],
            || Settings::load(Some(&path)),
        )
        .unwrap();
        assert_eq!(settings.page_size, 4);
        assert_eq!(settings.api_base.as_deref(), Some("http://localhost:8080"));
    }

    #[test]
    fn zero_or_garbage_page_size_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        fs::write(&path, r#"{ "page_size": 0 }"#).unwrap();
        let err = without_env(|| Settings::load(Some(&path))).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "page_size", .. }));

        let err = temp_env::with_var(PAGE_SIZE_ENV, Some("six"), || Settings::load(Some(&dir.path().join("none.json")))).unwrap_err();
        assert!(err.to_string().contains("JOBDECK_PAGE_SIZE"));
    }
}
