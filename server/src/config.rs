//! Server configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MAPS_DIR: &str = "outputs/maps";
pub const DEFAULT_REPORTS_DIR: &str = "outputs/reports";
pub const DEFAULT_PRESENTATION_DIR: &str = "outputs/presentation";

/// Errors produced while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but its value could not be parsed.
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Generated interactive maps; listed by `/api/maps`, served at `/maps`.
    pub maps_dir: PathBuf,
    /// Pipeline reports; `validation_results.txt` feeds `/api/stats`.
    pub reports_dir: PathBuf,
    /// Slide images; served at `/presentation`.
    pub presentation_dir: PathBuf,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `FUELMAP_MAPS_DIR`: default `outputs/maps`
    /// - `FUELMAP_REPORTS_DIR`: default `outputs/reports`
    /// - `FUELMAP_PRESENTATION_DIR`: default `outputs/presentation`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `PORT` is set but not a port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`], reading values through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `PORT` is set but not a port number.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT").map(|v| v.trim().to_owned()).filter(|v| !v.is_empty()) {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };
        let dir = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .map_or_else(|| PathBuf::from(default), PathBuf::from)
        };

        Ok(Self {
            port,
            maps_dir: dir("FUELMAP_MAPS_DIR", DEFAULT_MAPS_DIR),
            reports_dir: dir("FUELMAP_REPORTS_DIR", DEFAULT_REPORTS_DIR),
            presentation_dir: dir("FUELMAP_PRESENTATION_DIR", DEFAULT_PRESENTATION_DIR),
        })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
