//! User settings for WealthTracker
//!
//! Local preferences: the user's country (which drives the currency
//! symbol), the date format, and how often the dashboard rotates its
//! quote.

use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::TrackerError;
use crate::models::currency_symbol;

/// User settings for WealthTracker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// ISO country code; drives the displayed currency symbol
    #[serde(default = "default_country")]
    pub country: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Seconds between dashboard quote rotations
    #[serde(default = "default_quote_rotation_secs")]
    pub quote_rotation_secs: u32,
}

fn default_schema_version() -> u32 {
    1
}

fn default_country() -> String {
    "US".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_quote_rotation_secs() -> u32 {
    30
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            country: default_country(),
            date_format: default_date_format(),
            quote_rotation_secs: default_quote_rotation_secs(),
        }
    }
}

impl Settings {
    /// The currency symbol for the configured country ("$" for unknown
    /// codes)
    pub fn currency_symbol(&self) -> &'static str {
        currency_symbol(&self.country)
    }

    /// Load settings from disk, or return defaults if no file exists
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| TrackerError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| TrackerError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Defaults are not persisted until the caller saves
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TrackerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| TrackerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
