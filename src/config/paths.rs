//! Path management for WealthTracker
//!
//! Resolves the platform configuration directory for the settings file.
//!
//! ## Path Resolution Order
//!
//! 1. `WEALTHTRACKER_DATA_DIR` environment variable (if set)
//! 2. The platform config directory via `directories` (e.g.
//!    `~/.config/wealthtracker` on Linux, `%APPDATA%\wealthtracker` on
//!    Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::TrackerError;

/// Manages all paths used by WealthTracker
#[derive(Debug, Clone)]
pub struct TrackerPaths {
    /// Base directory for all WealthTracker data
    base_dir: PathBuf,
}

impl TrackerPaths {
    /// Create a new TrackerPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined for the
    /// current platform.
    pub fn new() -> Result<Self, TrackerError> {
        let base_dir = if let Ok(custom) = std::env::var("WEALTHTRACKER_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            let dirs = ProjectDirs::from("", "", "wealthtracker").ok_or_else(|| {
                TrackerError::Config("Could not determine a home directory".into())
            })?;
            dirs.config_dir().to_path_buf()
        };

        Ok(Self { base_dir })
    }

    /// Create TrackerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), TrackerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TrackerError::Io(format!("Failed to create base directory: {}", e)))?;
        Ok(())
    }

    /// Check if WealthTracker has been initialized (settings file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}
