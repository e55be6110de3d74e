//! Path management for Paycheck Waterfall
//!
//! ## Path Resolution Order
//!
//! 1. `WATERFALL_CONFIG_DIR` environment variable (if set)
//! 2. The platform config directory joined with `paycheck-waterfall`
//!    (`~/.config/paycheck-waterfall` on Linux, `%APPDATA%\paycheck-waterfall`
//!    on Windows)

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::WaterfallError;

/// Environment variable that overrides the config directory
pub const CONFIG_DIR_ENV: &str = "WATERFALL_CONFIG_DIR";

const APP_DIR_NAME: &str = "paycheck-waterfall";

/// Manages all paths used by Paycheck Waterfall
#[derive(Debug, Clone)]
pub struct WaterfallPaths {
    base_dir: PathBuf,
}

impl WaterfallPaths {
    /// Create a new WaterfallPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and the
    /// override variable is not set.
    pub fn new() -> Result<Self, WaterfallError> {
        let base_dir = match std::env::var_os(CONFIG_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create WaterfallPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the config directory exists
    pub fn ensure_directories(&self) -> Result<(), WaterfallError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            WaterfallError::Io(format!("Failed to create config directory: {}", e))
        })
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, WaterfallError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| WaterfallError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join(APP_DIR_NAME))
}
