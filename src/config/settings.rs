//! User settings for Paycheck Waterfall
//!
//! Manages user preferences: the default percent basis, output format, and
//! currency symbol used for table output.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::paths::WaterfallPaths;
use crate::error::WaterfallError;
use crate::models::PercentBasis;

/// Output format preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON (default)
    #[default]
    Json,
    Yaml,
    Csv,
    /// Aligned terminal table
    Table,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Csv => "csv",
            Self::Table => "table",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for OutputFormat {
    type Err = WaterfallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            other => Err(WaterfallError::Parse(format!(
                "Unknown output format '{}': expected json, yaml, csv, or table",
                other
            ))),
        }
    }
}

/// User settings for Paycheck Waterfall
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Percent basis for plans that don't set `percent_apply`
    #[serde(default)]
    pub default_percent_basis: PercentBasis,

    /// Output format when `--format` is not given
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Currency symbol for table output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_percent_basis: PercentBasis::default(),
            output_format: OutputFormat::default(),
            currency_symbol: default_currency(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &WaterfallPaths) -> Result<Self, WaterfallError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                WaterfallError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                WaterfallError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &WaterfallPaths) -> Result<(), WaterfallError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            WaterfallError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            WaterfallError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
