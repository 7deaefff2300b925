//! Configuration and settings management for snapcheck
//!
//! Supports JSON and TOML file formats. The default location is
//! `<platform config dir>/snapcheck/config.toml`.
//!
//! Configuration is organized into two sections:
//! - Analysis defaults (buffer distance, selection mode)
//! - Export defaults (coordinate reference, output path, layer name)

use crate::error::{ConfigError, SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use snapcheck_core::constants::{
    DEFAULT_BUFFER_DISTANCE, DEFAULT_EXPORT_CRS, DEFAULT_EXPORT_LAYER_NAME, MAX_BUFFER_DISTANCE,
};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Analysis defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Half-width of the boundary band
    pub buffer_distance: f64,
    /// Restrict runs to selected features
    pub selected_only: bool,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            buffer_distance: DEFAULT_BUFFER_DISTANCE,
            selected_only: false,
        }
    }
}

/// Export defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Coordinate reference stamped on exported files, e.g. `EPSG:2100`
    pub crs: String,
    /// Where to write results when no path is given
    pub default_path: Option<PathBuf>,
    /// Name written into the exported collection
    pub layer_name: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            crs: DEFAULT_EXPORT_CRS.to_string(),
            default_path: None,
            layer_name: DEFAULT_EXPORT_LAYER_NAME.to_string(),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Analysis defaults
    pub analysis: AnalysisSettings,
    /// Export defaults
    pub export: ExportSettings,
}

#[derive(Debug, Clone, Copy)]
enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> Result<Format, ConfigError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a `.json` or `.toml` file
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Save configuration to a `.json` or `.toml` file
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let format = format_of(path)?;

        let content = match format {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        debug!(path = %path.display(), "Saved configuration");
        Ok(())
    }

    /// Load from `path` if it exists, otherwise return defaults
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            debug!(path = %path.display(), "No configuration file, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let d = self.analysis.buffer_distance;
        if !d.is_finite() || !(0.0..=MAX_BUFFER_DISTANCE).contains(&d) {
            return Err(ConfigError::ValueOutOfRange {
                key: "analysis.buffer_distance".to_string(),
                value: d.to_string(),
            });
        }

        if self.export.crs.trim().is_empty() {
            return Err(ConfigError::MissingValue("export.crs".to_string()));
        }

        if self.export.layer_name.trim().is_empty() {
            return Err(ConfigError::MissingValue("export.layer_name".to_string()));
        }

        Ok(())
    }
}

/// `<platform config dir>/snapcheck/config.toml`
pub fn default_config_path() -> SettingsResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("snapcheck").join("config.toml"))
        .ok_or_else(|| {
            SettingsError::ConfigDirectory("no platform configuration directory".to_string())
        })
}
