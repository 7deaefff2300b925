//! Snapcheck Settings Crate
//!
//! Loads, validates and saves the analysis and export defaults used by the
//! command line front end.

pub mod config;
pub mod error;

pub use config::{default_config_path, AnalysisSettings, Config, ExportSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
