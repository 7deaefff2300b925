//! Flagged point export
//!
//! Writes the result of a run as a GeoJSON point `FeatureCollection` with a
//! named CRS member and `label`/`fid`/`role` properties on every point.

use serde_json::{json, Value};
use snapcheck_core::constants::{DEFAULT_EXPORT_CRS, DEFAULT_EXPORT_LAYER_NAME};
use snapcheck_core::AnalysisResult;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

/// Errors raised while writing an export.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("No points to export")]
    NothingToExport,

    #[error("Failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize export: {0}")]
    Json(#[from] serde_json::Error),
}

/// User-facing outcome of an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutcome {
    pub success: bool,
    pub message: String,
}

impl ExportOutcome {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Writes flagged points to a file.
pub trait Exporter {
    /// Writes `result` to `path`. Never panics; failures come back as an
    /// unsuccessful outcome.
    fn export(&self, result: &AnalysisResult, path: &Path) -> ExportOutcome;
}

/// `EPSG:2100` → `urn:ogc:def:crs:EPSG::2100`. Other forms pass through.
pub fn crs_urn(crs: &str) -> String {
    let crs = crs.trim();
    match crs.split_once(':') {
        Some((authority, code))
            if !authority.eq_ignore_ascii_case("urn") && !code.contains(':') =>
        {
            format!("urn:ogc:def:crs:{}::{}", authority.to_ascii_uppercase(), code)
        }
        _ => crs.to_string(),
    }
}

/// GeoJSON point exporter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeoJsonExporter {
    crs: String,
    layer_name: String,
}

impl Default for GeoJsonExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl GeoJsonExporter {
    pub fn new() -> Self {
        Self {
            crs: DEFAULT_EXPORT_CRS.to_string(),
            layer_name: DEFAULT_EXPORT_LAYER_NAME.to_string(),
        }
    }

    pub fn with_crs(mut self, crs: impl Into<String>) -> Self {
        self.crs = crs.into();
        self
    }

    pub fn with_layer_name(mut self, name: impl Into<String>) -> Self {
        self.layer_name = name.into();
        self
    }

    pub fn crs(&self) -> &str {
        &self.crs
    }

    /// Builds the collection without writing it.
    pub fn to_geojson(&self, result: &AnalysisResult) -> Value {
        let features: Vec<Value> = result
            .iter()
            .map(|flagged| {
                json!({
                    "type": "Feature",
                    "properties": {
                        "label": flagged.label(),
                        "fid": flagged.line_id.0,
                        "role": flagged.role.to_string(),
                    },
                    "geometry": {
                        "type": "Point",
                        "coordinates": [flagged.point.x, flagged.point.y],
                    },
                })
            })
            .collect();

        json!({
            "type": "FeatureCollection",
            "name": self.layer_name,
            "crs": {
                "type": "name",
                "properties": { "name": crs_urn(&self.crs) },
            },
            "features": features,
        })
    }

    /// Writes `result` and returns the number of points written.
    pub fn write(&self, result: &AnalysisResult, path: &Path) -> Result<usize, ExportError> {
        if result.is_empty() {
            return Err(ExportError::NothingToExport);
        }
        let text = serde_json::to_string_pretty(&self.to_geojson(result))?;
        std::fs::write(path, text).map_err(|source| ExportError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(result.len())
    }
}

impl Exporter for GeoJsonExporter {
    fn export(&self, result: &AnalysisResult, path: &Path) -> ExportOutcome {
        match self.write(result, path) {
            Ok(count) => {
                info!(path = %path.display(), count, "Exported flagged endpoints");
                ExportOutcome::ok(format!("Saved {} points to {}", count, path.display()))
            }
            Err(ExportError::NothingToExport) => ExportOutcome::failed("nothing to export"),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Export failed");
                ExportOutcome::failed(e.to_string())
            }
        }
    }
}
