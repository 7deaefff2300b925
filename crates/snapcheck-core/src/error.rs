//! Error handling for snapcheck
//!
//! Provides error types for every stage of an analysis run:
//! - Configuration errors (missing layers, empty selections, bad parameters)
//! - Zone errors (per-polygon geometry failures)
//! - Line errors (per-line degenerate geometry)
//! - Geometry errors (failures inside the geometry backend)
//!
//! All error types use `thiserror` for ergonomic error handling.

use crate::types::{FeatureId, LayerKind};
use thiserror::Error;

/// Configuration error type
///
/// Raised before any work starts. A run that fails with one of these never
/// builds an index or touches a polygon.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    /// A required input layer was not supplied
    #[error("Invalid or missing input layer: {0}")]
    MissingLayer(LayerKind),

    /// Selection mode was requested but a layer has nothing selected
    #[error("Please select features to check ({0} layer has no selection)")]
    EmptySelection(LayerKind),

    /// Buffer distance is not a finite value in the accepted range
    #[error("Buffer distance {distance} outside [0, {max}]")]
    InvalidBufferDistance {
        /// The rejected distance.
        distance: f64,
        /// The largest accepted distance.
        max: f64,
    },
}

/// Per-polygon failure while building the boundary zone
///
/// Recovered by skipping the polygon and emitting a warning.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ZoneError {
    /// Polygon geometry is not well formed
    #[error("Invalid geometry of polygon with FID {0}")]
    InvalidGeometry(FeatureId),

    /// Polygon boundary extraction produced an empty curve
    #[error("Empty boundary of polygon with FID {0}")]
    EmptyBoundary(FeatureId),
}

impl ZoneError {
    /// Feature the failure belongs to
    pub fn feature_id(&self) -> FeatureId {
        match self {
            ZoneError::InvalidGeometry(id) | ZoneError::EmptyBoundary(id) => *id,
        }
    }

    /// Short name of the failure kind, used as a diagnostic key
    pub fn kind(&self) -> &'static str {
        match self {
            ZoneError::InvalidGeometry(_) => "invalid_geometry",
            ZoneError::EmptyBoundary(_) => "empty_boundary",
        }
    }
}

/// Per-line degenerate geometry
///
/// Skipped silently: multi-part and empty lines are routine in road data.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineError {
    /// The first part of the line has no vertices
    #[error("Line geometry is empty")]
    EmptyLineGeometry,

    /// The line has no parts at all
    #[error("Line geometry has no parts")]
    NoParts,
}

/// Failure inside the geometry backend
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// The offset routine aborted
    #[error("Offset by {distance} failed: {reason}")]
    OffsetFailed {
        /// The signed offset distance.
        distance: f64,
        /// What went wrong.
        reason: String,
    },

    /// A boolean operation aborted
    #[error("Boolean {operation} failed")]
    BooleanFailed {
        /// The operation name.
        operation: &'static str,
    },

    /// Input could not be converted to the backend representation
    #[error("Unsupported geometry: {0}")]
    Unsupported(String),
}

/// Run-level failure of an analysis
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// Preconditions failed; the run never started
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// The run was cancelled between polygons
    #[error("Analysis cancelled after {processed} of {total} polygons")]
    Cancelled {
        /// Polygons fully processed before the cancellation was seen.
        processed: usize,
        /// Polygons in the run.
        total: usize,
    },
}

impl AnalysisError {
    /// Check if this is a configuration error
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, AnalysisError::Configuration(_))
    }
}
