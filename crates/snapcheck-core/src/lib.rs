//! # Snapcheck Core
//!
//! Core types, errors and diagnostics shared by the snapcheck crates.
//! Provides the feature/layer data model consumed by the analysis engine,
//! the flagged-point result model consumed by exporters, and the error
//! taxonomy used across the workspace.

pub mod constants;
pub mod diagnostics;
pub mod error;
pub mod result;
pub mod types;

pub use diagnostics::{Diagnostic, DiagnosticLevel};

pub use error::{AnalysisError, ConfigurationError, GeometryError, LineError, ZoneError};

pub use result::{AnalysisResult, EndpointRole, FlaggedPoint};

pub use types::{
    Bounds, DiagnosticCallback, Feature, FeatureId, FeatureLayer, LayerKind, LineFeature,
    LineGeometry, LineLayer, Point, PolygonFeature, PolygonGeometry, PolygonLayer, PolygonPart,
    ProgressCallback, ResultCallback,
};
