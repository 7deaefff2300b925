//! # Snapcheck
//!
//! Detects road-network line endpoints that come close to an administrative
//! polygon boundary without landing on it.
//!
//! ## Architecture
//!
//! Snapcheck is organized as a workspace with multiple crates:
//!
//! 1. **snapcheck-core** - Feature model, results, diagnostics, errors
//! 2. **snapcheck-analysis** - Geometry backend, line index, boundary zones,
//!    endpoint classification and the run orchestrator
//! 3. **snapcheck-io** - GeoJSON layer loading and point export
//! 4. **snapcheck-settings** - Configuration files
//! 5. **snapcheck** - Command line front end that integrates all crates

pub mod cli;

pub use snapcheck_analysis::{
    locate, AnalysisObserver, AnalysisRequest, AnalysisSession, Analyzer, CallbackObserver,
    CancellationToken, GeoEngine, GeometryAdapter, NoopObserver, RecordingObserver,
};

pub use snapcheck_core::{
    AnalysisError, AnalysisResult, Bounds, ConfigurationError, Diagnostic, DiagnosticLevel,
    EndpointRole, FeatureId, FlaggedPoint, LineLayer, Point, PolygonLayer,
};

pub use snapcheck_io::{
    load_line_layer, load_polygon_layer, ExportOutcome, Exporter, GeoJsonExporter, StoreError,
};

pub use snapcheck_settings::{default_config_path, Config, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging
///
/// Logs go to stderr so they never mix with the report on stdout.
/// - `RUST_LOG` environment variable support
/// - INFO by default when `verbose`, WARN otherwise
/// - JSON lines instead of human-readable output when `json`
pub fn init_logging(verbose: bool, json: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let level = if verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    let env_filter = EnvFilter::from_default_env().add_directive(level.into());

    if json {
        let fmt_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_line_number(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}
