//! # Snapcheck Analysis
//!
//! Finds line endpoints that approach a polygon boundary without landing on
//! it. For every polygon a band of half-width `d` is built around its
//! boundary; line endpoints that fall in the band but are farther than
//! [`SNAP_TOLERANCE`](snapcheck_core::constants::SNAP_TOLERANCE) from the
//! boundary are flagged.
//!
//! ## Pipeline
//!
//! ```text
//! Analyzer::analyze
//!   ├── LineIndex        (R-tree over line bounding boxes)
//!   └── per polygon
//!         ├── build_zone (buffer(+d) minus buffer(-d), boundary curve)
//!         ├── LineIndex::query(zone bounds)
//!         ├── endpoints  (first/last vertex of the first part)
//!         └── classify   (Snapped / Unsnapped / Irrelevant)
//! ```
//!
//! Geometry primitives sit behind [`GeometryAdapter`]; [`GeoEngine`] is the
//! default backend.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use snapcheck_analysis::{AnalysisRequest, AnalysisSession, Analyzer, NoopObserver};
//!
//! let analyzer = Analyzer::default();
//! let mut session = AnalysisSession::new();
//! let request = AnalysisRequest::new(Some(&polygons), Some(&lines)).with_buffer_distance(0.1);
//! let result = analyzer.analyze(&request, &mut session, &mut NoopObserver)?;
//! for (label, point) in result.entries() {
//!     println!("{label} {point}");
//! }
//! ```

pub mod classifier;
pub mod endpoints;
pub mod geometry;
pub mod locate;
pub mod orchestrator;
pub mod spatial_index;
pub mod zone;

pub use classifier::{classify, Classification};
pub use endpoints::{endpoints, CandidateEndpoint, Endpoints};
pub use geometry::{GeoEngine, GeometryAdapter};
pub use locate::locate;
pub use orchestrator::{
    AnalysisObserver, AnalysisRequest, AnalysisSession, Analyzer, CallbackObserver,
    CancellationToken, NoopObserver, RecordingObserver,
};
pub use spatial_index::LineIndex;
pub use zone::{build_zone, BoundaryZone};
