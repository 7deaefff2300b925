//! Analysis orchestrator
//!
//! Drives one run: validates the request, indexes the lines, then walks the
//! polygons building each boundary zone and classifying the endpoints of the
//! lines whose boxes meet it.

mod cancel;
mod observer;
mod progress;
mod request;
mod session;

pub use cancel::CancellationToken;
pub use observer::{AnalysisObserver, CallbackObserver, NoopObserver, RecordingObserver};
pub use request::AnalysisRequest;
pub use session::AnalysisSession;

use crate::classifier::{classify, Classification};
use crate::endpoints::endpoints;
use crate::geometry::{GeoEngine, GeometryAdapter};
use crate::spatial_index::LineIndex;
use crate::zone::build_zone;
use progress::ProgressTracker;
use snapcheck_core::{AnalysisError, AnalysisResult, Diagnostic, FlaggedPoint};
use tracing::{debug, info, trace, warn};

const RUN_TITLE: &str = "Road network snapping check";

/// Runs unsnapped-endpoint detection with a geometry backend.
#[derive(Debug, Clone, Default)]
pub struct Analyzer<G = GeoEngine> {
    adapter: G,
}

impl<G: GeometryAdapter> Analyzer<G> {
    pub fn new(adapter: G) -> Self {
        Self { adapter }
    }

    pub fn adapter(&self) -> &G {
        &self.adapter
    }

    /// Runs one analysis.
    ///
    /// The session is reset first and holds the flagged points when the call
    /// returns, including a cancelled run's partial output. Per-polygon
    /// failures are reported to `observer` as warnings and do not stop the
    /// run.
    pub fn analyze(
        &self,
        request: &AnalysisRequest<'_>,
        session: &mut AnalysisSession,
        observer: &mut dyn AnalysisObserver,
    ) -> Result<AnalysisResult, AnalysisError> {
        let (polygon_layer, line_layer) = match request.validate() {
            Ok(layers) => layers,
            Err(e) => {
                warn!(error = %e, "Analysis preconditions failed");
                observer.on_diagnostic(&Diagnostic::error("configuration", "Error", e.to_string()));
                return Err(e.into());
            }
        };

        session.reset();

        let polygons = polygon_layer.features_in_scope(request.selected_only);
        let lines = line_layer.features_in_scope(request.selected_only);
        let distance = request.buffer_distance;
        let mut progress = ProgressTracker::new(lines.len() + polygons.len());

        info!(
            polygons = polygons.len(),
            lines = lines.len(),
            distance,
            selected_only = request.selected_only,
            "Starting snapping analysis"
        );

        let mut index = LineIndex::new();
        for (position, line) in lines.iter().enumerate() {
            if !index.insert_feature(position, line) {
                trace!(fid = %line.id, "Line without vertices not indexed");
            }
            report_progress(progress.advance(), session, observer);
        }
        debug!(indexed = index.len(), "Line index built");

        for (processed, polygon) in polygons.iter().enumerate() {
            if request.is_cancelled() {
                info!(processed, total = polygons.len(), "Analysis cancelled");
                return Err(AnalysisError::Cancelled {
                    processed,
                    total: polygons.len(),
                });
            }

            match build_zone(&self.adapter, polygon, distance) {
                Err(e) => {
                    warn!(fid = %e.feature_id(), kind = e.kind(), "Polygon skipped");
                    observer.on_diagnostic(&Diagnostic::warning(e.kind(), "Warning", e.to_string()));
                }
                Ok(zone) => {
                    if let Some(bounds) = zone.bounds {
                        let mut candidates = index.query(&bounds);
                        candidates.sort_unstable_by_key(|&position| (lines[position].id, position));
                        candidates.dedup();

                        for position in candidates {
                            let line = lines[position];
                            let ends = match endpoints(line) {
                                Ok(ends) => ends,
                                Err(e) => {
                                    trace!(fid = %line.id, error = %e, "Line skipped");
                                    continue;
                                }
                            };
                            for end in ends {
                                if classify(&self.adapter, &zone, end.point)
                                    == Classification::Unsnapped
                                {
                                    debug!(fid = %end.line_id, role = %end.role, polygon = %zone.feature_id, "Unsnapped endpoint");
                                    session.push(FlaggedPoint {
                                        line_id: end.line_id,
                                        role: end.role,
                                        point: end.point,
                                        polygon_id: zone.feature_id,
                                    });
                                }
                            }
                        }
                    }
                }
            }

            report_progress(progress.advance(), session, observer);
        }

        if let Some(percent) = progress.finish() {
            report_progress(percent, session, observer);
        }

        let result = session.result();
        if result.is_empty() {
            observer.on_diagnostic(&Diagnostic::info("zero_results", RUN_TITLE, "Total: 0"));
        }
        info!(flagged = result.len(), "Snapping analysis finished");
        observer.on_result(&result);
        Ok(result)
    }
}

fn report_progress(percent: u8, session: &mut AnalysisSession, observer: &mut dyn AnalysisObserver) {
    session.set_progress(percent);
    observer.on_progress(percent);
}
