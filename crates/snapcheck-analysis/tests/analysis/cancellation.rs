use crate::fixtures::{line, square};
use snapcheck_analysis::{
    AnalysisObserver, AnalysisRequest, AnalysisSession, Analyzer, CancellationToken, GeoEngine,
    NoopObserver,
};
use snapcheck_core::{AnalysisError, LineLayer, PolygonLayer};

/// Cancels the token once progress passes a threshold.
struct CancelAt {
    token: CancellationToken,
    threshold: u8,
}

impl AnalysisObserver for CancelAt {
    fn on_progress(&mut self, percent: u8) {
        if percent >= self.threshold {
            self.token.cancel();
        }
    }
}

fn scene() -> (PolygonLayer, LineLayer) {
    let polygons = PolygonLayer::new(
        "parcels",
        vec![square(1, 0.0, 1.0), square(2, 10.0, 11.0), square(3, 20.0, 21.0)],
    );
    let lines = LineLayer::new(
        "roads",
        vec![
            line(1, &[(3.0, 0.5), (1.05, 0.5)]),
            line(2, &[(13.0, 10.5), (11.05, 10.5)]),
            line(3, &[(23.0, 20.5), (21.05, 20.5)]),
        ],
    );
    (polygons, lines)
}

#[test]
fn test_cancel_before_start() {
    let (polygons, lines) = scene();
    let token = CancellationToken::new();
    token.cancel();

    let err = Analyzer::<GeoEngine>::default()
        .analyze(
            &AnalysisRequest::new(Some(&polygons), Some(&lines)).with_cancellation(token),
            &mut AnalysisSession::new(),
            &mut NoopObserver,
        )
        .unwrap_err();
    assert_eq!(err, AnalysisError::Cancelled { processed: 0, total: 3 });
}

#[test]
fn test_cancel_mid_run_keeps_partial_output() {
    let (polygons, lines) = scene();
    let token = CancellationToken::new();
    // 3 lines + 3 polygons: the first polygon reports 66.
    let mut observer = CancelAt {
        token: token.clone(),
        threshold: 66,
    };
    let mut session = AnalysisSession::new();

    let err = Analyzer::<GeoEngine>::default()
        .analyze(
            &AnalysisRequest::new(Some(&polygons), Some(&lines)).with_cancellation(token),
            &mut session,
            &mut observer,
        )
        .unwrap_err();

    assert_eq!(err, AnalysisError::Cancelled { processed: 1, total: 3 });
    assert_eq!(session.flagged().len(), 1);
    assert_eq!(session.progress(), 66);
}
