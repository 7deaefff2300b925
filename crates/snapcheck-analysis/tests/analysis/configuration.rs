use crate::fixtures::unit_square_scene;
use snapcheck_analysis::{AnalysisRequest, AnalysisSession, Analyzer, GeoEngine, RecordingObserver};
use snapcheck_core::{AnalysisError, ConfigurationError, DiagnosticLevel, LayerKind};

fn run(request: &AnalysisRequest<'_>) -> (Result<(), AnalysisError>, RecordingObserver) {
    let mut observer = RecordingObserver::new();
    let outcome = Analyzer::<GeoEngine>::default()
        .analyze(request, &mut AnalysisSession::new(), &mut observer)
        .map(|_| ());
    (outcome, observer)
}

#[test]
fn test_missing_line_layer() {
    let (polygons, _) = unit_square_scene();
    let (outcome, observer) = run(&AnalysisRequest::new(Some(&polygons), None));

    assert_eq!(
        outcome.unwrap_err(),
        AnalysisError::Configuration(ConfigurationError::MissingLayer(LayerKind::Line))
    );
    assert_eq!(observer.diagnostics.len(), 1);
    assert_eq!(observer.diagnostics[0].level, DiagnosticLevel::Error);
    assert!(observer.progress.is_empty());
}

#[test]
fn test_selected_only_without_selection() {
    let (polygons, lines) = unit_square_scene();
    let (outcome, _) = run(&AnalysisRequest::new(Some(&polygons), Some(&lines)).selected_only(true));
    assert_eq!(
        outcome.unwrap_err(),
        AnalysisError::Configuration(ConfigurationError::EmptySelection(LayerKind::Polygon))
    );
}

#[test]
fn test_out_of_range_distance() {
    let (polygons, lines) = unit_square_scene();
    let (outcome, observer) =
        run(&AnalysisRequest::new(Some(&polygons), Some(&lines)).with_buffer_distance(-1.0));
    assert!(outcome.unwrap_err().is_configuration_error());
    assert!(observer.results.is_empty());
}

#[test]
fn test_failed_run_leaves_session_untouched() {
    let (polygons, _) = unit_square_scene();
    let mut session = AnalysisSession::new();
    session.set_progress(42);
    let _ = Analyzer::<GeoEngine>::default().analyze(
        &AnalysisRequest::new(Some(&polygons), None),
        &mut session,
        &mut RecordingObserver::new(),
    );
    assert_eq!(session.progress(), 42);
}
