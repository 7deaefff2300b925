use crate::fixtures::{line, square, unit_square_scene};
use snapcheck_analysis::{
    AnalysisRequest, AnalysisSession, Analyzer, GeoEngine, NoopObserver, RecordingObserver,
};
use snapcheck_core::{
    DiagnosticLevel, EndpointRole, Feature, FeatureId, LineGeometry, LineLayer, Point,
    PolygonGeometry, PolygonLayer, PolygonPart,
};

#[test]
fn test_unit_square_scenario() {
    let (polygons, lines) = unit_square_scene();
    let analyzer = Analyzer::new(GeoEngine::new());
    let mut session = AnalysisSession::new();
    let mut observer = RecordingObserver::new();

    let result = analyzer
        .analyze(
            &AnalysisRequest::new(Some(&polygons), Some(&lines)).with_buffer_distance(0.1),
            &mut session,
            &mut observer,
        )
        .unwrap();

    assert_eq!(result.len(), 1);
    let flagged = &result.flagged[0];
    assert_eq!(flagged.line_id, FeatureId(10));
    assert_eq!(flagged.role, EndpointRole::End);
    assert_eq!(flagged.point, Point::new(1.05, 0.5));
    assert_eq!(flagged.polygon_id, FeatureId(1));
    assert_eq!(result.labels(), vec!["FID 10 | End".to_string()]);

    let warnings: Vec<_> = observer
        .diagnostics
        .iter()
        .filter(|d| d.level == DiagnosticLevel::Warning)
        .collect();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "invalid_geometry");
    assert_eq!(warnings[0].message, "Invalid geometry of polygon with FID 2");

    assert_eq!(observer.results.len(), 1);
    assert_eq!(observer.results[0], result);
}

#[test]
fn test_progress_is_monotonic_and_ends_at_hundred() {
    let (polygons, lines) = unit_square_scene();
    let mut observer = RecordingObserver::new();
    Analyzer::<GeoEngine>::default()
        .analyze(
            &AnalysisRequest::new(Some(&polygons), Some(&lines)),
            &mut AnalysisSession::new(),
            &mut observer,
        )
        .unwrap();

    // One report per line and per polygon.
    assert_eq!(observer.progress.len(), 6);
    assert!(observer.progress.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(observer.progress.last(), Some(&100));
}

#[test]
fn test_empty_layers_report_hundred_and_zero_total() {
    let polygons = PolygonLayer::new("parcels", Vec::new());
    let lines = LineLayer::new("roads", Vec::new());
    let mut observer = RecordingObserver::new();
    let result = Analyzer::<GeoEngine>::default()
        .analyze(
            &AnalysisRequest::new(Some(&polygons), Some(&lines)),
            &mut AnalysisSession::new(),
            &mut observer,
        )
        .unwrap();

    assert!(result.is_empty());
    assert_eq!(observer.progress, vec![100]);
    let info: Vec<_> = observer.diagnostics_with_key("zero_results").collect();
    assert_eq!(info.len(), 1);
    assert_eq!(info[0].message, "Total: 0");
}

#[test]
fn test_runs_are_idempotent() {
    let (polygons, lines) = unit_square_scene();
    let analyzer = Analyzer::<GeoEngine>::default();
    let request = AnalysisRequest::new(Some(&polygons), Some(&lines));

    let first = analyzer
        .analyze(&request, &mut AnalysisSession::new(), &mut NoopObserver)
        .unwrap();
    let second = analyzer
        .analyze(&request, &mut AnalysisSession::new(), &mut NoopObserver)
        .unwrap();
    assert_eq!(first, second);

    let mut reused = AnalysisSession::new();
    analyzer.analyze(&request, &mut reused, &mut NoopObserver).unwrap();
    let again = analyzer.analyze(&request, &mut reused, &mut NoopObserver).unwrap();
    assert_eq!(again, first);
    assert_eq!(reused.flagged().len(), first.len());
}

#[test]
fn test_multi_part_line_only_first_part_checked() {
    let polygons = PolygonLayer::new("parcels", vec![square(1, 0.0, 1.0)]);
    let lines = LineLayer::new(
        "roads",
        vec![Feature::new(
            20,
            LineGeometry::multi(vec![
                vec![Point::new(5.0, 5.0), Point::new(6.0, 6.0)],
                vec![Point::new(3.0, 0.5), Point::new(1.05, 0.5)],
            ]),
        )],
    );

    let result = Analyzer::<GeoEngine>::default()
        .analyze(
            &AnalysisRequest::new(Some(&polygons), Some(&lines)),
            &mut AnalysisSession::new(),
            &mut NoopObserver,
        )
        .unwrap();
    assert!(result.is_empty());
}

#[test]
fn test_inner_side_and_shared_edges() {
    // Two squares sharing the edge x = 1.
    let polygons = PolygonLayer::new(
        "parcels",
        vec![
            square(1, 0.0, 1.0),
            Feature::new(2, snapcheck_core::PolygonGeometry::rectangle(1.0, 0.0, 2.0, 1.0)),
        ],
    );
    let lines = LineLayer::new("roads", vec![line(30, &[(0.5, 0.5), (0.97, 0.5)])]);

    let result = Analyzer::<GeoEngine>::default()
        .analyze(
            &AnalysisRequest::new(Some(&polygons), Some(&lines)),
            &mut AnalysisSession::new(),
            &mut NoopObserver,
        )
        .unwrap();

    // The end lies in both bands and is reported once per polygon.
    assert_eq!(result.len(), 2);
    assert_eq!(result.flagged[0].polygon_id, FeatureId(1));
    assert_eq!(result.flagged[1].polygon_id, FeatureId(2));
    assert!(result.iter().all(|p| p.role == EndpointRole::End));
}

#[test]
fn test_selected_only_restricts_both_layers() {
    let polygons = PolygonLayer::new("parcels", vec![square(1, 0.0, 1.0), square(2, 10.0, 11.0)])
        .with_selection([FeatureId(2)]);
    let lines = LineLayer::new(
        "roads",
        vec![
            line(1, &[(3.0, 0.5), (1.05, 0.5)]),
            line(2, &[(13.0, 10.5), (11.05, 10.5)]),
            line(3, &[(13.0, 10.7), (11.05, 10.7)]),
        ],
    )
    .with_selection([FeatureId(1), FeatureId(3)]);

    let result = Analyzer::<GeoEngine>::default()
        .analyze(
            &AnalysisRequest::new(Some(&polygons), Some(&lines)).selected_only(true),
            &mut AnalysisSession::new(),
            &mut NoopObserver,
        )
        .unwrap();

    assert_eq!(result.labels(), vec!["FID 3 | End".to_string()]);
}

#[test]
fn test_zero_distance_flags_nothing() {
    let (polygons, lines) = unit_square_scene();
    let result = Analyzer::<GeoEngine>::default()
        .analyze(
            &AnalysisRequest::new(Some(&polygons), Some(&lines)).with_buffer_distance(0.0),
            &mut AnalysisSession::new(),
            &mut NoopObserver,
        )
        .unwrap();
    assert!(result.is_empty());
}

#[test]
fn test_enclave_polygon_is_checked() {
    let ring = |min: f64, max: f64| {
        vec![
            Point::new(min, min),
            Point::new(max, min),
            Point::new(max, max),
            Point::new(min, max),
        ]
    };
    let enclave = PolygonGeometry::new(vec![
        PolygonPart::with_interiors(ring(0.0, 10.0), vec![ring(2.0, 8.0)]),
        PolygonPart::new(ring(4.0, 6.0)),
    ]);
    let polygons = PolygonLayer::new("municipalities", vec![Feature::new(5, enclave)]);
    let lines = LineLayer::new(
        "roads",
        vec![
            line(1, &[(7.0, 5.0), (6.05, 5.0)]),
            line(2, &[(7.0, 3.0), (7.95, 3.0)]),
            line(3, &[(7.0, 7.0), (6.0, 7.0)]),
        ],
    );
    let mut observer = RecordingObserver::new();
    let result = Analyzer::<GeoEngine>::default()
        .analyze(
            &AnalysisRequest::new(Some(&polygons), Some(&lines)),
            &mut AnalysisSession::new(),
            &mut observer,
        )
        .unwrap();

    assert_eq!(
        result.labels(),
        vec!["FID 1 | End".to_string(), "FID 2 | End".to_string()]
    );
    assert!(observer
        .diagnostics
        .iter()
        .all(|d| d.level != DiagnosticLevel::Warning));
}
