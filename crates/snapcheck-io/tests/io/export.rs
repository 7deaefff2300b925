use snapcheck_core::{AnalysisResult, EndpointRole, FeatureId, FlaggedPoint, Point};
use snapcheck_io::{Exporter, GeoJsonExporter};
use tempfile::TempDir;

fn flagged(line: u64, role: EndpointRole, x: f64, y: f64) -> FlaggedPoint {
    FlaggedPoint {
        line_id: FeatureId(line),
        role,
        point: Point::new(x, y),
        polygon_id: FeatureId(1),
    }
}

#[test]
fn test_export_writes_point_collection() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("flagged.geojson");
    let result = AnalysisResult::new(vec![
        flagged(10, EndpointRole::End, 1.05, 0.5),
        flagged(12, EndpointRole::Start, 0.95, 0.2),
    ]);

    let outcome = GeoJsonExporter::new()
        .with_crs("EPSG:4326")
        .with_layer_name("flagged")
        .export(&result, &path);
    assert!(outcome.success, "{}", outcome.message);

    let written: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
    assert_eq!(written["type"], "FeatureCollection");
    assert_eq!(written["name"], "flagged");
    assert_eq!(written["crs"]["properties"]["name"], "urn:ogc:def:crs:EPSG::4326");

    let features = written["features"].as_array().map(Vec::len);
    assert_eq!(features, Some(2));
    assert_eq!(written["features"][1]["properties"]["label"], "FID 12 | Start");
    Ok(())
}

#[test]
fn test_empty_export_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.geojson");

    let outcome = GeoJsonExporter::new().export(&AnalysisResult::default(), &path);
    assert!(!outcome.success);
    assert!(!path.exists());
}

#[test]
fn test_unwritable_path_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing-dir").join("out.geojson");
    let result = AnalysisResult::new(vec![flagged(1, EndpointRole::Start, 0.0, 0.0)]);

    let outcome = GeoJsonExporter::new().export(&result, &path);
    assert!(!outcome.success);
    assert!(outcome.message.contains("Failed to write"));
}
