use snapcheck_core::{FeatureId, Point};
use snapcheck_io::{load_line_layer, load_polygon_layer, StoreError};
use tempfile::TempDir;

#[test]
fn test_load_layers_from_files() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let polygons_path = dir.path().join("parcels.geojson");
    let lines_path = dir.path().join("roads.geojson");

    std::fs::write(
        &polygons_path,
        r#"{ "type": "FeatureCollection", "features": [
            { "type": "Feature", "properties": { "fid": 1 },
              "geometry": { "type": "Polygon", "coordinates": [[[0,0],[1,0],[1,1],[0,1],[0,0]]] } }
        ]}"#,
    )?;
    std::fs::write(
        &lines_path,
        r#"{ "type": "FeatureCollection", "features": [
            { "type": "Feature", "id": 10,
              "geometry": { "type": "LineString", "coordinates": [[3,0.5],[1.05,0.5]] } },
            { "type": "Feature", "id": 11, "geometry": null }
        ]}"#,
    )?;

    let polygons = load_polygon_layer(&polygons_path)?;
    let lines = load_line_layer(&lines_path)?;

    assert_eq!(polygons.name, "parcels");
    assert_eq!(polygons.features[0].id, FeatureId(1));
    assert_eq!(lines.name, "roads");
    assert_eq!(lines.feature_count(), 2);
    assert_eq!(lines.features[0].geometry.parts[0][1], Point::new(1.05, 0.5));
    assert!(lines.features[1].geometry.is_empty());
    Ok(())
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = load_line_layer(&dir.path().join("absent.geojson")).unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }));
}

#[test]
fn test_malformed_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.geojson");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(load_polygon_layer(&path), Err(StoreError::Json(_))));
}
