//! GeoJSON feature store
//!
//! Feature ids come from the feature `id` member, else from
//! `properties.fid`, else from the feature's 0-based position. A `null`
//! geometry loads as an empty geometry so the analysis can report it.

use serde::Deserialize;
use serde_json::{Map, Value};
use snapcheck_core::{
    Feature, FeatureId, FeatureLayer, LayerKind, LineGeometry, LineLayer, Point, PolygonGeometry,
    PolygonLayer, PolygonPart,
};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised while loading a layer.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid GeoJSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Expected a FeatureCollection, found {0}")]
    NotAFeatureCollection(String),

    #[error("Feature {fid}: {found} geometry cannot be loaded into a {expected} layer")]
    UnsupportedGeometry {
        fid: FeatureId,
        found: String,
        expected: LayerKind,
    },

    #[error("Feature {fid}: position needs at least two coordinates")]
    InvalidPosition { fid: FeatureId },
}

#[derive(Debug, Deserialize)]
struct RawCollection {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    features: Vec<RawFeature>,
}

#[derive(Debug, Deserialize)]
struct RawFeature {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    properties: Option<Map<String, Value>>,
    #[serde(default)]
    geometry: Option<RawGeometry>,
}

#[derive(Debug, Deserialize)]
struct RawGeometry {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    coordinates: Value,
}

type Position = Vec<f64>;

fn id_value(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn feature_id(raw: &RawFeature, index: usize) -> FeatureId {
    raw.id
        .as_ref()
        .and_then(id_value)
        .or_else(|| {
            raw.properties
                .as_ref()
                .and_then(|props| props.get("fid"))
                .and_then(id_value)
        })
        .map(FeatureId)
        .unwrap_or(FeatureId(index as u64))
}

fn to_point(position: &[f64], fid: FeatureId) -> Result<Point, StoreError> {
    match position {
        [x, y, ..] => Ok(Point::new(*x, *y)),
        _ => Err(StoreError::InvalidPosition { fid }),
    }
}

fn to_points(positions: &[Position], fid: FeatureId) -> Result<Vec<Point>, StoreError> {
    positions.iter().map(|p| to_point(p, fid)).collect()
}

fn to_part(rings: &[Vec<Position>], fid: FeatureId) -> Result<PolygonPart, StoreError> {
    let mut rings = rings.iter();
    let exterior = match rings.next() {
        Some(ring) => to_points(ring, fid)?,
        None => Vec::new(),
    };
    let interiors = rings
        .map(|ring| to_points(ring, fid))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(PolygonPart::with_interiors(exterior, interiors))
}

fn polygon_geometry(geometry: RawGeometry, fid: FeatureId) -> Result<PolygonGeometry, StoreError> {
    match geometry.kind.as_str() {
        "Polygon" => {
            let rings: Vec<Vec<Position>> = serde_json::from_value(geometry.coordinates)?;
            if rings.is_empty() {
                return Ok(PolygonGeometry::default());
            }
            Ok(PolygonGeometry::new(vec![to_part(&rings, fid)?]))
        }
        "MultiPolygon" => {
            let polygons: Vec<Vec<Vec<Position>>> = serde_json::from_value(geometry.coordinates)?;
            let parts = polygons
                .iter()
                .map(|rings| to_part(rings, fid))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(PolygonGeometry::new(parts))
        }
        other => Err(StoreError::UnsupportedGeometry {
            fid,
            found: other.to_string(),
            expected: LayerKind::Polygon,
        }),
    }
}

fn line_geometry(geometry: RawGeometry, fid: FeatureId) -> Result<LineGeometry, StoreError> {
    match geometry.kind.as_str() {
        "LineString" => {
            let positions: Vec<Position> = serde_json::from_value(geometry.coordinates)?;
            Ok(LineGeometry::single(to_points(&positions, fid)?))
        }
        "MultiLineString" => {
            let parts: Vec<Vec<Position>> = serde_json::from_value(geometry.coordinates)?;
            let parts = parts
                .iter()
                .map(|part| to_points(part, fid))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(LineGeometry::multi(parts))
        }
        other => Err(StoreError::UnsupportedGeometry {
            fid,
            found: other.to_string(),
            expected: LayerKind::Line,
        }),
    }
}

fn parse_layer<G: Default>(
    fallback_name: &str,
    json: &str,
    convert: impl Fn(RawGeometry, FeatureId) -> Result<G, StoreError>,
) -> Result<FeatureLayer<G>, StoreError> {
    let raw: RawCollection = serde_json::from_str(json)?;
    if raw.kind != "FeatureCollection" {
        return Err(StoreError::NotAFeatureCollection(raw.kind));
    }

    let mut features = Vec::with_capacity(raw.features.len());
    for (index, mut raw_feature) in raw.features.into_iter().enumerate() {
        let fid = feature_id(&raw_feature, index);
        let geometry = match raw_feature.geometry.take() {
            Some(geometry) => convert(geometry, fid)?,
            None => {
                debug!(%fid, "Feature has no geometry");
                G::default()
            }
        };
        features.push(Feature::new(fid, geometry));
    }

    let name = raw.name.unwrap_or_else(|| fallback_name.to_string());
    Ok(FeatureLayer::new(name, features))
}

/// Parses a polygon layer from GeoJSON text.
pub fn parse_polygon_layer(name: &str, json: &str) -> Result<PolygonLayer, StoreError> {
    parse_layer(name, json, polygon_geometry)
}

/// Parses a line layer from GeoJSON text.
pub fn parse_line_layer(name: &str, json: &str) -> Result<LineLayer, StoreError> {
    parse_layer(name, json, line_geometry)
}

fn read(path: &Path) -> Result<(String, String), StoreError> {
    let text = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok((stem, text))
}

/// Loads a polygon layer from a GeoJSON file.
pub fn load_polygon_layer(path: &Path) -> Result<PolygonLayer, StoreError> {
    let (stem, text) = read(path)?;
    let layer = parse_polygon_layer(&stem, &text)?;
    info!(path = %path.display(), features = layer.feature_count(), "Loaded polygon layer");
    Ok(layer)
}

/// Loads a line layer from a GeoJSON file.
pub fn load_line_layer(path: &Path) -> Result<LineLayer, StoreError> {
    let (stem, text) = read(path)?;
    let layer = parse_line_layer(&stem, &text)?;
    info!(path = %path.display(), features = layer.feature_count(), "Loaded line layer");
    Ok(layer)
}
