//! Boundary zone builder.
//!
//! The zone of a polygon is the band of half-width `d` around its boundary:
//! the polygon dilated by `d` minus the polygon eroded by `d`.

use crate::geometry::GeometryAdapter;
use snapcheck_core::{Bounds, FeatureId, PolygonFeature, ZoneError};
use tracing::{debug, warn};

/// Band around one polygon's boundary plus the boundary itself.
#[derive(Debug, Clone)]
pub struct BoundaryZone<R, C> {
    pub feature_id: FeatureId,
    /// Points within the buffer distance of the boundary.
    pub region: R,
    /// The polygon's rings.
    pub boundary: C,
    /// Box of `region`, `None` when the band is empty (zero distance).
    pub bounds: Option<Bounds>,
}

/// Builds the boundary zone of `feature` for half-width `distance`.
pub fn build_zone<G: GeometryAdapter>(
    adapter: &G,
    feature: &PolygonFeature,
    distance: f64,
) -> Result<BoundaryZone<G::Region, G::Curve>, ZoneError> {
    let id = feature.id;
    let polygon = &feature.geometry;

    if !adapter.is_valid(polygon) {
        return Err(ZoneError::InvalidGeometry(id));
    }

    let outer = adapter.buffer(polygon, distance).map_err(|e| {
        warn!(fid = %id, error = %e, "Outward buffer failed");
        ZoneError::InvalidGeometry(id)
    })?;
    let inner = adapter.buffer(polygon, -distance).map_err(|e| {
        warn!(fid = %id, error = %e, "Inward buffer failed");
        ZoneError::InvalidGeometry(id)
    })?;
    let region = adapter.difference(&outer, &inner).map_err(|e| {
        warn!(fid = %id, error = %e, "Band difference failed");
        ZoneError::InvalidGeometry(id)
    })?;

    let boundary = adapter.boundary(polygon);
    if adapter.curve_is_empty(&boundary) {
        return Err(ZoneError::EmptyBoundary(id));
    }

    let bounds = adapter.bounding_box(&region);
    debug!(fid = %id, ?bounds, "Boundary zone built");

    Ok(BoundaryZone {
        feature_id: id,
        region,
        boundary,
        bounds,
    })
}
