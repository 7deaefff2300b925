//! Endpoint classification against a boundary zone.

use crate::geometry::GeometryAdapter;
use crate::zone::BoundaryZone;
use snapcheck_core::constants::SNAP_TOLERANCE;
use snapcheck_core::Point;

/// Outcome of testing one endpoint against one zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// On the boundary within tolerance.
    Snapped,
    /// Inside the band but off the boundary.
    Unsnapped,
    /// Outside the band.
    Irrelevant,
}

/// Classifies `point` against `zone`. The snap test runs first, so a point
/// on the boundary is never reported even though it lies inside the band.
pub fn classify<G: GeometryAdapter>(
    adapter: &G,
    zone: &BoundaryZone<G::Region, G::Curve>,
    point: Point,
) -> Classification {
    if adapter.distance(point, &zone.boundary) < SNAP_TOLERANCE {
        Classification::Snapped
    } else if adapter.contains(&zone.region, point) {
        Classification::Unsnapped
    } else {
        Classification::Irrelevant
    }
}
