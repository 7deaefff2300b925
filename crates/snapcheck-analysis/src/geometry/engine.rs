//! Default geometry backend.

use super::offset::{clean_ring, difference, offset_polygon, to_line_string, to_multi_polygon};
use super::validity;
use super::GeometryAdapter;
use geo::algorithm::coordinate_position::{CoordPos, CoordinatePosition};
use geo::{BoundingRect, Coord, EuclideanDistance, MultiLineString, MultiPolygon};
use snapcheck_core::constants::ARC_SEGMENTS_PER_QUADRANT;
use snapcheck_core::{Bounds, GeometryError, Point, PolygonGeometry};

/// `cavalier_contours` offsets plus `geo` predicates and boolean ops.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoEngine;

impl GeoEngine {
    pub fn new() -> Self {
        Self
    }
}

impl GeometryAdapter for GeoEngine {
    type Region = MultiPolygon<f64>;
    type Curve = MultiLineString<f64>;

    fn buffer(
        &self,
        polygon: &PolygonGeometry,
        distance: f64,
    ) -> Result<Self::Region, GeometryError> {
        if !distance.is_finite() {
            return Err(GeometryError::Unsupported(format!(
                "non-finite buffer distance {}",
                distance
            )));
        }
        if distance == 0.0 {
            return Ok(to_multi_polygon(polygon));
        }
        offset_polygon(polygon, distance, ARC_SEGMENTS_PER_QUADRANT)
    }

    fn boundary(&self, polygon: &PolygonGeometry) -> Self::Curve {
        let rings = polygon
            .rings()
            .map(|ring| clean_ring(ring))
            .filter(|ring| ring.len() >= 2)
            .map(|ring| to_line_string(&ring))
            .collect();
        MultiLineString::new(rings)
    }

    fn curve_is_empty(&self, curve: &Self::Curve) -> bool {
        curve.0.iter().all(|ls| ls.0.len() < 2)
    }

    fn difference(
        &self,
        a: &Self::Region,
        b: &Self::Region,
    ) -> Result<Self::Region, GeometryError> {
        difference(a, b)
    }

    fn bounding_box(&self, region: &Self::Region) -> Option<Bounds> {
        region
            .bounding_rect()
            .map(|rect| Bounds::new(rect.min().x, rect.min().y, rect.max().x, rect.max().y))
    }

    fn contains(&self, region: &Self::Region, point: Point) -> bool {
        region.coordinate_position(&Coord {
            x: point.x,
            y: point.y,
        }) != CoordPos::Outside
    }

    fn distance(&self, point: Point, curve: &Self::Curve) -> f64 {
        let p = geo::Point::new(point.x, point.y);
        curve
            .0
            .iter()
            .filter(|ls| !ls.0.is_empty())
            .map(|ls| p.euclidean_distance(ls))
            .fold(f64::INFINITY, f64::min)
    }

    fn is_valid(&self, polygon: &PolygonGeometry) -> bool {
        validity::is_valid(polygon)
    }
}
