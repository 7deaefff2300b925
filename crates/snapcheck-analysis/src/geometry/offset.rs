//! Signed polygon offsets via cavalier_contours.
//!
//! Rings are oriented (shells counter clockwise, holes clockwise), each part's
//! rings are offset together as one cavalier `Shape`, and the resulting arc
//! polylines are flattened back into `geo` polygons.

use cavalier_contours::polyline::{PlineSource, PlineSourceMut, PlineVertex, Polyline};
use cavalier_contours::shape_algorithms::{Shape, ShapeOffsetOptions};
use geo::algorithm::orient::{Direction, Orient};
use geo::{BooleanOps, Coord, LineString, MultiPolygon, Polygon};
use snapcheck_core::{GeometryError, Point, PolygonGeometry, PolygonPart};
use std::f64::consts::FRAC_PI_2;
use std::panic;
use tracing::warn;

const DUPLICATE_EPS: f64 = 1e-12;
const BULGE_EPS: f64 = 1e-9;

/// Drops consecutive duplicates and the closing vertex.
pub(crate) fn clean_ring(ring: &[Point]) -> Vec<Point> {
    let mut cleaned: Vec<Point> = Vec::with_capacity(ring.len());
    for p in ring {
        if let Some(last) = cleaned.last() {
            if last.distance_to(p) <= DUPLICATE_EPS {
                continue;
            }
        }
        cleaned.push(*p);
    }
    while cleaned.len() > 1 {
        let first = cleaned[0];
        match cleaned.last() {
            Some(last) if last.distance_to(&first) <= DUPLICATE_EPS => {
                cleaned.pop();
            }
            _ => break,
        }
    }
    cleaned
}

/// Shoelace area, positive for counter clockwise rings.
pub(crate) fn signed_area(ring: &[Point]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }
    let mut twice_area = 0.0;
    for (i, a) in ring.iter().enumerate() {
        let b = &ring[(i + 1) % ring.len()];
        twice_area += a.x * b.y - b.x * a.y;
    }
    twice_area / 2.0
}

/// Closed `geo` ring from a cleaned vertex list.
pub(crate) fn to_line_string(ring: &[Point]) -> LineString<f64> {
    let mut coords: Vec<Coord<f64>> = ring.iter().map(|p| Coord { x: p.x, y: p.y }).collect();
    if let Some(first) = coords.first().copied() {
        coords.push(first);
    }
    LineString::new(coords)
}

/// Exact conversion, no offset.
pub(crate) fn to_multi_polygon(polygon: &PolygonGeometry) -> MultiPolygon<f64> {
    let polygons = polygon
        .parts
        .iter()
        .filter_map(|part| {
            let exterior = clean_ring(&part.exterior);
            if exterior.len() < 3 {
                return None;
            }
            let interiors = part
                .interiors
                .iter()
                .map(|ring| clean_ring(ring))
                .filter(|ring| ring.len() >= 3)
                .map(|ring| to_line_string(&ring))
                .collect();
            Some(Polygon::new(to_line_string(&exterior), interiors).orient(Direction::Default))
        })
        .collect();
    MultiPolygon::new(polygons)
}

fn ring_to_pline(ring: &[Point], counter_clockwise: bool) -> Option<Polyline<f64>> {
    let mut cleaned = clean_ring(ring);
    if cleaned.len() < 3 {
        return None;
    }
    let area = signed_area(&cleaned);
    if area == 0.0 {
        return None;
    }
    if (area > 0.0) != counter_clockwise {
        cleaned.reverse();
    }

    let mut polyline = Polyline::new();
    for p in cleaned {
        polyline.add_vertex(PlineVertex::new(p.x, p.y, 0.0));
    }
    polyline.set_is_closed(true);
    Some(polyline)
}

/// Appends the points of the arc from `v1` to `v2` described by `bulge`,
/// excluding both ends.
fn flatten_arc(
    out: &mut Vec<Coord<f64>>,
    v1: (f64, f64),
    v2: (f64, f64),
    bulge: f64,
    segments_per_quadrant: u32,
) {
    let dx = v2.0 - v1.0;
    let dy = v2.1 - v1.1;
    let chord = (dx * dx + dy * dy).sqrt();
    if chord <= DUPLICATE_EPS {
        return;
    }

    let sweep = 4.0 * bulge.atan();
    let radius = (chord / (2.0 * (sweep / 2.0).sin())).abs();
    // Signed distance from the chord midpoint to the centre along the left normal.
    let apothem = chord / (2.0 * (sweep / 2.0).tan());
    let cx = (v1.0 + v2.0) / 2.0 - dy / chord * apothem;
    let cy = (v1.1 + v2.1) / 2.0 + dx / chord * apothem;

    let start_angle = (v1.1 - cy).atan2(v1.0 - cx);
    let segments = ((sweep.abs() / FRAC_PI_2) * segments_per_quadrant as f64)
        .ceil()
        .max(1.0) as u32;

    for j in 1..segments {
        let angle = start_angle + sweep * (j as f64 / segments as f64);
        out.push(Coord {
            x: cx + radius * angle.cos(),
            y: cy + radius * angle.sin(),
        });
    }
}

fn pline_to_polygon(pline: &Polyline<f64>, segments_per_quadrant: u32) -> Option<Polygon<f64>> {
    let count = pline.vertex_count();
    if count < 2 {
        return None;
    }

    let mut coords = Vec::with_capacity(count * 2);
    for i in 0..count {
        let v1 = pline.at(i);
        let v2 = pline.at((i + 1) % count);
        coords.push(Coord { x: v1.x, y: v1.y });
        if v1.bulge.abs() > BULGE_EPS {
            flatten_arc(
                &mut coords,
                (v1.x, v1.y),
                (v2.x, v2.y),
                v1.bulge,
                segments_per_quadrant,
            );
        }
    }
    if coords.len() < 3 {
        return None;
    }
    coords.push(coords[0]);

    Some(Polygon::new(LineString::new(coords), Vec::new()).orient(Direction::Default))
}

pub(crate) fn union_all(
    polygons: Vec<Polygon<f64>>,
) -> Result<MultiPolygon<f64>, GeometryError> {
    let mut iter = polygons.into_iter();
    let Some(first) = iter.next() else {
        return Ok(MultiPolygon::new(Vec::new()));
    };
    let mut merged = MultiPolygon::new(vec![first]);
    for polygon in iter {
        let other = MultiPolygon::new(vec![polygon]);
        merged = panic::catch_unwind(panic::AssertUnwindSafe(|| merged.union(&other)))
            .map_err(|_| GeometryError::BooleanFailed { operation: "union" })?;
    }
    Ok(merged)
}

pub(crate) fn difference(
    a: &MultiPolygon<f64>,
    b: &MultiPolygon<f64>,
) -> Result<MultiPolygon<f64>, GeometryError> {
    if a.0.is_empty() || b.0.is_empty() {
        return Ok(a.clone());
    }
    if a == b {
        return Ok(MultiPolygon::new(Vec::new()));
    }
    panic::catch_unwind(panic::AssertUnwindSafe(|| a.difference(b))).map_err(|_| {
        GeometryError::BooleanFailed {
            operation: "difference",
        }
    })
}

/// Offsets `polygon` by `distance` (positive grows, negative shrinks).
///
/// Each part is offset on its own and the results are unioned, so a part
/// lying in another part's hole keeps its own band.
pub(crate) fn offset_polygon(
    polygon: &PolygonGeometry,
    distance: f64,
    segments_per_quadrant: u32,
) -> Result<MultiPolygon<f64>, GeometryError> {
    let mut pieces = Vec::new();
    for part in &polygon.parts {
        pieces.extend(offset_part(part, distance, segments_per_quadrant)?.0);
    }
    union_all(pieces)
}

fn offset_part(
    part: &PolygonPart,
    distance: f64,
    segments_per_quadrant: u32,
) -> Result<MultiPolygon<f64>, GeometryError> {
    let shell = ring_to_pline(&part.exterior, true);
    let holes = part
        .interiors
        .iter()
        .filter_map(|ring| ring_to_pline(ring, false));
    let plines: Vec<Polyline<f64>> = shell.into_iter().chain(holes).collect();

    if plines.is_empty() {
        return Ok(MultiPolygon::new(Vec::new()));
    }

    // cavalier offsets counter clockwise loops inward for positive values.
    let offset_res = panic::catch_unwind(panic::AssertUnwindSafe(|| {
        Shape::from_plines(plines).parallel_offset(-distance, ShapeOffsetOptions::default())
    }));
    let shape = match offset_res {
        Ok(shape) => shape,
        Err(_) => {
            warn!(distance, "Panic during parallel offset of polygon");
            return Err(GeometryError::OffsetFailed {
                distance,
                reason: "offset routine panicked".to_string(),
            });
        }
    };

    let filled: Vec<Polygon<f64>> = shape
        .ccw_plines
        .iter()
        .filter_map(|ip| pline_to_polygon(&ip.polyline, segments_per_quadrant))
        .collect();
    let holes: Vec<Polygon<f64>> = shape
        .cw_plines
        .iter()
        .filter_map(|ip| pline_to_polygon(&ip.polyline, segments_per_quadrant))
        .collect();

    let filled = union_all(filled)?;
    if holes.is_empty() {
        return Ok(filled);
    }
    let holes = union_all(holes)?;
    difference(&filled, &holes)
}
