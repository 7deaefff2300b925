//! Polygon well-formedness checks.
//!
//! A polygon is valid when every ring has at least three distinct finite
//! vertices and non-zero area, no ring crosses itself or another ring, holes
//! lie inside their shell and not inside each other, and no part lies in the
//! filled area of another part. A part inside another part's hole (an
//! enclave) is valid. An empty polygon is valid; it is rejected later for
//! having no boundary.

use super::offset::{clean_ring, signed_area, to_line_string};
use geo::algorithm::coordinate_position::{CoordPos, CoordinatePosition};
use geo::algorithm::line_intersection::{line_intersection, LineIntersection};
use geo::{Coord, Line, Polygon};
use rstar::primitives::{GeomWithData, Rectangle};
use rstar::{RTree, AABB};
use snapcheck_core::{Point, PolygonGeometry};
use tracing::debug;

#[derive(Debug, Clone, Copy)]
struct Segment {
    part: usize,
    ring: usize,
    index: usize,
    ring_len: usize,
    line: Line<f64>,
}

impl Segment {
    fn is_adjacent(&self, other: &Segment) -> bool {
        if self.part != other.part || self.ring != other.ring {
            return false;
        }
        let (a, b) = (self.index.min(other.index), self.index.max(other.index));
        b - a == 1 || (a == 0 && b == self.ring_len - 1)
    }

    fn envelope(&self) -> Rectangle<[f64; 2]> {
        let s = self.line.start;
        let e = self.line.end;
        Rectangle::from_corners([s.x.min(e.x), s.y.min(e.y)], [s.x.max(e.x), s.y.max(e.y)])
    }
}

type IndexedSegment = GeomWithData<Rectangle<[f64; 2]>, usize>;

struct PartRings {
    shell_ring: Vec<Point>,
    shell: Polygon<f64>,
    holes: Vec<Polygon<f64>>,
}

impl PartRings {
    /// True if `ring` lies in the filled area of this part, not in a hole.
    fn covers(&self, ring: &[Point]) -> bool {
        ring_inside(ring, &self.shell) && !self.holes.iter().any(|hole| ring_inside(ring, hole))
    }
}

fn ring_polygon(ring: &[Point]) -> Polygon<f64> {
    Polygon::new(to_line_string(ring), Vec::new())
}

pub(crate) fn is_valid(polygon: &PolygonGeometry) -> bool {
    let mut segments = Vec::new();
    let mut parts: Vec<PartRings> = Vec::new();

    for (part_idx, part) in polygon.parts.iter().enumerate() {
        if part.exterior.is_empty() && part.interiors.is_empty() {
            continue;
        }

        let mut rings = Vec::with_capacity(1 + part.interiors.len());
        for ring in part.rings() {
            if ring.iter().any(|p| !p.is_finite()) {
                debug!(part = part_idx, "ring has non-finite coordinates");
                return false;
            }
            let cleaned = clean_ring(ring);
            if cleaned.len() < 3 || signed_area(&cleaned).abs() <= f64::EPSILON {
                debug!(part = part_idx, vertices = cleaned.len(), "degenerate ring");
                return false;
            }
            rings.push(cleaned);
        }

        let shell = ring_polygon(&rings[0]);
        let holes: Vec<Polygon<f64>> = rings.iter().skip(1).map(|r| ring_polygon(r)).collect();
        for (i, hole) in rings.iter().skip(1).enumerate() {
            if !ring_inside(hole, &shell) {
                debug!(part = part_idx, "hole outside its shell");
                return false;
            }
            if holes
                .iter()
                .enumerate()
                .any(|(j, other)| j != i && ring_inside(hole, other))
            {
                debug!(part = part_idx, "holes are nested");
                return false;
            }
        }

        let current = PartRings {
            shell_ring: rings[0].clone(),
            shell,
            holes,
        };
        for earlier in &parts {
            if earlier.covers(&current.shell_ring) || current.covers(&earlier.shell_ring) {
                debug!(part = part_idx, "polygon parts are nested");
                return false;
            }
        }
        parts.push(current);

        for (ring_idx, ring) in rings.iter().enumerate() {
            let n = ring.len();
            for i in 0..n {
                let a = ring[i];
                let b = ring[(i + 1) % n];
                segments.push(Segment {
                    part: part_idx,
                    ring: ring_idx,
                    index: i,
                    ring_len: n,
                    line: Line::new(Coord { x: a.x, y: a.y }, Coord { x: b.x, y: b.y }),
                });
            }
        }
    }

    !has_bad_intersection(&segments)
}

/// True if every vertex of `ring` is inside or on the edge of `shell`, and
/// at least one is strictly inside.
fn ring_inside(ring: &[Point], shell: &Polygon<f64>) -> bool {
    let mut strictly_inside = false;
    for p in ring {
        match shell.coordinate_position(&Coord { x: p.x, y: p.y }) {
            CoordPos::Outside => return false,
            CoordPos::Inside => strictly_inside = true,
            CoordPos::OnBoundary => {}
        }
    }
    strictly_inside
}

fn has_bad_intersection(segments: &[Segment]) -> bool {
    let tree: RTree<IndexedSegment> = RTree::bulk_load(
        segments
            .iter()
            .enumerate()
            .map(|(i, s)| GeomWithData::new(s.envelope(), i))
            .collect(),
    );

    for (i, seg) in segments.iter().enumerate() {
        let env = seg.envelope();
        let query = AABB::from_corners(env.lower(), env.upper());
        for hit in tree.locate_in_envelope_intersecting(&query) {
            let j = hit.data;
            if j <= i {
                continue;
            }
            let other = &segments[j];
            let Some(intersection) = line_intersection(seg.line, other.line) else {
                continue;
            };
            let bad = match intersection {
                LineIntersection::Collinear { .. } => true,
                LineIntersection::SinglePoint { is_proper, .. } => {
                    if seg.is_adjacent(other) {
                        false
                    } else if seg.part == other.part && seg.ring == other.ring {
                        true
                    } else {
                        // Distinct rings may touch at a vertex but not cross.
                        is_proper
                    }
                }
            };
            if bad {
                debug!(
                    first = i,
                    second = j,
                    "ring segments intersect"
                );
                return true;
            }
        }
    }
    false
}
