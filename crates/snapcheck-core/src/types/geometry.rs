//! Planar geometry value types.
//!
//! These are plain data: the analysis engine converts them into whatever
//! representation its geometry backend needs.

use serde::{Deserialize, Serialize};

/// A 2D coordinate in the shared planar reference.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point with the given X and Y coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculates the distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// True if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Creates bounds from corner coordinates, normalising their order.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            min_x: x1.min(x2),
            min_y: y1.min(y2),
            max_x: x1.max(x2),
            max_y: y1.max(y2),
        }
    }

    /// Smallest bounds covering all points, `None` for an empty iterator.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Self::new(first.x, first.y, first.x, first.y);
        for p in iter {
            bounds.include(p);
        }
        Some(bounds)
    }

    /// Square box of half-size `half_extent` centred on `center`.
    pub fn around(center: Point, half_extent: f64) -> Self {
        Self::new(
            center.x - half_extent,
            center.y - half_extent,
            center.x + half_extent,
            center.y + half_extent,
        )
    }

    /// Grows the box to include `p`.
    pub fn include(&mut self, p: &Point) {
        self.min_x = self.min_x.min(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_x = self.max_x.max(p.x);
        self.max_y = self.max_y.max(p.y);
    }

    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Closed containment test.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

/// One polygon part: an exterior ring and its holes.
///
/// Rings may or may not repeat their first vertex at the end; consumers
/// must accept both.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PolygonPart {
    pub exterior: Vec<Point>,
    #[serde(default)]
    pub interiors: Vec<Vec<Point>>,
}

impl PolygonPart {
    pub fn new(exterior: Vec<Point>) -> Self {
        Self {
            exterior,
            interiors: Vec::new(),
        }
    }

    pub fn with_interiors(exterior: Vec<Point>, interiors: Vec<Vec<Point>>) -> Self {
        Self {
            exterior,
            interiors,
        }
    }

    /// Exterior followed by interior rings.
    pub fn rings(&self) -> impl Iterator<Item = &Vec<Point>> {
        std::iter::once(&self.exterior).chain(self.interiors.iter())
    }
}

/// Polygon or multi-polygon geometry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PolygonGeometry {
    pub parts: Vec<PolygonPart>,
}

impl PolygonGeometry {
    pub fn new(parts: Vec<PolygonPart>) -> Self {
        Self { parts }
    }

    /// Single-part polygon without holes.
    pub fn from_exterior(exterior: Vec<Point>) -> Self {
        Self {
            parts: vec![PolygonPart::new(exterior)],
        }
    }

    /// Axis-aligned rectangle, counter clockwise.
    pub fn rectangle(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self::from_exterior(vec![
            Point::new(min_x, min_y),
            Point::new(max_x, min_y),
            Point::new(max_x, max_y),
            Point::new(min_x, max_y),
        ])
    }

    pub fn is_empty(&self) -> bool {
        self.parts.iter().all(|p| p.exterior.is_empty())
    }

    pub fn is_multipart(&self) -> bool {
        self.parts.len() > 1
    }

    /// Every ring of every part.
    pub fn rings(&self) -> impl Iterator<Item = &Vec<Point>> {
        self.parts.iter().flat_map(|p| p.rings())
    }

    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(self.rings().flatten())
    }
}

/// Polyline or multi-polyline geometry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LineGeometry {
    pub parts: Vec<Vec<Point>>,
    #[serde(default)]
    pub multipart: bool,
}

impl LineGeometry {
    /// Single-part line.
    pub fn single(points: Vec<Point>) -> Self {
        Self {
            parts: vec![points],
            multipart: false,
        }
    }

    /// Multi-part line.
    pub fn multi(parts: Vec<Vec<Point>>) -> Self {
        Self {
            parts,
            multipart: true,
        }
    }

    pub fn is_multipart(&self) -> bool {
        self.multipart
    }

    pub fn is_empty(&self) -> bool {
        self.parts.iter().all(|p| p.is_empty())
    }

    /// Bounding box over all parts.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(self.parts.iter().flatten())
    }
}
