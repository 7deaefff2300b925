//! Geometry adapter.
//!
//! The detection pipeline only needs a handful of planar primitives. They
//! are collected in [`GeometryAdapter`] so the pipeline does not depend on a
//! particular geometry library. [`GeoEngine`] implements it with
//! `cavalier_contours` offsets and `geo` boolean/metric operations.

mod engine;
mod offset;
mod validity;

pub use engine::GeoEngine;

use snapcheck_core::{Bounds, GeometryError, Point, PolygonGeometry};
use std::fmt::Debug;

/// Planar primitives used by the detection pipeline.
///
/// All operations are pure functions of their inputs.
pub trait GeometryAdapter {
    /// An area (possibly empty, possibly several disjoint pieces).
    type Region: Clone + Debug;
    /// A one-dimensional curve made of one or more line strings.
    type Curve: Clone + Debug;

    /// All points within `distance` of `polygon`.
    ///
    /// Positive distances dilate, negative ones erode, zero returns the
    /// polygon itself. Eroding past the polygon's width yields an empty
    /// region, not an error.
    fn buffer(&self, polygon: &PolygonGeometry, distance: f64)
        -> Result<Self::Region, GeometryError>;

    /// The rings of `polygon` as a curve. Empty for an empty polygon.
    fn boundary(&self, polygon: &PolygonGeometry) -> Self::Curve;

    /// True if the curve has no segment.
    fn curve_is_empty(&self, curve: &Self::Curve) -> bool;

    /// The part of `a` not covered by `b`.
    fn difference(&self, a: &Self::Region, b: &Self::Region)
        -> Result<Self::Region, GeometryError>;

    /// Axis-aligned box of the region, `None` when the region is empty.
    fn bounding_box(&self, region: &Self::Region) -> Option<Bounds>;

    /// Closed containment: interior or edge.
    fn contains(&self, region: &Self::Region, point: Point) -> bool;

    /// Euclidean distance from `point` to the nearest point of `curve`.
    ///
    /// `f64::INFINITY` for an empty curve.
    fn distance(&self, point: Point, curve: &Self::Curve) -> f64;

    /// Well-formedness: closed simple rings, holes inside their shell, no
    /// crossing parts.
    fn is_valid(&self, polygon: &PolygonGeometry) -> bool;
}
