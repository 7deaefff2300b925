//! Data model for features, layers and planar geometry.
//!
//! ## Modules
//!
//! - [`geometry`]: points, bounding boxes, polygon and line geometry.
//! - [`feature`]: feature ids, features and layers with selections.
//! - [`aliases`]: callback type aliases.

pub mod aliases;
pub mod feature;
pub mod geometry;

pub use aliases::*;
pub use feature::{
    Feature, FeatureId, FeatureLayer, LayerKind, LineFeature, LineLayer, PolygonFeature,
    PolygonLayer,
};
pub use geometry::{Bounds, LineGeometry, Point, PolygonGeometry, PolygonPart};
