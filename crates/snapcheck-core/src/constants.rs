//! Shared numeric and naming constants.

/// Distances strictly below this value count as "on the boundary".
///
/// Expressed in the linear unit of the input coordinates.
pub const SNAP_TOLERANCE: f64 = 1e-6;

/// Default half-width of the boundary band.
pub const DEFAULT_BUFFER_DISTANCE: f64 = 0.1;

/// Largest accepted buffer distance.
pub const MAX_BUFFER_DISTANCE: f64 = 1000.0;

/// Segments used to approximate a quarter circle when flattening round joins.
pub const ARC_SEGMENTS_PER_QUADRANT: u32 = 8;

/// Coordinate reference stamped on exported point datasets.
pub const DEFAULT_EXPORT_CRS: &str = "EPSG:2100";

/// Layer name written into exported point datasets.
pub const DEFAULT_EXPORT_LAYER_NAME: &str = "unsnapped_line_endpoints";

/// Half-size of the view box returned when locating a flagged point.
pub const LOCATE_HALF_EXTENT: f64 = 1.0;
