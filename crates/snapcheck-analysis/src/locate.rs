use snapcheck_core::constants::LOCATE_HALF_EXTENT;
use snapcheck_core::{Bounds, Point};

/// View box for zooming to a flagged point: the point with one unit of
/// margin on every side.
pub fn locate(point: Point) -> Bounds {
    Bounds::around(point, LOCATE_HALF_EXTENT)
}
