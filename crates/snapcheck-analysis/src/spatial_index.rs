//! Spatial index over line features.
//!
//! Lines are keyed by their bounding box in an R-tree, tagged with their
//! position in the caller's line list. Ids are not required to be unique, so
//! they are never used as keys. Queries return the positions of every line
//! whose box intersects the query box; the order is whatever the tree yields
//! and callers must not rely on it.

use rstar::primitives::{GeomWithData, Rectangle};
use rstar::{RTree, AABB};
use snapcheck_core::{Bounds, LineFeature};

type IndexedBox = GeomWithData<Rectangle<[f64; 2]>, usize>;

/// R-tree of line bounding boxes.
#[derive(Debug, Default)]
pub struct LineIndex {
    tree: RTree<IndexedBox>,
}

impl LineIndex {
    pub fn new() -> Self {
        Self { tree: RTree::new() }
    }

    /// Inserts one bounding box for the line at `position`.
    pub fn insert(&mut self, position: usize, bounds: &Bounds) {
        let rect = Rectangle::from_corners([bounds.min_x, bounds.min_y], [bounds.max_x, bounds.max_y]);
        self.tree.insert(GeomWithData::new(rect, position));
    }

    /// Inserts a line by its bounding box over all parts.
    ///
    /// Returns `false` for a line without vertices, which is not indexed.
    pub fn insert_feature(&mut self, position: usize, feature: &LineFeature) -> bool {
        match feature.geometry.bounds() {
            Some(bounds) => {
                self.insert(position, &bounds);
                true
            }
            None => false,
        }
    }

    /// Positions whose box intersects `bounds`, touching included.
    pub fn query(&self, bounds: &Bounds) -> Vec<usize> {
        let envelope = AABB::from_corners([bounds.min_x, bounds.min_y], [bounds.max_x, bounds.max_y]);
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|entry| entry.data)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}
