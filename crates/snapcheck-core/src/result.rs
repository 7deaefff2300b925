//! Result model of an analysis run.

use crate::types::{FeatureId, Point};
use serde::{Deserialize, Serialize};

/// Which end of a line an endpoint is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EndpointRole {
    Start,
    End,
}

impl std::fmt::Display for EndpointRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => write!(f, "Start"),
            Self::End => write!(f, "End"),
        }
    }
}

/// A line endpoint confirmed as unsnapped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlaggedPoint {
    pub line_id: FeatureId,
    pub role: EndpointRole,
    pub point: Point,
    /// Polygon whose boundary band caught the endpoint.
    pub polygon_id: FeatureId,
}

impl FlaggedPoint {
    /// Display label, `FID {line id} | {Start|End}`.
    pub fn label(&self) -> String {
        format!("FID {} | {}", self.line_id, self.role)
    }
}

/// Ordered flagged points of one run.
///
/// Order is polygon iteration order, then candidate order within a polygon.
/// It is not a geometric sort.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub flagged: Vec<FlaggedPoint>,
}

impl AnalysisResult {
    pub fn new(flagged: Vec<FlaggedPoint>) -> Self {
        Self { flagged }
    }

    pub fn len(&self) -> usize {
        self.flagged.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flagged.is_empty()
    }

    /// `(label, point)` pairs in result order.
    pub fn entries(&self) -> Vec<(String, Point)> {
        self.flagged.iter().map(|f| (f.label(), f.point)).collect()
    }

    pub fn labels(&self) -> Vec<String> {
        self.flagged.iter().map(FlaggedPoint::label).collect()
    }

    pub fn points(&self) -> Vec<Point> {
        self.flagged.iter().map(|f| f.point).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FlaggedPoint> {
        self.flagged.iter()
    }
}

impl<'a> IntoIterator for &'a AnalysisResult {
    type Item = &'a FlaggedPoint;
    type IntoIter = std::slice::Iter<'a, FlaggedPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.flagged.iter()
    }
}
