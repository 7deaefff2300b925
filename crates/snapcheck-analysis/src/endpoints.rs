//! Line endpoint extraction.
//!
//! Only the first part of a multi-part line contributes endpoints. Later
//! parts are ignored even when their ends lie in a boundary band.

use smallvec::SmallVec;
use snapcheck_core::{EndpointRole, FeatureId, LineError, LineFeature, Point};

/// One end of a line that may need snapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateEndpoint {
    pub line_id: FeatureId,
    pub role: EndpointRole,
    pub point: Point,
}

/// Start and end of a line, in that order.
pub type Endpoints = SmallVec<[CandidateEndpoint; 2]>;

/// Extracts the first and last vertex of the line's first part.
///
/// A single-vertex part yields both roles at the same point.
pub fn endpoints(feature: &LineFeature) -> Result<Endpoints, LineError> {
    let first_part = feature.geometry.parts.first().ok_or(LineError::NoParts)?;
    let (Some(&start), Some(&end)) = (first_part.first(), first_part.last()) else {
        return Err(LineError::EmptyLineGeometry);
    };

    let mut out = Endpoints::new();
    out.push(CandidateEndpoint {
        line_id: feature.id,
        role: EndpointRole::Start,
        point: start,
    });
    out.push(CandidateEndpoint {
        line_id: feature.id,
        role: EndpointRole::End,
        point: end,
    });
    Ok(out)
}
