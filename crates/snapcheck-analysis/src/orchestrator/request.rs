use super::cancel::CancellationToken;
use snapcheck_core::constants::{DEFAULT_BUFFER_DISTANCE, MAX_BUFFER_DISTANCE};
use snapcheck_core::{ConfigurationError, LayerKind, LineLayer, PolygonLayer};

/// Inputs of one analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisRequest<'a> {
    pub polygons: Option<&'a PolygonLayer>,
    pub lines: Option<&'a LineLayer>,
    /// Half-width of the boundary band, in layer units.
    pub buffer_distance: f64,
    /// Restrict both layers to their selections.
    pub selected_only: bool,
    pub cancel: Option<CancellationToken>,
}

impl<'a> AnalysisRequest<'a> {
    pub fn new(polygons: Option<&'a PolygonLayer>, lines: Option<&'a LineLayer>) -> Self {
        Self {
            polygons,
            lines,
            buffer_distance: DEFAULT_BUFFER_DISTANCE,
            selected_only: false,
            cancel: None,
        }
    }

    pub fn with_buffer_distance(mut self, distance: f64) -> Self {
        self.buffer_distance = distance;
        self
    }

    pub fn selected_only(mut self, selected_only: bool) -> Self {
        self.selected_only = selected_only;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(|t| t.is_cancelled())
    }

    /// Checks the preconditions of a run and hands back both layers.
    pub fn validate(&self) -> Result<(&'a PolygonLayer, &'a LineLayer), ConfigurationError> {
        let polygons = self
            .polygons
            .ok_or(ConfigurationError::MissingLayer(LayerKind::Polygon))?;
        let lines = self
            .lines
            .ok_or(ConfigurationError::MissingLayer(LayerKind::Line))?;

        if self.selected_only {
            if polygons.selected_feature_count() == 0 {
                return Err(ConfigurationError::EmptySelection(LayerKind::Polygon));
            }
            if lines.selected_feature_count() == 0 {
                return Err(ConfigurationError::EmptySelection(LayerKind::Line));
            }
        }

        let d = self.buffer_distance;
        if !d.is_finite() || !(0.0..=MAX_BUFFER_DISTANCE).contains(&d) {
            return Err(ConfigurationError::InvalidBufferDistance {
                distance: d,
                max: MAX_BUFFER_DISTANCE,
            });
        }

        Ok((polygons, lines))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snapcheck_core::{Feature, FeatureId, LineGeometry, PolygonGeometry};

    fn layers() -> (PolygonLayer, LineLayer) {
        let polygons = PolygonLayer::new(
            "parcels",
            vec![Feature::new(1, PolygonGeometry::rectangle(0.0, 0.0, 1.0, 1.0))],
        );
        let lines = LineLayer::new("roads", vec![Feature::new(1, LineGeometry::default())]);
        (polygons, lines)
    }

    #[test]
    fn test_missing_layers() {
        let (polygons, lines) = layers();
        let err = AnalysisRequest::new(None, Some(&lines)).validate().unwrap_err();
        assert_eq!(err, ConfigurationError::MissingLayer(LayerKind::Polygon));
        let err = AnalysisRequest::new(Some(&polygons), None).validate().unwrap_err();
        assert_eq!(err, ConfigurationError::MissingLayer(LayerKind::Line));
    }

    #[test]
    fn test_empty_selection() {
        let (polygons, lines) = layers();
        let err = AnalysisRequest::new(Some(&polygons), Some(&lines))
            .selected_only(true)
            .validate()
            .unwrap_err();
        assert_eq!(err, ConfigurationError::EmptySelection(LayerKind::Polygon));

        let polygons = polygons.with_selection([FeatureId(1)]);
        let err = AnalysisRequest::new(Some(&polygons), Some(&lines))
            .selected_only(true)
            .validate()
            .unwrap_err();
        assert_eq!(err, ConfigurationError::EmptySelection(LayerKind::Line));
    }

    #[test]
    fn test_buffer_distance_range() {
        let (polygons, lines) = layers();
        for bad in [-0.1, 1000.5, f64::NAN, f64::INFINITY] {
            let result = AnalysisRequest::new(Some(&polygons), Some(&lines))
                .with_buffer_distance(bad)
                .validate();
            assert!(
                matches!(result, Err(ConfigurationError::InvalidBufferDistance { .. })),
                "distance {} accepted",
                bad
            );
        }
        for good in [0.0, 0.1, 1000.0] {
            assert!(AnalysisRequest::new(Some(&polygons), Some(&lines))
                .with_buffer_distance(good)
                .validate()
                .is_ok());
        }
    }
}
