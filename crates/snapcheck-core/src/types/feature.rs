//! Features and layers as handed over by a feature store.

use super::geometry::{LineGeometry, PolygonGeometry};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Stable feature identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureId(pub u64);

impl std::fmt::Display for FeatureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for FeatureId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Geometry family of a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    Polygon,
    Line,
}

impl std::fmt::Display for LayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Polygon => write!(f, "polygon"),
            Self::Line => write!(f, "line"),
        }
    }
}

/// An identified geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature<G> {
    pub id: FeatureId,
    pub geometry: G,
}

impl<G> Feature<G> {
    pub fn new(id: impl Into<FeatureId>, geometry: G) -> Self {
        Self {
            id: id.into(),
            geometry,
        }
    }
}

pub type PolygonFeature = Feature<PolygonGeometry>;
pub type LineFeature = Feature<LineGeometry>;

/// A named collection of features plus the subset the user selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureLayer<G> {
    pub name: String,
    pub features: Vec<Feature<G>>,
    #[serde(default)]
    pub selection: BTreeSet<FeatureId>,
}

pub type PolygonLayer = FeatureLayer<PolygonGeometry>;
pub type LineLayer = FeatureLayer<LineGeometry>;

impl<G> FeatureLayer<G> {
    pub fn new(name: impl Into<String>, features: Vec<Feature<G>>) -> Self {
        Self {
            name: name.into(),
            features,
            selection: BTreeSet::new(),
        }
    }

    /// Replaces the selection. Ids that are not in the layer are kept but
    /// never match a feature.
    pub fn with_selection<I>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = FeatureId>,
    {
        self.selection = ids.into_iter().collect();
        self
    }

    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    /// Number of layer features that are selected.
    pub fn selected_feature_count(&self) -> usize {
        self.selected_features().count()
    }

    /// Selected features, in layer order.
    pub fn selected_features(&self) -> impl Iterator<Item = &Feature<G>> {
        self.features
            .iter()
            .filter(|f| self.selection.contains(&f.id))
    }

    /// Either all features or only the selected ones, in layer order.
    pub fn features_in_scope(&self, selected_only: bool) -> Vec<&Feature<G>> {
        if selected_only {
            self.selected_features().collect()
        } else {
            self.features.iter().collect()
        }
    }
}
