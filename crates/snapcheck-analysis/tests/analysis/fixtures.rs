use snapcheck_core::{
    Feature, LineFeature, LineGeometry, LineLayer, Point, PolygonFeature, PolygonGeometry,
    PolygonLayer,
};

pub fn line(id: u64, coords: &[(f64, f64)]) -> LineFeature {
    Feature::new(
        id,
        LineGeometry::single(coords.iter().map(|&(x, y)| Point::new(x, y)).collect()),
    )
}

pub fn square(id: u64, min: f64, max: f64) -> PolygonFeature {
    Feature::new(id, PolygonGeometry::rectangle(min, min, max, max))
}

pub fn bow_tie(id: u64) -> PolygonFeature {
    Feature::new(
        id,
        PolygonGeometry::from_exterior(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
        ]),
    )
}

/// Unit square plus a bow-tie, three roads around the square's east edge and
/// one line without vertices.
pub fn unit_square_scene() -> (PolygonLayer, LineLayer) {
    let polygons = PolygonLayer::new("parcels", vec![square(1, 0.0, 1.0), bow_tie(2)]);
    let lines = LineLayer::new(
        "roads",
        vec![
            line(10, &[(3.0, 0.5), (1.05, 0.5)]),
            line(11, &[(1.0, 0.5), (3.0, 0.8)]),
            line(12, &[(2.0, 0.5), (4.0, 0.5)]),
            Feature::new(13, LineGeometry::single(Vec::new())),
        ],
    );
    (polygons, lines)
}
