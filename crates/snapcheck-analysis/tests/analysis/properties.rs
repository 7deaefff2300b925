use proptest::prelude::*;
use snapcheck_analysis::{build_zone, classify, Classification, GeoEngine};
use snapcheck_core::{Feature, Point, PolygonGeometry};

fn square_feature() -> snapcheck_core::PolygonFeature {
    Feature::new(1, PolygonGeometry::rectangle(0.0, 0.0, 10.0, 10.0))
}

/// Point on the square's boundary at arc length `t` in [0, 40).
fn on_boundary(t: f64) -> Point {
    match t {
        t if t < 10.0 => Point::new(t, 0.0),
        t if t < 20.0 => Point::new(10.0, t - 10.0),
        t if t < 30.0 => Point::new(30.0 - t, 10.0),
        t => Point::new(0.0, 40.0 - t),
    }
}

proptest! {
    #[test]
    fn boundary_points_are_snapped(t in 0.0f64..40.0, d in 0.01f64..2.0) {
        let engine = GeoEngine::new();
        let zone = build_zone(&engine, &square_feature(), d).unwrap();
        prop_assert_eq!(classify(&engine, &zone, on_boundary(t)), Classification::Snapped);
    }

    #[test]
    fn far_points_are_irrelevant(x in 13.0f64..100.0, y in -50.0f64..50.0, d in 0.01f64..2.0) {
        let engine = GeoEngine::new();
        let zone = build_zone(&engine, &square_feature(), d).unwrap();
        prop_assert_eq!(classify(&engine, &zone, Point::new(x, y)), Classification::Irrelevant);
    }

    #[test]
    fn points_beside_an_edge_are_unsnapped(y in 1.0f64..9.0, offset in 0.05f64..0.9) {
        let engine = GeoEngine::new();
        let zone = build_zone(&engine, &square_feature(), 1.0).unwrap();
        prop_assert_eq!(
            classify(&engine, &zone, Point::new(10.0 + offset, y)),
            Classification::Unsnapped
        );
        prop_assert_eq!(
            classify(&engine, &zone, Point::new(10.0 - offset, y)),
            Classification::Unsnapped
        );
    }
}
