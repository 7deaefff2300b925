//! # Snapcheck IO
//!
//! Reads polygon and line layers from GeoJSON feature collections and writes
//! flagged endpoints back out as a GeoJSON point collection.

pub mod export;
pub mod store;

pub use export::{crs_urn, ExportError, ExportOutcome, Exporter, GeoJsonExporter};
pub use store::{
    load_line_layer, load_polygon_layer, parse_line_layer, parse_polygon_layer, StoreError,
};
