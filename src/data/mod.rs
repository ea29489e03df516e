pub mod geojson;
pub mod nodes;

// Re-exports for convenience
pub use geojson::{RiverFeature, RiverGeoJson, RiverGeometry, RiverProperties};
pub use nodes::{nodes_from_collection, RiverNode};
