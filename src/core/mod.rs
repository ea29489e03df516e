pub mod constants;
pub mod geo;

// Re-exports for convenience
pub use geo::{project_to_pixel, LatLng, Point, TileCoord};
