//! # Rivulet
//!
//! A small map-viewer core that turns river-centerline vector tiles into
//! identified points: every LineString vertex is projected into zoom-18
//! pixel space and labelled with its order-26 Hilbert curve index, the
//! "node ID" shown by the hover tooltip.
//!
//! Rendering, compositing and camera control belong to an external map
//! surface; this crate provides the data side of the overlay: tile URL
//! sources, an async GeoJSON tile loader, the projection/indexing pipeline,
//! an LRU node cache and a nearest-node query for hover.

pub mod core;
pub mod data;
pub mod layers;
pub mod prelude;
pub mod spatial;
pub mod tiles;

pub use crate::core::constants;

// Re-export public API
pub use crate::core::geo::{project_to_pixel, LatLng, Point, TileCoord};

pub use crate::data::{
    geojson::{RiverFeature, RiverGeoJson, RiverGeometry, RiverProperties},
    nodes::{nodes_from_collection, RiverNode},
};

pub use crate::layers::nodes::NodeLayer;

pub use crate::spatial::{
    hilbert::{pixel_to_node_id, point_to_index},
    index::NodeIndex,
};

pub use crate::tiles::{
    cache::NodeCache,
    loader::{decode_nodes, NodeFetcher, NodeTileLoader},
    source::{TileSource, UrlTemplateSource},
};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum RivuletError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {status} fetching {url}")]
    Http { status: u16, url: String },

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),
}

/// Error type alias for convenience
pub type Error = RivuletError;
