//! Prelude module for common rivulet types and functions
//!
//! Re-exports the types most callers need, for easy importing with
//! `use rivulet::prelude::*;`

pub use crate::core::constants::{
    DEFAULT_CENTER, HILBERT_ORDER, MAX_LATITUDE, NODE_TILE_ZOOM, NODE_ZOOM, TILE_SIZE,
};
pub use crate::core::geo::{project_to_pixel, LatLng, Point, TileCoord};

pub use crate::data::geojson::{RiverFeature, RiverGeoJson, RiverGeometry, RiverProperties};
pub use crate::data::nodes::{nodes_from_collection, RiverNode};

pub use crate::layers::nodes::NodeLayer;

pub use crate::spatial::hilbert::{index_to_point, pixel_to_node_id, point_to_index};
pub use crate::spatial::index::NodeIndex;

pub use crate::tiles::cache::NodeCache;
pub use crate::tiles::loader::{decode_nodes, NodeFetcher, NodeTileLoader};
pub use crate::tiles::source::{TileSource, UrlTemplateSource};

pub use crate::{Error, Result};

pub use std::sync::Arc;
