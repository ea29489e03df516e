//! Identified river nodes: the output unit of the tile pipeline.

use serde::{Deserialize, Serialize};

use crate::core::constants::{HILBERT_ORDER, NODE_ZOOM};
use crate::core::geo::{project_to_pixel, LatLng};
use crate::data::geojson::{RiverGeoJson, RiverProperties};
use crate::spatial::hilbert::pixel_to_node_id;

/// One identified point on a river centerline.
///
/// Every LineString vertex of a tile becomes one node: the feature's
/// properties (an owned copy per node), the vertex position unchanged, and
/// the node ID derived from the zoom-18 pixel position via the order-26
/// Hilbert curve. The ID is a display label, not a key; vertices that share
/// a zoom-18 pixel share an ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiverNode {
    pub properties: RiverProperties,
    pub node_id: u64,
    pub position: LatLng,
}

impl RiverNode {
    /// Builds the node for a single vertex.
    pub fn from_vertex(properties: RiverProperties, lng: f64, lat: f64) -> Self {
        let pixel = project_to_pixel(lng, lat, NODE_ZOOM);
        let node_id = pixel_to_node_id(pixel, HILBERT_ORDER);

        Self {
            properties,
            node_id,
            position: LatLng::new(lat, lng),
        }
    }

    /// Hover text shown by the render surface.
    pub fn tooltip(&self) -> String {
        format!(
            "NodeID: {}\nType: {}\nCategory: {}",
            self.node_id, self.properties.kind, self.properties.river_category
        )
    }
}

/// Flattens a tile's feature collection into one node per vertex.
///
/// Feature order and vertex order are preserved. Each node gets its own
/// copy of the feature's properties, so per-node edits cannot leak across
/// siblings. No deduplication happens here.
pub fn nodes_from_collection(collection: &RiverGeoJson) -> Vec<RiverNode> {
    collection
        .features()
        .iter()
        .flat_map(|feature| {
            feature
                .geometry
                .coordinates()
                .iter()
                .map(move |&[lng, lat]| RiverNode::from_vertex(feature.properties.clone(), lng, lat))
        })
        .collect()
}
