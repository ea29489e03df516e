use std::sync::Arc;

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use crate::core::geo::LatLng;
use crate::data::nodes::RiverNode;

/// Entry stored in the R-tree: a node position in (lng, lat) axis order
/// plus the node's slot in the backing list.
#[derive(Debug, Clone)]
struct NodeEntry {
    position: [f64; 2],
    slot: usize,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.position)
    }
}

impl PointDistance for NodeEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.position[0] - point[0];
        let dy = self.position[1] - point[1];
        dx * dx + dy * dy
    }
}

/// R-tree backed nearest-node lookup over a set of river nodes.
///
/// This is the query side of the hover surface: the render collaborator
/// hands over a pointer position and shows the returned node's tooltip.
pub struct NodeIndex {
    rtree: RTree<NodeEntry>,
    nodes: Arc<Vec<RiverNode>>,
}

impl NodeIndex {
    /// Builds an index over a shared node list.
    pub fn new(nodes: Arc<Vec<RiverNode>>) -> Self {
        let entries = nodes
            .iter()
            .enumerate()
            .map(|(slot, node)| NodeEntry {
                position: [node.position.lng, node.position.lat],
                slot,
            })
            .collect();

        Self {
            rtree: RTree::bulk_load(entries),
            nodes,
        }
    }

    /// The node closest to `at` in coordinate space, if any.
    pub fn nearest(&self, at: &LatLng) -> Option<&RiverNode> {
        self.rtree
            .nearest_neighbor(&[at.lng, at.lat])
            .map(|entry| &self.nodes[entry.slot])
    }

    /// The nearest node plus its great-circle distance in meters.
    pub fn nearest_with_distance(&self, at: &LatLng) -> Option<(&RiverNode, f64)> {
        self.nearest(at)
            .map(|node| (node, at.distance_to(&node.position)))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::geojson::RiverProperties;

    fn node(lat: f64, lng: f64, node_id: u64) -> RiverNode {
        RiverNode {
            properties: RiverProperties {
                kind: "river".to_string(),
                river_category: "A".to_string(),
            },
            node_id,
            position: LatLng::new(lat, lng),
        }
    }

    #[test]
    fn test_nearest_picks_closest_node() {
        let nodes = Arc::new(vec![
            node(36.0, 139.0, 1),
            node(36.5, 139.5, 2),
            node(37.0, 140.0, 3),
        ]);
        let index = NodeIndex::new(nodes);

        assert_eq!(index.len(), 3);
        let hit = index.nearest(&LatLng::new(36.52, 139.48)).unwrap();
        assert_eq!(hit.node_id, 2);
    }

    #[test]
    fn test_nearest_with_distance() {
        let nodes = Arc::new(vec![node(36.0, 139.0, 7)]);
        let index = NodeIndex::new(nodes);

        let (hit, meters) = index
            .nearest_with_distance(&LatLng::new(36.0, 139.001))
            .unwrap();
        assert_eq!(hit.node_id, 7);
        // 0.001 degrees of longitude at lat 36 is roughly 90 m
        assert!(meters > 60.0 && meters < 120.0);
    }

    #[test]
    fn test_empty_index() {
        let index = NodeIndex::new(Arc::new(Vec::new()));
        assert!(index.is_empty());
        assert!(index.nearest(&LatLng::default()).is_none());
    }
}
