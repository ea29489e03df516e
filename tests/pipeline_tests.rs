//! Offline end-to-end tests: GeoJSON tile body -> identified nodes ->
//! hover query, with no network involved.

use std::sync::Arc;

use rivulet::prelude::*;

/// A two-feature tile body shaped like the upstream river-centerline layer.
const TILE_BODY: &str = r#"
{
    "type": "FeatureCollection",
    "features": [
        {
            "type": "Feature",
            "properties": {"type": "river", "rivCtg": "A"},
            "geometry": {
                "type": "LineString",
                "coordinates": [
                    [139.0171509, 36.4850266],
                    [139.0180301, 36.4857823],
                    [139.0192649, 36.4866920]
                ]
            }
        },
        {
            "type": "Feature",
            "properties": {"type": "tributary", "rivCtg": "B"},
            "geometry": {
                "type": "LineString",
                "coordinates": [
                    [139.0201441, 36.4875131],
                    [139.0213788, 36.4883342]
                ]
            }
        }
    ]
}
"#;

#[test]
fn test_tile_body_flattens_to_one_node_per_vertex() {
    let nodes = decode_nodes(TILE_BODY).unwrap();
    assert_eq!(nodes.len(), 5);

    // feature order, then vertex order
    assert_eq!(nodes[0].position, LatLng::new(36.4850266, 139.0171509));
    assert_eq!(nodes[4].position, LatLng::new(36.4883342, 139.0213788));

    // feature properties land on every vertex of that feature
    assert!(nodes[..3]
        .iter()
        .all(|n| n.properties.kind == "river" && n.properties.river_category == "A"));
    assert!(nodes[3..]
        .iter()
        .all(|n| n.properties.kind == "tributary" && n.properties.river_category == "B"));
}

#[test]
fn test_node_ids_match_projection_and_curve() {
    let nodes = decode_nodes(TILE_BODY).unwrap();

    for node in &nodes {
        let pixel = project_to_pixel(node.position.lng, node.position.lat, NODE_ZOOM);
        assert_eq!(node.node_id, pixel_to_node_id(pixel, HILBERT_ORDER));
    }

    // distinct vertices here sit well over a pixel apart
    let mut ids: Vec<u64> = nodes.iter().map(|n| n.node_id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), nodes.len());
}

#[test]
fn test_decoding_is_deterministic() {
    assert_eq!(decode_nodes(TILE_BODY).unwrap(), decode_nodes(TILE_BODY).unwrap());
}

#[test]
fn test_hover_query_over_decoded_tile() {
    let nodes = Arc::new(decode_nodes(TILE_BODY).unwrap());
    let index = NodeIndex::new(Arc::clone(&nodes));

    // hover right next to the last vertex of the first feature
    let (hit, meters) = index
        .nearest_with_distance(&LatLng::new(36.4866900, 139.0192600))
        .unwrap();
    assert_eq!(hit.position, LatLng::new(36.4866920, 139.0192649));
    assert!(meters < 5.0);

    let tooltip = hit.tooltip();
    assert!(tooltip.contains(&format!("NodeID: {}", hit.node_id)));
    assert!(tooltip.contains("Type: river"));
    assert!(tooltip.contains("Category: A"));
}

#[test]
fn test_malformed_tile_body_is_an_error() {
    assert!(decode_nodes("{\"type\": \"FeatureCollection\"}").is_err());
    assert!(decode_nodes("[]").is_err());
}

mod overlay {
    use super::*;
    use async_trait::async_trait;

    /// Serves the canned tile body for every coordinate.
    struct CannedFetcher;

    #[async_trait]
    impl NodeFetcher for CannedFetcher {
        async fn fetch(&self, _coord: TileCoord) -> rivulet::Result<Vec<RiverNode>> {
            decode_nodes(TILE_BODY)
        }
    }

    #[tokio::test]
    async fn test_overlay_round_trip() {
        let layer = NodeLayer::new(Arc::new(CannedFetcher));
        let center = LatLng::new(36.486692, 139.0192649);

        let nodes = layer.load_around(&center).await.unwrap();
        assert_eq!(nodes.len(), 5);

        // second load comes from the cache and yields the same list
        let again = layer.load_around(&center).await.unwrap();
        assert!(Arc::ptr_eq(&nodes, &again));
    }
}
