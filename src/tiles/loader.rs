use async_trait::async_trait;
use once_cell::sync::Lazy;

use crate::core::geo::TileCoord;
use crate::data::geojson::RiverGeoJson;
use crate::data::nodes::{nodes_from_collection, RiverNode};
use crate::tiles::source::TileSource;
use crate::{Error, Result};

/// Shared async HTTP client for node tile fetching. Public tile servers
/// expect an identifying User-Agent.
pub(crate) static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .user_agent("rivulet/0.1.0")
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .expect("failed to build reqwest client")
});

/// Anything that can produce one tile's worth of identified river nodes.
///
/// The HTTP loader below is the production implementation; tests substitute
/// in-memory fetchers.
#[async_trait]
pub trait NodeFetcher: Send + Sync {
    async fn fetch(&self, coord: TileCoord) -> Result<Vec<RiverNode>>;
}

/// Parses a GeoJSON tile body and flattens it into identified nodes.
pub fn decode_nodes(body: &str) -> Result<Vec<RiverNode>> {
    let collection = RiverGeoJson::from_str(body)?;
    Ok(nodes_from_collection(&collection))
}

/// Fetches river-centerline tiles over HTTP and runs them through the node
/// pipeline. Each tile is one independent GET; a failed tile affects
/// nothing but its own result.
pub struct NodeTileLoader<S: TileSource> {
    source: S,
}

impl<S: TileSource> NodeTileLoader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Downloads and decodes a single tile.
    pub async fn load(&self, coord: TileCoord) -> Result<Vec<RiverNode>> {
        let url = self.source.url(coord);
        log::debug!("fetching node tile {:?} from {}", coord, url);

        let resp = HTTP_CLIENT
            .get(&url)
            .send()
            .await
            .map_err(Error::Network)?;
        if !resp.status().is_success() {
            return Err(Error::Http {
                status: resp.status().as_u16(),
                url,
            }
            .into());
        }

        let body = resp.text().await.map_err(Error::Network)?;
        let nodes = decode_nodes(&body)?;
        log::info!("node tile {:?}: {} nodes", coord, nodes.len());
        Ok(nodes)
    }
}

#[async_trait]
impl<S: TileSource> NodeFetcher for NodeTileLoader<S> {
    async fn fetch(&self, coord: TileCoord) -> Result<Vec<RiverNode>> {
        self.load(coord).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_nodes() {
        let body = r#"
        {
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": {"type": "river", "rivCtg": "A"},
                    "geometry": {
                        "type": "LineString",
                        "coordinates": [[139.0, 36.0], [139.001, 36.001]]
                    }
                }
            ]
        }
        "#;

        let nodes = decode_nodes(body).unwrap();
        assert_eq!(nodes.len(), 2);
        assert_ne!(nodes[0].node_id, nodes[1].node_id);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_nodes("<html>not geojson</html>").is_err());
    }
}
