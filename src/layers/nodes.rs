//! Node overlay: materializes identified river nodes per map tile.

use std::sync::Arc;

use fxhash::FxHashMap;

use crate::core::constants::NODE_TILE_ZOOM;
use crate::core::geo::{LatLng, TileCoord};
use crate::data::nodes::RiverNode;
use crate::tiles::cache::NodeCache;
use crate::tiles::loader::NodeFetcher;
use crate::{Error, Result};

/// Overlay producing the node lists the render surface draws markers from.
///
/// Composes a fetcher with a shared LRU cache; holds no other state across
/// calls. Dropping an in-flight load cancels that tile alone.
pub struct NodeLayer {
    fetcher: Arc<dyn NodeFetcher>,
    cache: NodeCache,
    tile_zoom: u8,
}

impl NodeLayer {
    /// Creates an overlay with a default cache at the standard node tile zoom.
    pub fn new(fetcher: Arc<dyn NodeFetcher>) -> Self {
        Self::with_cache(fetcher, NodeCache::default())
    }

    /// Creates an overlay sharing an existing cache.
    pub fn with_cache(fetcher: Arc<dyn NodeFetcher>, cache: NodeCache) -> Self {
        Self {
            fetcher,
            cache,
            tile_zoom: NODE_TILE_ZOOM,
        }
    }

    /// Zoom level of the tiles this overlay requests.
    pub fn tile_zoom(&self) -> u8 {
        self.tile_zoom
    }

    pub fn cache(&self) -> &NodeCache {
        &self.cache
    }

    /// Nodes for the tile containing `center` at the overlay's tile zoom.
    pub async fn load_around(&self, center: &LatLng) -> Result<Arc<Vec<RiverNode>>> {
        self.load_tile(TileCoord::from_lat_lng(center, self.tile_zoom))
            .await
    }

    /// Nodes for one tile, from cache when possible.
    pub async fn load_tile(&self, coord: TileCoord) -> Result<Arc<Vec<RiverNode>>> {
        if !coord.is_valid() {
            return Err(Error::InvalidCoordinates(format!(
                "tile x={} y={} out of range for zoom {}",
                coord.x, coord.y, coord.z
            ))
            .into());
        }

        if let Some(nodes) = self.cache.get(&coord) {
            log::debug!("node tile {:?} served from cache", coord);
            return Ok(nodes);
        }

        let nodes = Arc::new(self.fetcher.fetch(coord).await?);
        self.cache.put(coord, Arc::clone(&nodes));
        Ok(nodes)
    }

    /// Loads every listed tile concurrently. Tiles succeed or fail
    /// independently; one bad tile never poisons its neighbors.
    pub async fn load_tiles(
        &self,
        coords: &[TileCoord],
    ) -> FxHashMap<TileCoord, Result<Arc<Vec<RiverNode>>>> {
        let tiles = coords
            .iter()
            .map(|&coord| async move { (coord, self.load_tile(coord).await) });
        futures::future::join_all(tiles).await.into_iter().collect()
    }
}
