use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};

use lru::LruCache;

use crate::core::geo::TileCoord;
use crate::data::nodes::RiverNode;

/// In-memory per-tile node cache with LRU eviction.
///
/// The render surface keeps only the visible tiles alive; evicted entries
/// drop their node lists once the last `Arc` clone goes away. Clones of the
/// cache share one store.
pub struct NodeCache {
    cache: Arc<Mutex<LruCache<TileCoord, Arc<Vec<RiverNode>>>>>,
}

impl NodeCache {
    /// Create a new cache holding up to `capacity` tiles
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::new(256).unwrap());
        Self {
            cache: Arc::new(Mutex::new(LruCache::new(capacity))),
        }
    }

    /// Get a tile's nodes from the cache
    pub fn get(&self, coord: &TileCoord) -> Option<Arc<Vec<RiverNode>>> {
        self.cache.lock().ok()?.get(coord).cloned()
    }

    /// Insert a tile's nodes into the cache
    pub fn insert(&self, coord: TileCoord, nodes: Vec<RiverNode>) {
        if let Ok(mut cache) = self.cache.lock() {
            cache.put(coord, Arc::new(nodes));
        }
    }

    /// Insert a tile's nodes into the cache (using Arc directly)
    pub fn put(&self, coord: TileCoord, nodes: Arc<Vec<RiverNode>>) {
        if let Ok(mut cache) = self.cache.lock() {
            cache.put(coord, nodes);
        }
    }

    /// Check if a tile is cached
    pub fn contains(&self, coord: &TileCoord) -> bool {
        self.cache
            .lock()
            .ok()
            .map(|cache| cache.contains(coord))
            .unwrap_or(false)
    }

    /// Drop a single tile
    pub fn remove(&self, coord: &TileCoord) -> Option<Arc<Vec<RiverNode>>> {
        self.cache.lock().ok()?.pop(coord)
    }

    /// Drop every cached tile
    pub fn clear(&self) {
        if let Ok(mut cache) = self.cache.lock() {
            cache.clear();
        }
    }

    /// Number of cached tiles
    pub fn len(&self) -> usize {
        self.cache.lock().ok().map(|cache| cache.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of tiles the cache holds before evicting
    pub fn capacity(&self) -> usize {
        self.cache
            .lock()
            .ok()
            .map(|cache| cache.cap().get())
            .unwrap_or(0)
    }
}

impl Clone for NodeCache {
    fn clone(&self) -> Self {
        Self {
            cache: Arc::clone(&self.cache),
        }
    }
}

impl Default for NodeCache {
    fn default() -> Self {
        Self::new(256)
    }
}
