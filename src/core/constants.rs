//! Constants shared across the node-ID pipeline.
//! Several of these form a compatibility contract: changing the index zoom,
//! the Hilbert order, the tile size or the latitude limit changes every
//! emitted node ID.

/// Square tile size in pixels.
pub const TILE_SIZE: u32 = 256;

/// Zoom level at which node pixel coordinates are computed.
pub const NODE_ZOOM: u8 = 18;

/// Hilbert curve order for node IDs. Zoom-18 pixel space spans
/// 2^18 tiles of 256 px, so the curve covers a 2^26 x 2^26 grid.
pub const HILBERT_ORDER: u32 = 26;

/// Zoom level of the upstream river-centerline vector tiles.
pub const NODE_TILE_ZOOM: u8 = 16;

/// Web Mercator latitude limit, the projection's vertical reference.
pub const MAX_LATITUDE: f64 = 85.05112878;

/// GSI experimental river centerline tiles (GeoJSON LineString features).
pub const RIVER_TILE_URL: &str =
    "https://cyberjapandata.gsi.go.jp/xyz/experimental_rvrcl/{z}/{x}/{y}.geojson";

/// GSI standard raster base layer, consumed by the render surface.
pub const BASE_TILE_URL: &str = "https://cyberjapandata.gsi.go.jp/xyz/std/{z}/{x}/{y}.png";

/// Default camera position (lat, lng): the Tone river near Maebashi.
pub const DEFAULT_CENTER: (f64, f64) = (36.486692, 139.0192649);
