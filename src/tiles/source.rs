use crate::core::constants::{BASE_TILE_URL, RIVER_TILE_URL};
use crate::core::geo::TileCoord;

/// Trait representing anything that can produce tile URLs for a given coordinate.
pub trait TileSource: Send + Sync {
    /// Build a URL for the requested `coord`.
    fn url(&self, coord: TileCoord) -> String;
}

/// Source built from a `{z}/{x}/{y}` URL template.
pub struct UrlTemplateSource {
    template: String,
}

impl UrlTemplateSource {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// GSI experimental river centerline tiles (GeoJSON).
    pub fn gsi_river_centerline() -> Self {
        Self::new(RIVER_TILE_URL)
    }

    /// GSI standard raster base tiles, for the render surface's base layer.
    pub fn gsi_standard() -> Self {
        Self::new(BASE_TILE_URL)
    }
}

impl TileSource for UrlTemplateSource {
    fn url(&self, coord: TileCoord) -> String {
        self.template
            .replace("{z}", &coord.z.to_string())
            .replace("{x}", &coord.x.to_string())
            .replace("{y}", &coord.y.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_substitution() {
        let source = UrlTemplateSource::new("https://example.com/{z}/{x}/{y}.geojson");
        assert_eq!(
            source.url(TileCoord::new(58114, 25645, 16)),
            "https://example.com/16/58114/25645.geojson"
        );
    }

    #[test]
    fn test_gsi_sources() {
        let coord = TileCoord::new(1, 2, 3);
        let river = UrlTemplateSource::gsi_river_centerline().url(coord);
        assert_eq!(
            river,
            "https://cyberjapandata.gsi.go.jp/xyz/experimental_rvrcl/3/1/2.geojson"
        );

        let base = UrlTemplateSource::gsi_standard().url(coord);
        assert_eq!(base, "https://cyberjapandata.gsi.go.jp/xyz/std/3/1/2.png");
    }
}
