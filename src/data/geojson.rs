//! Serde model of the upstream river-centerline tiles.
//!
//! The GSI experimental layer serves plain GeoJSON feature collections of
//! LineString features; each feature carries a feature-type tag and a river
//! category. The model is deliberately no wider than that shape, so anything
//! else in a response surfaces as a parse error.

use serde::{Deserialize, Serialize};

/// Properties attached to every river-centerline feature, copied verbatim
/// from the upstream JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiverProperties {
    /// Feature type tag (JSON key `type`).
    #[serde(rename = "type")]
    pub kind: String,
    /// River category tag (JSON key `rivCtg`).
    #[serde(rename = "rivCtg")]
    pub river_category: String,
}

/// Geometry of a river-centerline feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RiverGeometry {
    LineString { coordinates: Vec<[f64; 2]> },
}

impl RiverGeometry {
    /// Vertices in source order as (lng, lat) pairs
    pub fn coordinates(&self) -> &[[f64; 2]] {
        match self {
            RiverGeometry::LineString { coordinates } => coordinates,
        }
    }
}

/// A single feature: one centerline segment with its properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiverFeature {
    pub geometry: RiverGeometry,
    pub properties: RiverProperties,
}

/// Root object of a river-centerline tile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RiverGeoJson {
    FeatureCollection { features: Vec<RiverFeature> },
}

impl RiverGeoJson {
    /// Parses a raw GeoJSON string
    pub fn from_str(geojson_str: &str) -> crate::Result<Self> {
        let data: RiverGeoJson = serde_json::from_str(geojson_str)
            .map_err(|e| crate::Error::ParseError(format!("Invalid GeoJSON: {}", e)))?;
        Ok(data)
    }

    /// All features in the collection, in source order
    pub fn features(&self) -> &[RiverFeature] {
        match self {
            RiverGeoJson::FeatureCollection { features } => features,
        }
    }
}
