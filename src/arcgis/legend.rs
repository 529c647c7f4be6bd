//! MapServer legend (`/MapServer/legend`).
//!
//! Legend entries are not derived from tileset styles; the single root layer
//! is listed with an empty set of legend elements.

use serde::Serialize;

use crate::error::MetadataError;
use crate::tileset::TilesetDescriptor;

use super::constants::ROOT_LAYER_ID;
use super::keys;

/// Legend for one layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendLayer {
    pub layer_id: u32,
    pub layer_name: String,
    pub layer_type: String,
    pub min_scale: f64,
    pub max_scale: f64,
    pub legend: Vec<serde_json::Value>,
}

/// The legend document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendDescription {
    pub layers: Vec<LegendLayer>,
}

/// Build the placeholder legend for a tileset.
///
/// Never fails today; the `Result` keeps the signature aligned with the other
/// builders so a style-derived legend can slot in later.
pub fn build_legend(
    _service_id: &str,
    descriptor: &TilesetDescriptor,
) -> Result<LegendDescription, MetadataError> {
    let layer = LegendLayer {
        layer_id: ROOT_LAYER_ID,
        layer_name: descriptor.metadata.get_string(keys::NAME, ""),
        layer_type: String::new(),
        min_scale: 0.0,
        max_scale: 0.0,
        legend: Vec::new(),
    };

    Ok(LegendDescription {
        layers: vec![layer],
    })
}
