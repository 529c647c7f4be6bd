//! MapServer layer list (`/MapServer/layers`).
//!
//! Only a single root layer is described. Fields a multi-layer feature service
//! would fill in (sub-layers, relationships, attribute schema, renderer) are
//! emitted as empty placeholders.

use serde::Serialize;

use crate::error::MetadataError;
use crate::tileset::TilesetDescriptor;

use super::constants::{HTML_POPUP_TYPE, ROOT_LAYER_ID};
use super::extent::Extent;
use super::keys;

/// Full description of one layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub layer_type: String,
    pub description: String,
    pub geometry_type: String,
    pub copyright_text: String,
    /// `null` for the root layer
    pub parent_layer: Option<serde_json::Value>,
    pub sub_layers: Vec<serde_json::Value>,
    pub min_scale: f64,
    pub max_scale: f64,
    pub default_visibility: bool,
    pub extent: Extent,
    pub has_attachments: bool,
    pub html_popup_type: &'static str,
    pub drawing_info: Option<serde_json::Value>,
    pub display_field: String,
    pub fields: Vec<serde_json::Value>,
    pub type_id_field: String,
    pub types: String,
    pub relationships: Vec<serde_json::Value>,
    pub capabilities: String,
}

/// The layer list document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerList {
    pub layers: Vec<Layer>,
}

/// Build the layer list for a tileset. `bounds` is required.
pub fn build_layer_list(
    _service_id: &str,
    descriptor: &TilesetDescriptor,
) -> Result<LayerList, MetadataError> {
    let metadata = &descriptor.metadata;
    let extent = Extent::from_metadata(metadata)?;

    let root = Layer {
        id: ROOT_LAYER_ID,
        name: metadata.get_string(keys::NAME, ""),
        layer_type: String::new(),
        description: metadata.get_string(keys::DESCRIPTION, ""),
        geometry_type: String::new(),
        copyright_text: metadata.get_string(keys::ATTRIBUTION, ""),
        parent_layer: None,
        sub_layers: Vec::new(),
        min_scale: 0.0,
        max_scale: 0.0,
        default_visibility: true,
        extent,
        has_attachments: false,
        html_popup_type: HTML_POPUP_TYPE,
        drawing_info: None,
        display_field: String::new(),
        fields: Vec::new(),
        type_id_field: String::new(),
        types: String::new(),
        relationships: Vec::new(),
        capabilities: String::new(),
    };

    Ok(LayerList { layers: vec![root] })
}
