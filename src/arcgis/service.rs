//! MapServer service root document.
//!
//! This is the document ArcGIS clients fetch first
//! (`/arcgis/rest/services/{id}/MapServer`). It tells them the service is a
//! tiled Web Mercator cache, where its tile grid starts, and which LODs exist.

use serde::Serialize;

use crate::error::MetadataError;
use crate::tileset::TilesetDescriptor;

use super::constants::{
    CAPABILITIES, CURRENT_VERSION, DPI, NO_PARENT_LAYER_ID, ORIGIN_X, ORIGIN_Y, ROOT_LAYER_ID,
    TILE_SIZE, UNITS,
};
use super::extent::{Extent, SpatialReference};
use super::lod::{compute_lods, zoom_level, Lod};
use super::keys;

// =============================================================================
// Document Types
// =============================================================================

/// Layer summary embedded in the service root.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerStub {
    pub id: u32,
    pub name: String,
    pub parent_layer_id: i32,
    pub default_visibility: bool,
    /// `null` for a leaf layer
    pub sub_layer_ids: Option<Vec<u32>>,
    pub min_scale: f64,
    pub max_scale: f64,
}

/// Tile grid of the cache.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileInfo {
    pub rows: u32,
    pub cols: u32,
    pub dpi: u32,
    pub origin: Point,
    pub spatial_reference: SpatialReference,
    pub lods: Vec<Lod>,
}

/// Tile grid origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Document properties. ArcGIS uses PascalCase keys here.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DocumentInfo {
    pub title: String,
    pub author: String,
    pub comments: String,
    pub subject: String,
    pub category: String,
    pub keywords: String,
    pub credits: String,
}

/// The full service root document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDescription {
    pub current_version: &'static str,
    pub id: String,
    pub name: String,
    pub map_name: String,
    pub capabilities: &'static str,
    pub description: String,
    pub service_description: String,
    pub copyright_text: String,
    pub single_fused_map_cache: bool,
    pub supported_image_format_types: String,
    pub units: &'static str,
    pub layers: Vec<LayerStub>,
    pub tables: Vec<serde_json::Value>,
    pub spatial_reference: SpatialReference,
    pub tile_info: TileInfo,
    pub document_info: DocumentInfo,
    pub initial_extent: Extent,
    pub full_extent: Extent,
    pub export_tiles_allowed: bool,
    pub max_export_tiles_count: u32,
    pub resampling: bool,
}

// =============================================================================
// Builder
// =============================================================================

/// Build the service root document for a tileset.
///
/// Descriptive strings default to empty. The zoom range and bounds are
/// required; their absence fails the whole document.
pub fn build_service_description(
    service_id: &str,
    descriptor: &TilesetDescriptor,
) -> Result<ServiceDescription, MetadataError> {
    let metadata = &descriptor.metadata;

    let name = metadata.get_string(keys::NAME, "");
    let description = metadata.get_string(keys::DESCRIPTION, "");
    let attribution = metadata.get_string(keys::ATTRIBUTION, "");

    let min_zoom = zoom_level(metadata, keys::MIN_ZOOM)?;
    let max_zoom = zoom_level(metadata, keys::MAX_ZOOM)?;
    let extent = Extent::from_metadata(metadata)?;

    let tile_info = TileInfo {
        rows: TILE_SIZE,
        cols: TILE_SIZE,
        dpi: DPI,
        origin: Point {
            x: ORIGIN_X,
            y: ORIGIN_Y,
        },
        spatial_reference: SpatialReference::WEB_MERCATOR,
        lods: compute_lods(min_zoom, max_zoom),
    };

    let document_info = DocumentInfo {
        title: name.clone(),
        author: attribution.clone(),
        comments: String::new(),
        subject: String::new(),
        category: String::new(),
        keywords: metadata.get_string(keys::TAGS, ""),
        credits: metadata.get_string(keys::CREDITS, ""),
    };

    let root_layer = LayerStub {
        id: ROOT_LAYER_ID,
        name: name.clone(),
        parent_layer_id: NO_PARENT_LAYER_ID,
        default_visibility: true,
        sub_layer_ids: None,
        min_scale: 0.0,
        max_scale: 0.0,
    };

    Ok(ServiceDescription {
        current_version: CURRENT_VERSION,
        id: service_id.to_string(),
        map_name: name.clone(),
        name,
        capabilities: CAPABILITIES,
        service_description: description.clone(),
        description,
        copyright_text: attribution,
        single_fused_map_cache: true,
        supported_image_format_types: descriptor.format.to_uppercase(),
        units: UNITS,
        layers: vec![root_layer],
        tables: Vec::new(),
        spatial_reference: SpatialReference::WEB_MERCATOR,
        tile_info,
        document_info,
        initial_extent: extent,
        full_extent: extent,
        export_tiles_allowed: false,
        max_export_tiles_count: 0,
        resampling: false,
    })
}

// =============================================================================
// Tests
// =============================================================================
