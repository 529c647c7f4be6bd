//! Translation from tileset metadata to ArcGIS MapServer documents.
//!
//! # Architecture
//!
//! ```text
//!              TilesetDescriptor { format, metadata }
//!                              │
//!              ┌───────────────┴───────────────┐
//!              ▼                               ▼
//!      ┌──────────────┐                ┌──────────────┐
//!      │ compute_lods │                │    Extent    │
//!      │ (zoom range) │                │   (bounds)   │
//!      └──────┬───────┘                └──────┬───────┘
//!             └───────────────┬───────────────┘
//!                             ▼
//!   ┌──────────────────┐ ┌──────────────┐ ┌──────────────┐
//!   │ServiceDescription│ │  LayerList   │ │    Legend    │
//!   └──────────────────┘ └──────────────┘ └──────────────┘
//! ```
//!
//! Every builder is a pure function of `(service_id, descriptor)`: the same
//! input always serializes to the same bytes.

pub mod catalog;
pub mod constants;
pub mod extent;
pub mod layers;
pub mod legend;
pub mod lod;
pub mod service;

use crate::error::MetadataError;
use crate::tileset::TilesetDescriptor;

pub use catalog::{build_catalog, ServiceCatalog, ServiceEntry};
pub use extent::{Extent, SpatialReference};
pub use layers::{build_layer_list, Layer, LayerList};
pub use legend::{build_legend, LegendDescription, LegendLayer};
pub use lod::{compute_lods, Lod};
pub use service::{
    build_service_description, DocumentInfo, LayerStub, ServiceDescription, TileInfo,
};

/// Metadata keys read by the builders.
pub(crate) mod keys {
    pub const NAME: &str = "name";
    pub const DESCRIPTION: &str = "description";
    pub const ATTRIBUTION: &str = "attribution";
    pub const TAGS: &str = "tags";
    pub const CREDITS: &str = "credits";
    pub const MIN_ZOOM: &str = "minzoom";
    pub const MAX_ZOOM: &str = "maxzoom";
}

/// Build every per-service document, returning the first failure.
///
/// Used to check tilesets up front rather than on the first client request.
pub fn check_tileset(
    service_id: &str,
    descriptor: &TilesetDescriptor,
) -> Result<(), MetadataError> {
    build_service_description(service_id, descriptor)?;
    build_layer_list(service_id, descriptor)?;
    build_legend(service_id, descriptor)?;
    Ok(())
}
