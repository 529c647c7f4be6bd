//! # ArcGIS Tile Adapter
//!
//! Exposes tilesets produced by a non-ArcGIS tile server through the ArcGIS
//! MapServer REST API, so desktop GIS tools and ArcGIS web SDKs can consume
//! them as tiled map services.
//!
//! ## Features
//!
//! - **Service root**: Web Mercator tile grid, LOD pyramid, extents and document info
//! - **Layer list and legend**: a single synthetic root layer per tileset
//! - **Services directory**: discovery of every registered tileset
//! - **Defensive metadata handling**: optional strings default to empty,
//!   missing zoom range or bounds fail with a diagnostic instead of a crash
//!
//! ## Architecture
//!
//! - [`tileset`] - Tileset descriptors, typed metadata access and the registry
//! - [`arcgis`] - LOD pyramid, extents and the ArcGIS document builders
//! - [`server`] - Axum-based HTTP server and routes
//! - [`config`] - CLI and configuration types
//!
//! ## Example
//!
//! ```rust,no_run
//! use arcgis_tile_adapter::{create_router, DirectoryTilesetSource, RouterConfig, TilesetRegistry};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = DirectoryTilesetSource::new("/srv/tilesets");
//!     let registry = TilesetRegistry::from_source(&source).await?;
//!
//!     let router = create_router(registry, RouterConfig::new());
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await?;
//!     axum::serve(listener, router).await?;
//!     Ok(())
//! }
//! ```

pub mod arcgis;
pub mod config;
pub mod error;
pub mod server;
pub mod tileset;

// Re-export commonly used types
pub use arcgis::{
    build_catalog, build_layer_list, build_legend, build_service_description, check_tileset,
    compute_lods, Extent, LayerList, LegendDescription, Lod, ServiceCatalog, ServiceDescription,
    SpatialReference,
};
pub use config::{CheckConfig, Cli, Command, ServeConfig};
pub use error::{MetadataError, RegistryError, ServiceError};
pub use server::{create_router, AppState, ErrorResponse, RouterConfig};
pub use tileset::{
    DirectoryTilesetSource, Metadata, SkippedTileset, TilesetDescriptor, TilesetRegistry,
    TilesetSource,
};
