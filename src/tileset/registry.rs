//! Tileset registry.
//!
//! The registry is a read-only snapshot of every servable tileset, built once
//! at startup and shared across request handlers without locking.
//!
//! # Example
//!
//! ```ignore
//! use arcgis_tile_adapter::tileset::{DirectoryTilesetSource, TilesetRegistry};
//!
//! let source = DirectoryTilesetSource::new("/srv/tilesets");
//! let registry = TilesetRegistry::from_source(&source).await?;
//!
//! let descriptor = registry.get("osm_bright")?;
//! println!("{} tiles", descriptor.format);
//! ```

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{RegistryError, ServiceError};

use super::metadata::Metadata;

// =============================================================================
// TilesetDescriptor
// =============================================================================

/// The internal record describing one servable tileset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TilesetDescriptor {
    /// Tile image format as stored (e.g. "png", "jpg", "pbf")
    pub format: String,

    /// Free-form metadata (name, attribution, zoom range, bounds, ...)
    #[serde(default)]
    pub metadata: Metadata,
}

impl TilesetDescriptor {
    /// Create a descriptor from a format and metadata.
    pub fn new(format: impl Into<String>, metadata: Metadata) -> Self {
        Self {
            format: format.into(),
            metadata,
        }
    }
}

// =============================================================================
// TilesetSource Trait
// =============================================================================

/// Trait for loading tileset descriptors from a backing store.
#[async_trait]
pub trait TilesetSource: Send + Sync {
    /// List the identifiers of all tilesets available in this source.
    async fn list_tilesets(&self) -> Result<Vec<String>, RegistryError>;

    /// Load the descriptor for a single tileset.
    async fn load_tileset(&self, service_id: &str) -> Result<TilesetDescriptor, RegistryError>;
}

// =============================================================================
// TilesetRegistry
// =============================================================================

/// A tileset the source listed but could not load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedTileset {
    pub service_id: String,
    pub reason: String,
}

/// Read-only snapshot of tileset descriptors keyed by service identifier.
#[derive(Debug, Clone, Default)]
pub struct TilesetRegistry {
    tilesets: HashMap<String, TilesetDescriptor>,
    skipped: Vec<SkippedTileset>,
}

impl TilesetRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry directly from `(service_id, descriptor)` pairs.
    pub fn from_descriptors<I, K>(descriptors: I) -> Self
    where
        I: IntoIterator<Item = (K, TilesetDescriptor)>,
        K: Into<String>,
    {
        Self {
            tilesets: descriptors
                .into_iter()
                .map(|(id, descriptor)| (id.into(), descriptor))
                .collect(),
            skipped: Vec::new(),
        }
    }

    /// Load every tileset the source lists.
    ///
    /// A tileset that fails to load is skipped with a warning; only a failure
    /// to list the source is returned as an error.
    pub async fn from_source<S: TilesetSource + ?Sized>(
        source: &S,
    ) -> Result<Self, RegistryError> {
        let ids = source.list_tilesets().await?;
        let mut tilesets = HashMap::with_capacity(ids.len());
        let mut skipped = Vec::new();

        for id in ids {
            match source.load_tileset(&id).await {
                Ok(descriptor) => {
                    debug!(service_id = %id, format = %descriptor.format, "Loaded tileset");
                    tilesets.insert(id, descriptor);
                }
                Err(e) => {
                    warn!(service_id = %id, "Skipping tileset: {}", e);
                    skipped.push(SkippedTileset {
                        service_id: id,
                        reason: e.to_string(),
                    });
                }
            }
        }

        Ok(Self { tilesets, skipped })
    }

    /// Resolve a service identifier, or fail with [`ServiceError::NotFound`].
    pub fn get(&self, service_id: &str) -> Result<&TilesetDescriptor, ServiceError> {
        self.tilesets
            .get(service_id)
            .ok_or_else(|| ServiceError::NotFound {
                service_id: service_id.to_string(),
            })
    }

    /// All service identifiers, sorted.
    pub fn service_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.tilesets.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Number of tilesets in the registry.
    pub fn len(&self) -> usize {
        self.tilesets.len()
    }

    /// Whether the registry holds no tilesets.
    pub fn is_empty(&self) -> bool {
        self.tilesets.is_empty()
    }

    /// Tilesets the source listed but failed to load, in listing order.
    pub fn skipped(&self) -> &[SkippedTileset] {
        &self.skipped
    }
}

// =============================================================================
// Tests
// =============================================================================
