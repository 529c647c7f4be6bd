//! Filesystem-backed tileset source.
//!
//! Every `*.json` file in a directory describes one tileset. The file stem is
//! the service identifier, and the file body is a [`TilesetDescriptor`]:
//!
//! ```json
//! {
//!   "format": "png",
//!   "metadata": {
//!     "name": "Roads",
//!     "attribution": "© Contributors",
//!     "minzoom": 0,
//!     "maxzoom": 14,
//!     "bounds": [-20037508.34, -20037508.34, 20037508.34, 20037508.34]
//!   }
//! }
//! ```
//!
//! The extension must be lowercase `.json`; `Roads.JSON` is not a descriptor.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::RegistryError;

use super::registry::{TilesetDescriptor, TilesetSource};

const DESCRIPTOR_EXTENSION: &str = "json";

/// Directory-backed implementation of `TilesetSource`.
#[derive(Debug, Clone)]
pub struct DirectoryTilesetSource {
    root: PathBuf,
}

impl DirectoryTilesetSource {
    /// Create a source reading descriptors from `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the directory this source reads from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn descriptor_path(&self, service_id: &str) -> PathBuf {
        // Not `with_extension`: identifiers may contain dots
        self.root
            .join(format!("{}.{}", service_id, DESCRIPTOR_EXTENSION))
    }
}

#[async_trait]
impl TilesetSource for DirectoryTilesetSource {
    async fn list_tilesets(&self) -> Result<Vec<String>, RegistryError> {
        let io_err = |source: std::io::Error| RegistryError::Io {
            path: self.root.display().to_string(),
            source,
        };

        let mut entries = tokio::fs::read_dir(&self.root).await.map_err(io_err)?;
        let mut ids = Vec::new();

        while let Some(entry) = entries.next_entry().await.map_err(io_err)? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(DESCRIPTOR_EXTENSION) {
                continue;
            }
            // Follows symlinks, unlike `DirEntry::file_type`
            let is_file = tokio::fs::metadata(&path)
                .await
                .map(|meta| meta.is_file())
                .unwrap_or(false);
            if !is_file {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                ids.push(stem.to_string());
            }
        }

        ids.sort();
        Ok(ids)
    }

    async fn load_tileset(&self, service_id: &str) -> Result<TilesetDescriptor, RegistryError> {
        let path = self.descriptor_path(service_id);
        let display = path.display().to_string();

        let raw = tokio::fs::read(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                RegistryError::NotFound(service_id.to_string())
            } else {
                RegistryError::Io {
                    path: display.clone(),
                    source: e,
                }
            }
        })?;

        serde_json::from_slice(&raw).map_err(|e| RegistryError::Parse {
            path: display,
            message: e.to_string(),
        })
    }
}
