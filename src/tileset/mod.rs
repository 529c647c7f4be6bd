//! Tileset abstraction layer.
//!
//! Tilesets are produced by a separate tile server; this crate only reads
//! their format string and metadata.
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            HTTP Handlers                │
//! └────────────────────┬────────────────────┘
//!                      │ service_id
//!                      ▼
//! ┌─────────────────────────────────────────┐
//! │           TilesetRegistry               │
//! │   (read-only snapshot, built at boot)   │
//! └────────────────────┬────────────────────┘
//!                      │
//!                      ▼
//! ┌─────────────────────────────────────────┐
//! │         TilesetSource Trait             │
//! └────────────────────┬────────────────────┘
//!                      │
//!                      ▼
//! ┌─────────────────────────────────────────┐
//! │       DirectoryTilesetSource            │
//! │     (one JSON descriptor per file)      │
//! └─────────────────────────────────────────┘
//! ```

mod dir_source;
mod metadata;
mod registry;

pub use dir_source::DirectoryTilesetSource;
pub use metadata::Metadata;
pub use registry::{SkippedTileset, TilesetDescriptor, TilesetRegistry, TilesetSource};
