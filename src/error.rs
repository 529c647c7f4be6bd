use thiserror::Error;

/// Errors raised when required tileset metadata is absent or malformed
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MetadataError {
    /// `minzoom` or `maxzoom` is absent or not an integer
    #[error("Missing or non-integer zoom range field: {key}")]
    MissingZoomRange { key: String },

    /// `minzoom` or `maxzoom` lies outside the supported zoom levels
    #[error("Zoom level {key}={value} outside supported range {min}..={max}")]
    ZoomOutOfRange {
        key: String,
        value: i32,
        min: i32,
        max: i32,
    },

    /// `bounds` is absent
    #[error("Missing bounds in tileset metadata")]
    MissingBounds,

    /// `bounds` is present but not 4 numbers
    #[error("Malformed bounds in tileset metadata: {reason}")]
    MalformedBounds { reason: String },
}

/// Errors that can occur while resolving and describing a service
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServiceError {
    /// Service identifier does not resolve in the registry (maps to HTTP 404)
    #[error("Service not found: {service_id}")]
    NotFound { service_id: String },

    /// Required metadata for the service is unusable
    #[error("Invalid metadata: {0}")]
    Metadata(#[from] MetadataError),
}

/// Errors that can occur when loading tilesets into the registry
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Filesystem error while listing or reading tilesets
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Tileset file is not a valid descriptor
    #[error("Invalid tileset descriptor {path}: {message}")]
    Parse { path: String, message: String },

    /// Tileset does not exist in the source
    #[error("Tileset not found: {0}")]
    NotFound(String),
}
