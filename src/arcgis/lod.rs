//! Level-of-detail pyramid for the Web Mercator tile grid.
//!
//! ArcGIS clients choose which zoom tier to request by comparing the map's
//! current resolution against the `lods` table of the service. Each zoom level
//! halves the resolution of the previous one:
//!
//! ```text
//! resolution(z) = BASE_RESOLUTION / 2^z
//! scale(z)      = DPI * INCHES_PER_METER * resolution(z)
//! ```

use serde::Serialize;

use crate::error::MetadataError;
use crate::tileset::Metadata;

use super::constants::{BASE_RESOLUTION, DPI, INCHES_PER_METER, MAX_ZOOM_LEVEL, MIN_ZOOM_LEVEL};

/// A single level of detail.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Lod {
    /// Zoom level
    pub level: i32,

    /// Map units (meters) per pixel
    pub resolution: f64,

    /// Cartographic scale denominator
    pub scale: f64,
}

impl Lod {
    /// Compute the level of detail for a single zoom level.
    pub fn for_level(level: i32) -> Self {
        let resolution = resolution_at(level);
        Self {
            level,
            resolution,
            scale: scale_for_resolution(resolution),
        }
    }
}

/// Meters per pixel at `level`.
pub fn resolution_at(level: i32) -> f64 {
    BASE_RESOLUTION / 2f64.powi(level)
}

/// Scale denominator for a resolution at the fixed DPI.
pub fn scale_for_resolution(resolution: f64) -> f64 {
    f64::from(DPI) * INCHES_PER_METER * resolution
}

/// Read a required zoom level from tileset metadata.
///
/// Levels outside `MIN_ZOOM_LEVEL..=MAX_ZOOM_LEVEL` are rejected, which keeps
/// the pyramid small and every resolution finite.
pub fn zoom_level(metadata: &Metadata, key: &str) -> Result<i32, MetadataError> {
    let level = metadata.get_int(key)?;
    if (MIN_ZOOM_LEVEL..=MAX_ZOOM_LEVEL).contains(&level) {
        Ok(level)
    } else {
        Err(MetadataError::ZoomOutOfRange {
            key: key.to_string(),
            value: level,
            min: MIN_ZOOM_LEVEL,
            max: MAX_ZOOM_LEVEL,
        })
    }
}

/// Compute the LOD pyramid for every zoom level in `min_zoom..=max_zoom`.
///
/// Entries are ordered by ascending level. An inverted range yields an empty
/// pyramid. Callers reading levels from metadata go through [`zoom_level`].
pub fn compute_lods(min_zoom: i32, max_zoom: i32) -> Vec<Lod> {
    (min_zoom..=max_zoom).map(Lod::for_level).collect()
}
