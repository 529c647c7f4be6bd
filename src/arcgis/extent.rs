//! Bounding boxes in the ArcGIS geometry schema.

use serde::Serialize;

use crate::error::MetadataError;
use crate::tileset::Metadata;

use super::constants::WEB_MERCATOR_WKID;

/// Metadata key holding `[xmin, ymin, xmax, ymax]`.
pub const BOUNDS_KEY: &str = "bounds";

/// ArcGIS spatial reference, identified by well-known ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpatialReference {
    pub wkid: u32,
}

impl SpatialReference {
    /// Web Mercator (EPSG:3857).
    pub const WEB_MERCATOR: Self = Self {
        wkid: WEB_MERCATOR_WKID,
    };
}

/// ArcGIS envelope.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Extent {
    pub xmin: f32,
    pub ymin: f32,
    pub xmax: f32,
    pub ymax: f32,
    pub spatial_reference: SpatialReference,
}

impl Extent {
    /// Package `[xmin, ymin, xmax, ymax]` as a Web Mercator extent.
    ///
    /// Bounds are taken as Web Mercator meters; no reprojection happens.
    pub fn from_bounds(bounds: [f64; 4]) -> Self {
        let [xmin, ymin, xmax, ymax] = bounds;
        Self {
            xmin: xmin as f32,
            ymin: ymin as f32,
            xmax: xmax as f32,
            ymax: ymax as f32,
            spatial_reference: SpatialReference::WEB_MERCATOR,
        }
    }

    /// Read and convert the required `bounds` field of tileset metadata.
    ///
    /// Coordinates must fit in `f32`, the precision of the envelope.
    pub fn from_metadata(metadata: &Metadata) -> Result<Self, MetadataError> {
        let values = metadata.get_float_array(BOUNDS_KEY, 4)?;

        if let Some(v) = values.iter().find(|v| v.abs() > f64::from(f32::MAX)) {
            return Err(MetadataError::MalformedBounds {
                reason: format!("{} coordinate {} exceeds the extent range", BOUNDS_KEY, v),
            });
        }

        Ok(Self::from_bounds([values[0], values[1], values[2], values[3]]))
    }
}
