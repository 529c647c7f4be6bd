//! Fixed values of the Web Mercator tiling scheme and the ArcGIS REST schema.

// =============================================================================
// Tiling Scheme
// =============================================================================

/// Well-known ID of Web Mercator (EPSG:3857).
pub const WEB_MERCATOR_WKID: u32 = 3857;

/// Meters per pixel at zoom 0 for 256×256 Web Mercator tiles.
pub const BASE_RESOLUTION: f64 = 156543.033928;

/// Assumed display resolution of tile imagery.
pub const DPI: u32 = 96;

/// Inches per meter, for converting resolution to map scale.
pub const INCHES_PER_METER: f64 = 39.37;

/// Lowest zoom level a tileset may advertise.
pub const MIN_ZOOM_LEVEL: i32 = 0;

/// Highest zoom level a tileset may advertise. Level 30 is already well under
/// a millimeter per pixel.
pub const MAX_ZOOM_LEVEL: i32 = 30;

/// Tile width and height in pixels.
pub const TILE_SIZE: u32 = 256;

/// Tile grid origin (top-left corner) in Web Mercator meters.
pub const ORIGIN_X: f64 = -20037508.342787;

/// See [`ORIGIN_X`].
pub const ORIGIN_Y: f64 = 20037508.342787;

// =============================================================================
// ArcGIS REST Schema
// =============================================================================

/// Emulated ArcGIS Server REST API version.
pub const CURRENT_VERSION: &str = "10.4";

/// Numeric form of [`CURRENT_VERSION`], used by the services directory.
pub const CURRENT_VERSION_NUMBER: f64 = 10.4;

/// Capabilities advertised by every map service.
pub const CAPABILITIES: &str = "Map,TilesOnly";

/// Map units of the service.
pub const UNITS: &str = "esriMeters";

/// Service type reported in the services directory.
pub const SERVICE_TYPE: &str = "MapServer";

/// Popup type of the synthetic root layer.
pub const HTML_POPUP_TYPE: &str = "esriServerHTMLPopupTypeAsHTMLText";

/// ID of the single synthetic root layer.
pub const ROOT_LAYER_ID: u32 = 0;

/// `parentLayerId` value meaning "no parent".
pub const NO_PARENT_LAYER_ID: i32 = -1;
