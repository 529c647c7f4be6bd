//! Test utilities for integration tests.
//!
//! Fixture tilesets and helpers for driving the router in-process.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use arcgis_tile_adapter::{
    create_router, Metadata, RouterConfig, TilesetDescriptor, TilesetRegistry,
};

// =============================================================================
// Fixture Tilesets
// =============================================================================

/// A fully populated raster tileset covering the whole Web Mercator world.
pub fn world_tileset() -> TilesetDescriptor {
    TilesetDescriptor::new(
        "png",
        Metadata::new()
            .with("name", "World Basemap")
            .with("description", "Global raster basemap")
            .with("attribution", "© Basemap Contributors")
            .with("tags", "basemap,world")
            .with("credits", "Imagery team")
            .with("minzoom", 0)
            .with("maxzoom", 5)
            .with(
                "bounds",
                json!([
                    -20037508.342787,
                    -20037508.342787,
                    20037508.342787,
                    20037508.342787
                ]),
            ),
    )
}

/// A vector tileset with only the required fields.
pub fn minimal_tileset() -> TilesetDescriptor {
    TilesetDescriptor::new(
        "pbf",
        Metadata::new()
            .with("minzoom", "2")
            .with("maxzoom", "4")
            .with("bounds", "1,2,3,4"),
    )
}

/// A tileset with no zoom range.
pub fn no_zoom_tileset() -> TilesetDescriptor {
    TilesetDescriptor::new(
        "jpg",
        Metadata::new()
            .with("name", "No Zoom")
            .with("bounds", json!([0, 0, 10, 10])),
    )
}

/// A tileset with no bounds.
pub fn no_bounds_tileset() -> TilesetDescriptor {
    TilesetDescriptor::new(
        "jpg",
        Metadata::new()
            .with("name", "No Bounds")
            .with("minzoom", 0)
            .with("maxzoom", 3),
    )
}

/// A tileset whose bounds have the wrong number of elements.
pub fn bad_bounds_tileset() -> TilesetDescriptor {
    TilesetDescriptor::new(
        "png",
        Metadata::new()
            .with("minzoom", 0)
            .with("maxzoom", 3)
            .with("bounds", json!([0, 0, 10])),
    )
}

/// A tileset advertising a zoom level no tile grid could hold.
pub fn deep_zoom_tileset() -> TilesetDescriptor {
    TilesetDescriptor::new(
        "png",
        Metadata::new()
            .with("minzoom", 0)
            .with("maxzoom", i32::MAX)
            .with("bounds", json!([0, 0, 10, 10])),
    )
}

/// A tileset whose bounds overflow the extent's precision.
pub fn overflow_bounds_tileset() -> TilesetDescriptor {
    TilesetDescriptor::new(
        "png",
        Metadata::new()
            .with("minzoom", 0)
            .with("maxzoom", 3)
            .with("bounds", json!([-1e39, 0, 1e39, 1])),
    )
}

/// Registry holding every fixture tileset.
pub fn fixture_registry() -> TilesetRegistry {
    TilesetRegistry::from_descriptors([
        ("world", world_tileset()),
        ("minimal", minimal_tileset()),
        ("no_zoom", no_zoom_tileset()),
        ("no_bounds", no_bounds_tileset()),
        ("bad_bounds", bad_bounds_tileset()),
        ("deep_zoom", deep_zoom_tileset()),
        ("overflow_bounds", overflow_bounds_tileset()),
    ])
}

/// Router over the fixture registry with tracing disabled.
pub fn fixture_router() -> Router {
    create_router(fixture_registry(), RouterConfig::new().with_tracing(false))
}

// =============================================================================
// Request Helpers
// =============================================================================

/// Issue a GET request and return the status and raw body.
pub async fn get_raw(router: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

/// Issue a GET request and parse the body as JSON.
pub async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get_raw(router, uri).await;
    let json = serde_json::from_slice(&body).unwrap();
    (status, json)
}

/// Compare floats that went through JSON text, allowing for last-digit parse error.
pub fn assert_close(actual: f64, expected: f64) {
    let tolerance = expected.abs().max(1.0) * 1e-12;
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {}, got {}",
        expected,
        actual
    );
}
