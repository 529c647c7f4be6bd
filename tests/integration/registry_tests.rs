//! Registry integration tests.
//!
//! Tests verify:
//! - Loading tileset descriptors from a directory
//! - Broken and non-descriptor files are skipped
//! - Only lowercase `.json` files are descriptors
//! - Services loaded from disk are served over HTTP

use std::fs;

use axum::http::StatusCode;
use serde_json::json;
use tempfile::TempDir;

use arcgis_tile_adapter::{
    create_router, DirectoryTilesetSource, RegistryError, RouterConfig, TilesetRegistry,
    TilesetSource,
};

use super::test_utils::get_json;

fn write_descriptor(dir: &TempDir, file_name: &str, contents: &serde_json::Value) {
    fs::write(
        dir.path().join(file_name),
        serde_json::to_vec_pretty(contents).unwrap(),
    )
    .unwrap();
}

fn tileset_dir() -> TempDir {
    let dir = TempDir::new().unwrap();

    write_descriptor(
        &dir,
        "roads.json",
        &json!({
            "format": "png",
            "metadata": {
                "name": "Roads",
                "attribution": "Road Authority",
                "minzoom": 0,
                "maxzoom": 2,
                "bounds": [-1000.0, -1000.0, 1000.0, 1000.0]
            }
        }),
    );
    write_descriptor(
        &dir,
        "osm.bright.json",
        &json!({
            "format": "pbf",
            "metadata": {
                "minzoom": "0",
                "maxzoom": "14",
                "bounds": "-180,-85,180,85"
            }
        }),
    );

    fs::write(dir.path().join("broken.json"), b"{ not json").unwrap();
    fs::write(dir.path().join("README.txt"), b"not a tileset").unwrap();
    write_descriptor(
        &dir,
        "Legacy.JSON",
        &json!({"format": "png", "metadata": {"minzoom": 0, "maxzoom": 1, "bounds": [0, 0, 1, 1]}}),
    );

    dir
}

#[tokio::test]
async fn test_list_tilesets() {
    let dir = tileset_dir();
    let source = DirectoryTilesetSource::new(dir.path());

    let ids = source.list_tilesets().await.unwrap();
    assert_eq!(ids, vec!["broken", "osm.bright", "roads"]);
}

#[tokio::test]
async fn test_load_tileset() {
    let dir = tileset_dir();
    let source = DirectoryTilesetSource::new(dir.path());

    let descriptor = source.load_tileset("roads").await.unwrap();
    assert_eq!(descriptor.format, "png");
    assert_eq!(descriptor.metadata.get_string("name", ""), "Roads");

    assert!(matches!(
        source.load_tileset("broken").await,
        Err(RegistryError::Parse { .. })
    ));
    assert!(matches!(
        source.load_tileset("missing").await,
        Err(RegistryError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_registry_from_directory() {
    let dir = tileset_dir();
    let source = DirectoryTilesetSource::new(dir.path());

    let registry = TilesetRegistry::from_source(&source).await.unwrap();
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.service_ids(), vec!["osm.bright", "roads"]);

    let skipped = registry.skipped();
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0].service_id, "broken");
    assert!(skipped[0].reason.contains("broken.json"));
}

#[tokio::test]
async fn test_uppercase_extension_is_not_a_descriptor() {
    let dir = tileset_dir();
    let source = DirectoryTilesetSource::new(dir.path());

    let ids = source.list_tilesets().await.unwrap();
    assert!(!ids.iter().any(|id| id == "Legacy"));

    // Not listed, so neither loaded nor reported as skipped
    let registry = TilesetRegistry::from_source(&source).await.unwrap();
    assert!(registry.get("Legacy").is_err());
    assert!(registry
        .skipped()
        .iter()
        .all(|skipped| skipped.service_id != "Legacy"));
}

#[tokio::test]
async fn test_serve_from_directory() {
    let dir = tileset_dir();
    let source = DirectoryTilesetSource::new(dir.path());
    let registry = TilesetRegistry::from_source(&source).await.unwrap();
    let router = create_router(registry, RouterConfig::new().with_tracing(false));

    let (status, json) =
        get_json(router.clone(), "/arcgis/rest/services/roads/MapServer").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "Roads");
    assert_eq!(json["tileInfo"]["lods"].as_array().unwrap().len(), 3);

    let (status, json) =
        get_json(router.clone(), "/arcgis/rest/services/osm.bright/MapServer").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["supportedImageFormatTypes"], "PBF");
    assert_eq!(json["tileInfo"]["lods"].as_array().unwrap().len(), 15);

    let (status, _) = get_json(router, "/arcgis/rest/services/broken/MapServer").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
