//! Router configuration for the ArcGIS adapter.
//!
//! # Route Structure
//!
//! ```text
//! /health                                                  - Health check
//! /arcgis/rest/services                                    - Services directory
//! /arcgis/rest/services/{service_id}/MapServer             - Service root
//! /arcgis/rest/services/{service_id}/MapServer/layers      - Layer list
//! /arcgis/rest/services/{service_id}/MapServer/legend      - Legend
//! ```
//!
//! # Example
//!
//! ```ignore
//! use arcgis_tile_adapter::server::routes::{create_router, RouterConfig};
//! use arcgis_tile_adapter::tileset::{DirectoryTilesetSource, TilesetRegistry};
//!
//! let source = DirectoryTilesetSource::new("/srv/tilesets");
//! let registry = TilesetRegistry::from_source(&source).await?;
//!
//! let config = RouterConfig::new()
//!     .with_cors_origins(vec!["https://example.com".to_string()]);
//!
//! let router = create_router(registry, config);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await?;
//! axum::serve(listener, router).await?;
//! ```

use std::time::Duration;

use axum::{routing::get, Router};
use http::header::CONTENT_TYPE;
use http::Method;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{
    catalog_handler, health_handler, layers_handler, legend_handler, service_handler, AppState,
};
use crate::tileset::TilesetRegistry;

// =============================================================================
// Router Configuration
// =============================================================================

/// Configuration for the HTTP router.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Allowed CORS origins (None = allow any origin)
    pub cors_origins: Option<Vec<String>>,

    /// Whether to enable request tracing
    pub enable_tracing: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RouterConfig {
    /// Create a router configuration.
    ///
    /// By default CORS allows any origin and tracing is enabled.
    pub fn new() -> Self {
        Self {
            cors_origins: None,
            enable_tracing: true,
        }
    }

    /// Set specific allowed CORS origins.
    ///
    /// Pass an empty vec to disallow all cross-origin requests.
    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = Some(origins);
        self
    }

    /// Enable or disable request tracing.
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.enable_tracing = enabled;
        self
    }
}

// =============================================================================
// Router Builder
// =============================================================================

/// Create the application router over a tileset registry.
pub fn create_router(registry: TilesetRegistry, config: RouterConfig) -> Router {
    let app_state = AppState::new(registry);
    let cors = build_cors_layer(&config);

    let router = Router::new()
        .route("/health", get(health_handler))
        .route("/arcgis/rest/services", get(catalog_handler))
        .route(
            "/arcgis/rest/services/{service_id}/MapServer",
            get(service_handler),
        )
        .route(
            "/arcgis/rest/services/{service_id}/MapServer/layers",
            get(layers_handler),
        )
        .route(
            "/arcgis/rest/services/{service_id}/MapServer/legend",
            get(legend_handler),
        )
        .with_state(app_state)
        .layer(cors);

    if config.enable_tracing {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

/// Build the CORS layer based on configuration.
fn build_cors_layer(config: &RouterConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(86400)); // 24 hours

    match &config.cors_origins {
        None => cors.allow_origin(Any),
        Some(origins) if origins.is_empty() => cors,
        Some(origins) => {
            let parsed_origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            cors.allow_origin(parsed_origins)
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
