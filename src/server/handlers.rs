//! HTTP request handlers for the ArcGIS MapServer API.
//!
//! # Endpoints
//!
//! - `GET /arcgis/rest/services` - Services directory
//! - `GET /arcgis/rest/services/{service_id}/MapServer` - Service root
//! - `GET /arcgis/rest/services/{service_id}/MapServer/layers` - Layer list
//! - `GET /arcgis/rest/services/{service_id}/MapServer/legend` - Legend
//! - `GET /health` - Health check endpoint

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::arcgis::{build_catalog, build_layer_list, build_legend, build_service_description};
use crate::error::{MetadataError, ServiceError};
use crate::tileset::{TilesetDescriptor, TilesetRegistry};

// =============================================================================
// Application State
// =============================================================================

/// Shared application state.
///
/// The registry is an immutable snapshot, so handlers read it without locking.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<TilesetRegistry>,
}

impl AppState {
    /// Create a new application state around a registry.
    pub fn new(registry: TilesetRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }
}

// =============================================================================
// Request Parameters
// =============================================================================

/// Output format selected by the ArcGIS `f` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Compact JSON (`f=json`, the default)
    #[default]
    Json,
    /// Pretty-printed JSON (`f=pjson`)
    PrettyJson,
}

/// Query parameters accepted by every ArcGIS endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ArcGisQueryParams {
    /// Response format (`json` or `pjson`). Unknown values fall back to `json`.
    #[serde(default)]
    pub f: Option<String>,
}

impl ArcGisQueryParams {
    /// Resolve the requested output format.
    pub fn output_format(&self) -> OutputFormat {
        match self.f.as_deref() {
            Some(f) if f.eq_ignore_ascii_case("pjson") => OutputFormat::PrettyJson,
            _ => OutputFormat::Json,
        }
    }
}

// =============================================================================
// Response Types
// =============================================================================

/// JSON error response returned for all error conditions.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error type identifier (e.g., "not_found", "missing_bounds")
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code (included for convenience)
    pub status: u16,
}

impl ErrorResponse {
    /// Create a new error response with status code.
    pub fn with_status(
        error: impl Into<String>,
        message: impl Into<String>,
        status: StatusCode,
    ) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            status: status.as_u16(),
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,
}

// =============================================================================
// Error Mapping
// =============================================================================

/// Convert ServiceError to HTTP response.
///
/// Unresolved identifiers are the client's problem (404, logged at DEBUG).
/// Unusable metadata is a fault in the served data (500, logged at ERROR).
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            ServiceError::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
            ServiceError::Metadata(MetadataError::MissingZoomRange { .. }) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "missing_zoom_range")
            }
            ServiceError::Metadata(MetadataError::ZoomOutOfRange { .. }) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "zoom_out_of_range")
            }
            ServiceError::Metadata(MetadataError::MissingBounds) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "missing_bounds")
            }
            ServiceError::Metadata(MetadataError::MalformedBounds { .. }) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "malformed_bounds")
            }
        };
        let message = self.to_string();

        if status.is_server_error() {
            error!(
                error_type = error_type,
                status = status.as_u16(),
                "Server error: {}",
                message
            );
        } else {
            debug!(
                error_type = error_type,
                status = status.as_u16(),
                "Resource not found: {}",
                message
            );
        }

        let error_response = ErrorResponse::with_status(error_type, message, status);

        (status, Json(error_response)).into_response()
    }
}

/// Serialize a document as a JSON response in the requested format.
fn json_response<T: Serialize>(document: &T, format: OutputFormat) -> Response {
    let body = match format {
        OutputFormat::Json => serde_json::to_vec(document),
        OutputFormat::PrettyJson => serde_json::to_vec_pretty(document),
    };

    match body {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        Err(e) => {
            error!("Failed to serialize response: {}", e);
            let status = StatusCode::INTERNAL_SERVER_ERROR;
            let error_response =
                ErrorResponse::with_status("serialization_error", e.to_string(), status);
            (status, Json(error_response)).into_response()
        }
    }
}

/// Resolve a service and run one of the document builders against it.
fn describe<T, F>(
    state: &AppState,
    service_id: &str,
    query: &ArcGisQueryParams,
    build: F,
) -> Result<Response, ServiceError>
where
    T: Serialize,
    F: FnOnce(&str, &TilesetDescriptor) -> Result<T, MetadataError>,
{
    let descriptor = state.registry.get(service_id)?;
    let document = build(service_id, descriptor)?;

    Ok(json_response(&document, query.output_format()))
}

// =============================================================================
// Handlers
// =============================================================================

/// Handle services directory requests.
///
/// # Endpoint
///
/// `GET /arcgis/rest/services`
///
/// # Response
///
/// `200 OK` with JSON body:
/// ```json
/// {
///   "currentVersion": 10.4,
///   "folders": [],
///   "services": [{"name": "roads", "type": "MapServer"}]
/// }
/// ```
pub async fn catalog_handler(
    State(state): State<AppState>,
    Query(query): Query<ArcGisQueryParams>,
) -> Response {
    let catalog = build_catalog(&state.registry);
    json_response(&catalog, query.output_format())
}

/// Handle MapServer service root requests.
///
/// # Endpoint
///
/// `GET /arcgis/rest/services/{service_id}/MapServer`
///
/// # Query Parameters
///
/// - `f`: `json` (default) or `pjson`
///
/// # Errors
///
/// - `404 Not Found`: Unknown service identifier
/// - `500 Internal Server Error`: Zoom range or bounds missing from metadata,
///   or a zoom level outside the supported range
pub async fn service_handler(
    State(state): State<AppState>,
    Path(service_id): Path<String>,
    Query(query): Query<ArcGisQueryParams>,
) -> Result<Response, ServiceError> {
    describe(&state, &service_id, &query, build_service_description)
}

/// Handle MapServer layer list requests.
///
/// # Endpoint
///
/// `GET /arcgis/rest/services/{service_id}/MapServer/layers`
///
/// # Errors
///
/// - `404 Not Found`: Unknown service identifier
/// - `500 Internal Server Error`: Bounds missing from metadata
pub async fn layers_handler(
    State(state): State<AppState>,
    Path(service_id): Path<String>,
    Query(query): Query<ArcGisQueryParams>,
) -> Result<Response, ServiceError> {
    describe(&state, &service_id, &query, build_layer_list)
}

/// Handle MapServer legend requests.
///
/// # Endpoint
///
/// `GET /arcgis/rest/services/{service_id}/MapServer/legend`
///
/// # Errors
///
/// - `404 Not Found`: Unknown service identifier
pub async fn legend_handler(
    State(state): State<AppState>,
    Path(service_id): Path<String>,
    Query(query): Query<ArcGisQueryParams>,
) -> Result<Response, ServiceError> {
    describe(&state, &service_id, &query, build_legend)
}

/// Handle health check requests.
///
/// # Endpoint
///
/// `GET /health`
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// =============================================================================
// Tests
// =============================================================================
