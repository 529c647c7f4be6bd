//! HTTP server layer.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         HTTP Layer                              │
//! │        GET /arcgis/rest/services/{service_id}/MapServer         │
//! │                                                                 │
//! │      ┌──────────────────────┐    ┌──────────────────────┐       │
//! │      │       handlers       │    │        routes        │       │
//! │      │ (documents, errors)  │    │ (router, CORS, trace)│       │
//! │      └──────────────────────┘    └──────────────────────┘       │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod handlers;
pub mod routes;

pub use handlers::{
    catalog_handler, health_handler, layers_handler, legend_handler, service_handler, AppState,
    ArcGisQueryParams, ErrorResponse, HealthResponse, OutputFormat,
};
pub use routes::{create_router, RouterConfig};
