//! ArcGIS services directory (`/arcgis/rest/services`).

use serde::Serialize;

use crate::tileset::TilesetRegistry;

use super::constants::{CURRENT_VERSION_NUMBER, SERVICE_TYPE};

/// One entry of the services directory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub service_type: &'static str,
}

/// Root of the services directory.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCatalog {
    pub current_version: f64,
    pub folders: Vec<String>,
    pub services: Vec<ServiceEntry>,
}

/// List every registered tileset as a MapServer, sorted by identifier.
pub fn build_catalog(registry: &TilesetRegistry) -> ServiceCatalog {
    ServiceCatalog {
        current_version: CURRENT_VERSION_NUMBER,
        folders: Vec::new(),
        services: registry
            .service_ids()
            .into_iter()
            .map(|id| ServiceEntry {
                name: id.to_string(),
                service_type: SERVICE_TYPE,
            })
            .collect(),
    }
}
