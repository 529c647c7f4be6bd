//! ArcGIS tile adapter - serve tileset metadata as ArcGIS MapServer services.
//!
//! This binary loads the tileset registry and starts the HTTP server.

use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use arcgis_tile_adapter::{
    check_tileset,
    config::{CheckConfig, Cli, Command, ServeConfig},
    server::{create_router, RouterConfig},
    tileset::{DirectoryTilesetSource, TilesetRegistry},
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.into_command() {
        Command::Serve(config) => run_serve(config).await,
        Command::Check(config) => run_check(config).await,
    }
}

// =============================================================================
// Serve Command
// =============================================================================

async fn run_serve(config: ServeConfig) -> ExitCode {
    init_logging(config.verbose);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    info!("ArcGIS tile adapter v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration:");
    info!("  Tilesets directory: {}", config.tilesets_dir.display());
    match config.cors_origins {
        Some(ref origins) => info!("  CORS origins: {}", origins.join(", ")),
        None => info!("  CORS origins: any"),
    }

    let source = DirectoryTilesetSource::new(&config.tilesets_dir);
    let registry = match TilesetRegistry::from_source(&source).await {
        Ok(registry) => registry,
        Err(e) => {
            error!("Failed to load tilesets: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("  Loaded {} tileset(s)", registry.len());
    if !registry.skipped().is_empty() {
        warn!(
            "  Skipped {} tileset(s) that could not be loaded",
            registry.skipped().len()
        );
    }
    if registry.is_empty() {
        warn!("  No tilesets found; every service request will return 404");
    }

    let router_config = build_router_config(&config);
    let router = create_router(registry, router_config);

    let addr = config.bind_address();
    info!("Server listening on: http://{}", addr);
    info!("  Services directory: http://{}/arcgis/rest/services", addr);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = axum::serve(listener, router).await {
        error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Initialize the tracing/logging subsystem.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "arcgis_tile_adapter=debug,tower_http=debug"
    } else {
        "arcgis_tile_adapter=info,tower_http=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Build RouterConfig from the serve options.
fn build_router_config(config: &ServeConfig) -> RouterConfig {
    let mut router_config = RouterConfig::new().with_tracing(!config.no_tracing);

    if let Some(ref origins) = config.cors_origins {
        router_config = router_config.with_cors_origins(origins.clone());
    }

    router_config
}

// =============================================================================
// Check Command
// =============================================================================

async fn run_check(config: CheckConfig) -> ExitCode {
    if config.verbose {
        init_logging(true);
    }

    println!("ArcGIS Tile Adapter Tileset Check");
    println!("═════════════════════════════════");
    println!();

    let source = DirectoryTilesetSource::new(&config.tilesets_dir);
    println!("Directory: {}", source.root().display());
    println!();

    let registry = match TilesetRegistry::from_source(&source).await {
        Ok(registry) => registry,
        Err(e) => {
            println!("✗ {}", e);
            return ExitCode::FAILURE;
        }
    };

    if registry.is_empty() && registry.skipped().is_empty() {
        println!("  (no tilesets found)");
        return ExitCode::SUCCESS;
    }

    let mut failures = 0;

    for skipped in registry.skipped() {
        println!("✗ {}: {}", skipped.service_id, skipped.reason);
        failures += 1;
    }

    for service_id in registry.service_ids() {
        let result = registry
            .get(service_id)
            .map_err(|e| e.to_string())
            .and_then(|descriptor| {
                check_tileset(service_id, descriptor).map_err(|e| e.to_string())
            });

        match result {
            Ok(()) => println!("✓ {}", service_id),
            Err(e) => {
                println!("✗ {}: {}", service_id, e);
                failures += 1;
            }
        }
    }

    println!();
    println!("═════════════════════════════════");

    if failures == 0 {
        println!("✓ All {} tileset(s) passed!", registry.len());
        ExitCode::SUCCESS
    } else {
        println!("✗ {} tileset(s) failed", failures);
        ExitCode::FAILURE
    }
}
