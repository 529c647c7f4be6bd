//! Configuration management for the ArcGIS tile adapter.
//!
//! Options come from command-line arguments via clap, with environment
//! variable fallbacks using the `ARCGIS_` prefix:
//!
//! - `ARCGIS_HOST` - Server bind address (default: 0.0.0.0)
//! - `ARCGIS_PORT` - Server port (default: 8000)
//! - `ARCGIS_TILESETS_DIR` - Directory of tileset descriptors (required)
//! - `ARCGIS_CORS_ORIGINS` - Allowed CORS origins, comma-separated

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

// =============================================================================
// Default Values
// =============================================================================

/// Default server host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default server port.
pub const DEFAULT_PORT: u16 = 8000;

// =============================================================================
// CLI Arguments
// =============================================================================

/// ArcGIS tile adapter - serve tileset metadata as ArcGIS MapServer services.
#[derive(Parser, Debug, Clone)]
#[command(name = "arcgis-tile-adapter")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Consume the CLI and return the selected command.
    pub fn into_command(self) -> Command {
        self.command
    }
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Start the HTTP server.
    Serve(ServeConfig),

    /// Load every tileset and report which ones cannot be described.
    Check(CheckConfig),
}

/// Options for the `serve` command.
#[derive(Args, Debug, Clone)]
pub struct ServeConfig {
    /// Host address to bind the server to.
    #[arg(long, default_value = DEFAULT_HOST, env = "ARCGIS_HOST")]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, default_value_t = DEFAULT_PORT, env = "ARCGIS_PORT")]
    pub port: u16,

    /// Directory containing one `<service_id>.json` descriptor per tileset.
    #[arg(long, env = "ARCGIS_TILESETS_DIR")]
    pub tilesets_dir: PathBuf,

    /// Allowed CORS origins (comma-separated).
    ///
    /// If not specified, allows any origin.
    #[arg(long, env = "ARCGIS_CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Option<Vec<String>>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Disable request tracing.
    #[arg(long, default_value_t = false)]
    pub no_tracing: bool,
}

impl ServeConfig {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.tilesets_dir.as_os_str().is_empty() {
            return Err(
                "Tilesets directory is required. Set --tilesets-dir or ARCGIS_TILESETS_DIR"
                    .to_string(),
            );
        }

        if self.port == 0 {
            return Err("port must be greater than 0".to_string());
        }

        Ok(())
    }

    /// Get the server bind address as "host:port".
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Options for the `check` command.
#[derive(Args, Debug, Clone)]
pub struct CheckConfig {
    /// Directory containing one `<service_id>.json` descriptor per tileset.
    #[arg(long, env = "ARCGIS_TILESETS_DIR")]
    pub tilesets_dir: PathBuf,

    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

// =============================================================================
// Tests
// =============================================================================
