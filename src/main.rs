// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use folio_catalog::{Catalog, CatalogService, InMemoryCatalogService};
use folio_observability::{init_logging, parse_debug_flags, ObservabilityConfig};

/// folio - portfolio website server
#[derive(Parser, Debug)]
#[command(name = "folio-server", version, author, long_about = None)]
#[command(after_help = folio_observability::debug_flags_help())]
struct Args {
    /// Path to folio_configuration.toml (searched for when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Interface to bind
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Directory of static assets
    #[arg(long)]
    public_dir: Option<PathBuf>,

    /// JSON catalog replacing the built-in content
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Base log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

impl Args {
    fn overrides(&self) -> HashMap<String, String> {
        let mut cli = HashMap::new();
        if let Some(host) = &self.host {
            cli.insert("host".to_string(), host.clone());
        }
        if let Some(port) = self.port {
            cli.insert("port".to_string(), port.to_string());
        }
        if let Some(dir) = &self.public_dir {
            cli.insert("public_dir".to_string(), dir.display().to_string());
        }
        if let Some(path) = &self.catalog {
            cli.insert("catalog".to_string(), path.display().to_string());
        }
        if let Some(level) = &self.log_level {
            cli.insert("log_level".to_string(), level.clone());
        }
        cli
    }
}

/// Split `--debug-*` flags off before clap sees them
fn clap_args() -> Vec<String> {
    std::env::args()
        .filter(|arg| !arg.starts_with("--debug-"))
        .collect()
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse_from(clap_args());
    let debug_flags = parse_debug_flags();

    let config = folio_config::load_config(args.config.as_deref(), Some(&args.overrides()))
        .context("Failed to load configuration")?;

    let _logging = init_logging(&ObservabilityConfig::from_logging(&config.logging), &debug_flags)
        .context("Failed to initialize logging")?;

    tracing::info!(target: "folio-server", "folio v{}", folio::VERSION);

    let catalog = Catalog::load_or_builtin(config.catalog.path.as_deref())
        .context("Failed to load portfolio catalog")?;
    tracing::info!(
        target: "folio-server",
        "Catalog ready: {} project(s) for {}",
        catalog.projects().len(),
        catalog.profile().name
    );

    let service: Arc<dyn CatalogService> = Arc::new(InMemoryCatalogService::new(catalog));

    folio_api::serve(&config.server, service)
        .await
        .context("HTTP server failed")?;

    Ok(())
}
