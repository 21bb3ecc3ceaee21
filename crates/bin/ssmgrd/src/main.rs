//! # ssmgrd — ssmgr console daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (`ssmgr.toml`, environment overrides)
//! - Initialize `tracing` with the configured filter
//! - Build the in-memory catalog from a seed file or the built-in sample
//! - Construct application services, injecting the catalog via port traits
//! - Build the axum router with the console route table
//! - Bind to a TCP port and serve until SIGINT/SIGTERM
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use ssmgr_adapter_http_axum::routes::RouteTable;
use ssmgr_adapter_http_axum::state::AppState;
use ssmgr_adapter_static::{Seed, StaticCatalog};
use ssmgr_app::services::account_service::AccountService;
use ssmgr_app::services::grid_service::ServerGridService;
use ssmgr_app::services::pricing_service::PricingService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    // Catalog
    let catalog = match &config.catalog.seed_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading catalog seed");
            StaticCatalog::from_seed(&Seed::from_file(path)?)?
        }
        None => StaticCatalog::sample()?,
    };

    // Services
    let grid_service = ServerGridService::new(catalog.clone(), config.columns_per_row()?);
    let account_service = AccountService::new(catalog.clone());
    let pricing_service = PricingService::new(catalog);

    // HTTP
    let state = AppState::new(
        grid_service,
        account_service,
        pricing_service,
        RouteTable::console(),
    );
    let app = ssmgr_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "ssmgrd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("ssmgrd stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
