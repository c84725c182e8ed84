//! Tech Catalog Server
//!
//! HTTP service for tech product records: CRUD over an embedded SQLite
//! store, plus a processing endpoint that scores and ranks items.

mod app;
mod handlers;
mod services;
mod settings;
mod storage;

use anyhow::{Context, Result};
use catalog_core::ItemStore;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

pub use app::AppState;
use services::{seeder, CatalogService};
use settings::{Settings, StorageBackend};
use storage::{Database, MemoryItemStore};

#[tokio::main]
async fn main() {
    install_panic_hook();

    if let Err(e) = init_tracing() {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!("Starting Tech Catalog Server v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run_server().await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

/// Report panics through tracing as well as stderr, so they reach JSON logs.
fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let payload = info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_string());
        match info.location() {
            Some(at) => {
                eprintln!("panic at {}:{}: {}", at.file(), at.line(), payload);
                error!(file = at.file(), line = at.line(), "panic: {}", payload);
            }
            None => {
                eprintln!("panic: {}", payload);
                error!("panic: {}", payload);
            }
        }
    }));
}

/// `RUST_LOG` selects the filter (default `info`); `LOG_FORMAT=json` switches
/// to JSON lines.
fn init_tracing() -> std::result::Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    }
}

async fn run_server() -> Result<()> {
    info!("Loading configuration...");
    let settings = Settings::load().context("Failed to load configuration")?;
    info!(
        "Config loaded: bind={}, storage={:?}",
        settings.bind_address, settings.storage
    );

    let store: Arc<dyn ItemStore> = match settings.storage {
        StorageBackend::Sqlite => {
            let path = settings.database_path();
            let db = Database::new(&path)
                .await
                .context("Failed to initialize database")?;
            info!("SQLite database initialized at: {}", path);
            Arc::new(db)
        }
        StorageBackend::Memory => {
            info!("Using in-memory store, data will not persist");
            Arc::new(MemoryItemStore::new())
        }
    };

    if settings.seed_on_startup {
        seeder::seed_if_empty(store.as_ref())
            .await
            .context("Failed to seed sample catalog")?;
    }

    let state = AppState::new(CatalogService::new(store, settings.scoring.clone()));
    let router = app::build_router(state);

    let addr: SocketAddr = settings
        .bind_address
        .parse()
        .context("Failed to parse bind address")?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, router).await.context("Server error")?;

    Ok(())
}
