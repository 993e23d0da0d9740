//! Bookshelf HTTP Server Binary
//!
//! This is the main entry point for the books REST API server.
//! It loads configuration, builds the store (seeding it if configured),
//! sets up the HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin bookshelf-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (overrides bookshelf.toml, default: 0.0.0.0)
//! - `PORT`: Server port (overrides bookshelf.toml, default: 8080)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use bookshelf::config::ServiceConfig;
use bookshelf::http::{create_router, AppState};
use bookshelf::store::{self, BookStore, MemoryStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting bookshelf HTTP server");

    // Load configuration; missing file just means defaults
    let config = match ServiceConfig::from_default_location() {
        Ok(config) => config,
        Err(e) => {
            warn!("No usable bookshelf.toml ({}), using defaults", e);
            ServiceConfig::default()
        }
    };

    // Build the store and seed it if configured
    let book_store: Arc<dyn BookStore> = Arc::new(MemoryStore::new());
    if let Some(seed_file) = &config.store.seed_file {
        let seeded = store::seed_from_file(book_store.as_ref(), seed_file).await?;
        info!("Seeded {} books from {}", seeded, seed_file.display());
    }

    // Create application state
    let state = AppState::new(book_store);

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address; environment wins over the config file
    let host = env::var("HOST").unwrap_or_else(|_| config.server.host.clone());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(config.server.port);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
