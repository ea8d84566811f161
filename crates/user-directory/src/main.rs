//! # User Directory Service
//!
//! Boots the directory actor with its seed records, serves the REST routes and
//! shuts both down cleanly on Ctrl-C.
//!
//! ```bash
//! RUST_LOG=info cargo run -p user-directory -- --port 9090
//! curl localhost:9090/api/v1/users
//! ```

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{info, warn};
use user_directory::api;
use user_directory::config::ServerConfig;
use user_directory::lifecycle::{setup_tracing, DirectorySystem};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    setup_tracing();

    let system = DirectorySystem::new(config.buffer_size);
    let app = api::app(system.user_client.clone(), config.request_timeout());

    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    info!(name = %config.name, %address, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    system.shutdown().await.context("directory actor failed")?;
    info!("Application stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C; shutting down");
    }
    info!("Shutdown signal received");
}
