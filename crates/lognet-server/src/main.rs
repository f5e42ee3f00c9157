//! lognet logging service binary.
//!
//! Serves the in-memory log registry over HTTP.

use std::net::SocketAddr;
use std::sync::Arc;

use lognet_core::Registry;
use lognet_server::{LoggingService, ServerConfig};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse command line args
    let args: Vec<String> = std::env::args().collect();

    let bind_addr: SocketAddr = args
        .get(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 8000)));

    info!("Starting lognet logging service on {}", bind_addr);
    info!("  Ping endpoint:  http://{}/ping", bind_addr);
    info!("  Log endpoint:   http://{}/log", bind_addr);

    let registry = Arc::new(Registry::default());
    let service = LoggingService::new(ServerConfig::new(bind_addr), registry);

    if let Err(e) = service.serve().await {
        error!("Logging service error: {}", e);
        std::process::exit(1);
    }
}
