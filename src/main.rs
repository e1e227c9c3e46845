//! chatterd - a minimal multi-client line chat daemon.
//!
//! Clients connect over TCP, register a unique nick, and broadcast text
//! lines to every currently registered client.

mod config;
mod dispatch;
mod error;
mod network;
mod state;

use crate::config::Config;
use crate::dispatch::Dispatcher;
use crate::network::Gateway;
use crate::state::Hub;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());

    let config = Config::load(&config_path).map_err(|e| {
        error!(path = %config_path, error = %e, "Failed to load config");
        e
    })?;

    info!(server = %config.server.name, "Starting chatterd");

    let hub = Arc::new(Hub::new(&config));
    let dispatcher = Arc::new(Dispatcher::new());

    let gateway = Gateway::bind(config.listen.address, hub, dispatcher).await?;
    gateway.run().await
}
