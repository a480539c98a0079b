//! Public SDK surface for Dreamweaver.
//!
//! This crate re-exports the building blocks and provides the bootstrap
//! helpers used by the `dreamweaver` binary.

/// Re-export for convenience.
pub use dreamweaver_config as config;
/// Re-export for convenience.
pub use dreamweaver_server as server;
/// Re-export for convenience.
pub use dreamweaver_store as store;
/// Re-export for convenience.
pub use dreamweaver_synth as synth;

use anyhow::Context;
use dreamweaver_config::{DreamweaverConfig, ServerConfig};
use dreamweaver_server::{DreamService, RngSource};
use dreamweaver_store::{DreamStore, SqliteDreamStore};
use log::info;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Initialize logging with millisecond timestamps, honoring `RUST_LOG`.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::builder()
        .format_timestamp_millis()
        .parse_default_env()
        .try_init();
}

/// Open and initialize the configured store, then wrap it in a service.
pub fn build_service(config: &DreamweaverConfig) -> anyhow::Result<DreamService> {
    let store = SqliteDreamStore::open(&config.store.path)
        .with_context(|| format!("failed to open dream store at {}", config.store.path))?;
    store
        .initialize()
        .context("failed to initialize dream store")?;
    info!(
        "service ready (store={}, seeded={})",
        store.path().display(),
        config.synth.seed.is_some()
    );
    Ok(DreamService::with_rng(
        Arc::new(store),
        RngSource::from_seed(config.synth.seed),
    ))
}

/// Bind the configured listen address, resolving hostnames such as `localhost`.
pub async fn bind_listener(server: &ServerConfig) -> anyhow::Result<TcpListener> {
    let (host, port) = server.bind_target();
    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("failed to bind {host}:{port}"))?;
    Ok(listener)
}
