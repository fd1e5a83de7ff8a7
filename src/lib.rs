pub mod api;
pub mod config;
pub mod dashboard;
pub mod models;
pub mod query;
pub mod store;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::store::{InMemoryStore, RecordStore};

/// Install the global tracing subscriber. `RUST_LOG` wins over the default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}

/// Build the store described by `config`.
pub fn build_store(config: &ServerConfig) -> Arc<dyn RecordStore> {
    if config.seed_sample_data {
        Arc::new(InMemoryStore::with_sample_data())
    } else {
        Arc::new(InMemoryStore::new())
    }
}

/// Serve the API until Ctrl-C.
pub async fn run(server_config: ServerConfig) -> Result<(), std::io::Error> {
    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let store = build_store(&server_config);
    let mut server = api::start_api_server(server_config.bind_addr, store).await?;
    tracing::info!(addr = %server.session.server_addr, "Listening");

    tokio::signal::ctrl_c().await?;
    server.shutdown();
    server.wait().await;
    Ok(())
}
