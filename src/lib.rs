pub mod agenda; // Dashboard listing + KPIs
pub mod api; // Local JSON API for the reception screen
pub mod config;
pub mod core_state; // Shared store behind a lock
pub mod dui;
pub mod models;
pub mod reports; // Daily rollup + busiest slots
pub mod search;
pub mod seed;
pub mod store;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Runs the reception server until Ctrl-C.
pub async fn run() -> Result<(), api::ServerError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let core = Arc::new(core_state::CoreState::new());

    if config::seed_on_startup() {
        let today = chrono::Local::now().date_naive();
        match core.write_store() {
            Ok(mut store) => {
                store.load_demo_data(today);
            }
            Err(e) => tracing::warn!("Skipping startup seed: {e}"),
        }
    }

    let server = api::start_server(core, config::bind_addr()).await?;
    tracing::info!(addr = %server.addr(), "Reception screen API ready");

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Cannot listen for shutdown signal: {e}");
    }

    server.stop().await
}
