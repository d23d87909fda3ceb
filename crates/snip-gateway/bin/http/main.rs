mod cli;

use crate::cli::CLI;
use clap::Parser;
use snip_core::Registry;
use snip_gateway::shutdown::shutdown_signal;
use snip_gateway::sweeper::spawn_sweeper;
use snip_gateway::{App, AppState};
use snip_registry::{InMemoryRegistry, RegistrySettings};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::parse();
    snip_telemetry::init(config.log_format.into())?;

    let settings = RegistrySettings::builder()
        .max_attempts(config.max_attempts)
        .build();
    let registry: Arc<dyn Registry> = Arc::new(InMemoryRegistry::new(settings));

    let state = AppState::new(Arc::clone(&registry), config.listen_addr)
        .with_public_base_url(config.public_base_url.clone());

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(
        listen_addr = %listener.local_addr()?,
        max_attempts = config.max_attempts,
        sweep_interval_secs = ?config.sweep_interval_secs,
        log_format = %config.log_format,
        "starting snip gateway"
    );

    let sweeper = config
        .sweep_interval_secs
        .map(|secs| spawn_sweeper(Arc::clone(&registry), Duration::from_secs(secs)));

    axum::serve(listener, App::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(sweeper) = sweeper {
        sweeper.abort();
    }
    info!("snip gateway stopped");

    Ok(())
}
