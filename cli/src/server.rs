//! HTTP server startup and shutdown

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

use copilot_core::application::kickoff::StandardKickoffService;
use copilot_core::domain::service_config::CopilotConfig;
use copilot_core::infrastructure::crew::RemoteCrewFactory;
use copilot_core::presentation::api;

pub async fn serve(
    config_path: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
) -> Result<()> {
    // Load configuration
    let config =
        CopilotConfig::load_or_default(config_path).context("Failed to load configuration")?;

    config
        .validate()
        .context("Configuration validation failed")?;

    info!("Configuration loaded: crew endpoint={}", config.crew.endpoint);

    // Wire services: factory builds one crew per request
    let factory = Arc::new(RemoteCrewFactory::from_config(&config));
    let kickoff_service = Arc::new(StandardKickoffService::new(factory));

    // Build HTTP router
    let app = api::app(kickoff_service);

    // CLI flags win over config file values
    let bind_address = host.unwrap_or_else(|| config.server.bind_address.clone());
    let port = port.unwrap_or(config.server.port);

    let addr = format!("{}:{}", bind_address, port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("LinkedIn Copilot API listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("LinkedIn Copilot API shutting down");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}
