use std::sync::Arc;

use dioxus_logger::tracing;

use crate::server::{config::Config, data::registry::ServerRegistry, error::AppError};

/// Loads the server registry from the configured server list.
///
/// Runs once before the bot connects. A missing or unreadable file aborts startup
/// rather than running with an empty registry.
///
/// # Arguments
/// - `config` - Application configuration containing the server list path
///
/// # Returns
/// - `Ok(Arc<ServerRegistry>)` - Loaded registry, ready to be shared
/// - `Err(AppError::RegistryErr)` - Failed to read the server list
pub async fn load_server_registry(config: &Config) -> Result<Arc<ServerRegistry>, AppError> {
    let registry = ServerRegistry::load(&config.servers_file).await?;

    if registry.is_empty() {
        tracing::warn!(
            "Server list {} is empty; every start request will be rejected",
            config.servers_file.display()
        );
    }

    tracing::info!(
        "Loaded {} servers from {}",
        registry.len(),
        config.servers_file.display()
    );

    Ok(Arc::new(registry))
}

/// Logs whether virtualization endpoint credentials were supplied.
pub fn log_virtualization_config(config: &Config) {
    match &config.virtualization {
        Some(virtualization) => tracing::info!(
            "Virtualization endpoint {} (node {}) configured but not contacted; start requests are validated only",
            virtualization.host,
            virtualization.node
        ),
        None => tracing::debug!("No virtualization endpoint configured"),
    }
}

/// Completes when the process receives SIGINT or SIGTERM.
///
/// Only Ctrl-C is observed on platforms without Unix signals.
pub async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {}
                    _ = terminate.recv() => {}
                }
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                wait_for_ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    wait_for_ctrl_c().await;
}

async fn wait_for_ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}
