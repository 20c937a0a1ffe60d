//! Reference task API CLI command

use crate::api;

/// Execute the reference API server
pub async fn execute(host: &str, port: u16, prefix: &str) {
    if let Err(e) = api::start_server(host, port, prefix).await {
        tracing::error!(error = %e, "task API server stopped");
        eprintln!("Failed to start task API on {}:{}: {}", host, port, e);
        std::process::exit(1);
    }
}
