//! HTTP surface: the landing page, static assets and the `/sse` event stream.

use log::*;
pub use service::AppState;
use tokio::net::TcpListener;

mod controller;
pub mod error;
pub mod router;
mod sse;

/// Binds the configured interface and port and serves requests until Ctrl-C.
///
/// In-flight event streams are allowed to finish before the server returns.
pub async fn init_server(app_state: AppState) -> std::io::Result<()> {
    let server_url = format!(
        "{}:{}",
        app_state.config.interface(),
        app_state.config.port
    );

    let listener = TcpListener::bind(&server_url).await?;
    info!("Server starting... listening for connections on http://{server_url}");

    axum::serve(listener, router::define_routes(app_state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received, draining open streams"),
        Err(e) => error!("Failed to listen for shutdown signal: {e}"),
    }
}
