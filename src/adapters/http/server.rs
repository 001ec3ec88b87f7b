use super::routes::build_router;
use super::state::AppState;
use crate::utils::error::{BookingError, Result};
use tokio::net::TcpListener;

pub struct BookingServer {
    state: AppState,
}

impl BookingServer {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub async fn bind(address: &str) -> Result<TcpListener> {
        TcpListener::bind(address)
            .await
            .map_err(|e| BookingError::ServerError {
                message: format!("Failed to bind {}: {}", address, e),
            })
    }

    /// Serves until Ctrl-C, then drains in-flight requests.
    pub async fn run(self, listener: TcpListener) -> Result<()> {
        let address = listener.local_addr()?;
        tracing::info!("🎬 Booking service listening on http://{}", address);

        axum::serve(listener, build_router(self.state))
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| BookingError::ServerError {
                message: format!("Server terminated: {}", e),
            })?;

        tracing::info!("Booking service stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            tracing::warn!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
