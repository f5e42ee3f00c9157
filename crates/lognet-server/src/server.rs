//! Logging service server implementation.

use std::sync::Arc;

use lognet_core::Registry;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::ServerConfig;
use crate::error::{ServiceError, ServiceResult};
use crate::routes::create_router;
use crate::state::ServiceState;

/// The HTTP boundary of the logging service.
///
/// Owns an injected [`Registry`] through shared state and serves the JSON
/// API over axum.
#[derive(Debug, Clone)]
pub struct LoggingService {
    state: Arc<ServiceState>,
}

impl LoggingService {
    /// Create a new logging service around an injected registry.
    #[must_use]
    pub fn new(config: ServerConfig, registry: Arc<Registry>) -> Self {
        let state = Arc::new(ServiceState::new(config, registry));
        Self { state }
    }

    /// Get the service state for external access.
    #[must_use]
    pub fn state(&self) -> Arc<ServiceState> {
        Arc::clone(&self.state)
    }

    /// Get a handle to the registry.
    #[must_use]
    pub fn registry(&self) -> Arc<Registry> {
        self.state.registry_handle()
    }

    /// Build the axum router for this service.
    #[must_use]
    pub fn router(&self) -> axum::Router {
        create_router(Arc::clone(&self.state))
    }

    /// Start the service and listen on the configured bind address.
    ///
    /// Runs until the server encounters a fatal error.
    ///
    /// # Errors
    ///
    /// Returns an error if binding to the address fails.
    pub async fn serve(&self) -> ServiceResult<()> {
        let addr = self.state.config().bind_addr;
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| ServiceError::BindFailed(addr, e))?;

        info!(addr = %addr, "Logging service listening");

        axum::serve(listener, self.router())
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))?;

        Ok(())
    }

    /// Start the service with graceful shutdown support.
    ///
    /// The server shuts down when the provided future completes.
    ///
    /// # Errors
    ///
    /// Returns an error if binding to the address fails.
    pub async fn serve_with_shutdown<F>(&self, shutdown: F) -> ServiceResult<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let addr = self.state.config().bind_addr;
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| ServiceError::BindFailed(addr, e))?;

        info!(addr = %addr, "Logging service listening");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))?;

        Ok(())
    }
}
