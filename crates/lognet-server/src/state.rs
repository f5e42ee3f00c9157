//! Shared state for the service boundary.

use std::sync::Arc;

use lognet_core::Registry;

use crate::config::ServerConfig;

/// State shared by every request handler.
///
/// Holds the injected [`Registry`] and the server configuration. The
/// registry is never a global: tests construct a fresh one per state.
#[derive(Debug)]
pub struct ServiceState {
    config: ServerConfig,
    registry: Arc<Registry>,
}

impl ServiceState {
    /// Creates new shared state around an injected registry.
    #[must_use]
    pub fn new(config: ServerConfig, registry: Arc<Registry>) -> Self {
        Self { config, registry }
    }

    /// The server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// The log registry.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// A cloneable handle to the registry.
    #[must_use]
    pub fn registry_handle(&self) -> Arc<Registry> {
        Arc::clone(&self.registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lognet_core::LogEntry;

    #[test]
    fn state_shares_the_injected_registry() {
        let registry = Arc::new(Registry::default());
        let state = ServiceState::new(ServerConfig::default(), Arc::clone(&registry));

        state.registry().record(LogEntry {
            id: "svc1".to_string(),
            timestamp: "t".to_string(),
            level: "INFO".to_string(),
            message: "m".to_string(),
        });

        assert_eq!(registry.retrieve("svc1").len(), 1);
        assert_eq!(state.registry_handle().retrieve("svc1").len(), 1);
    }
}
