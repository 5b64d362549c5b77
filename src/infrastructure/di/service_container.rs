//! Service container for dependency injection
//!
//! Wires the executor with its configuration provider and transport.

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::services::RequestExecutor;
use crate::config::{global_config_path, ConfigProvider, LayeredConfigProvider, Settings};
use crate::infrastructure::traits::{HttpTransport, ReqwestTransport};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Settings snapshot taken at startup (pre-flight checks, team default)
    pub settings: Arc<Settings>,

    /// File written by `config set` / `config clear`
    pub config_path: Option<PathBuf>,

    /// Live configuration read by the executor on every call
    pub config: Arc<dyn ConfigProvider>,

    /// HTTP transport abstraction
    pub transport: Arc<dyn HttpTransport>,

    pub executor: RequestExecutor,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(
            settings,
            Arc::new(LayeredConfigProvider::new()),
            Arc::new(ReqwestTransport),
        )
        .with_config_path(global_config_path())
    }

    /// Point the `config` commands at another file.
    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        config: Arc<dyn ConfigProvider>,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        let settings = Arc::new(settings);
        let executor = RequestExecutor::new(config.clone(), transport.clone());

        Self {
            settings,
            config_path: None,
            config,
            transport,
            executor,
        }
    }
}
