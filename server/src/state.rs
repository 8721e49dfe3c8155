//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! host is read-only over the pipeline's output directories, so the state is
//! just the resolved configuration.

use std::path::Path;
use std::sync::Arc;

use crate::config::ServerConfig;

/// Clone is required by Axum; the config is shared behind an `Arc`.
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self { config: Arc::new(config) }
    }

    pub fn maps_dir(&self) -> &Path {
        &self.config.maps_dir
    }

    pub fn reports_dir(&self) -> &Path {
        &self.config.reports_dir
    }

    pub fn presentation_dir(&self) -> &Path {
        &self.config.presentation_dir
    }
}
