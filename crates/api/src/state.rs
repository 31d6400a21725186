use std::sync::Arc;

use assetwatch_core::clock::Clock;
use assetwatch_store::AssetStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Process-lifetime asset storage.
    pub store: Arc<AssetStore>,
    /// Source of the current UTC date for status resolution.
    pub clock: Arc<dyn Clock>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(store: Arc<AssetStore>, clock: Arc<dyn Clock>, config: ServerConfig) -> Self {
        Self {
            store,
            clock,
            config: Arc::new(config),
        }
    }
}
