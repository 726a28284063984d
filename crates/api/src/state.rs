use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, constructed once at startup and injected
    /// here rather than accessed through any global.
    pub pool: marketplace_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
