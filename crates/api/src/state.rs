use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all handlers via `State<AppState>`.
///
/// Cheap to clone; inner data is behind `Arc` or already `Clone`.
#[derive(Clone)]
pub struct AppState {
    pub pool: ampsite_db::DbPool,
    pub config: Arc<ServerConfig>,
    /// Event bus for domain events (persistence and webhook forwarding
    /// subscribe to it).
    pub event_bus: Arc<ampsite_events::EventBus>,
}
