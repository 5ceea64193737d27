//! Route definitions for change order review.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::change_order;
use crate::state::AppState;

/// Routes mounted at `/change-orders`.
///
/// ```text
/// GET    /pending                           -> list_pending
/// POST   /{id}/approve                      -> approve
/// POST   /{id}/reject                       -> reject
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/pending", get(change_order::list_pending))
        .route("/{id}/approve", post(change_order::approve))
        .route("/{id}/reject", post(change_order::reject))
}
