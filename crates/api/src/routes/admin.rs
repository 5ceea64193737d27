use axum::routing::put;
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// PUT    /users/{principal}/role            -> assign_role
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/users/{principal}/role", put(user::assign_role))
}
