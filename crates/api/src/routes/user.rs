//! Route definitions for caller identity.

use axum::routing::get;
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes merged at the `/api/v1` root.
///
/// ```text
/// GET    /user/profile                      -> get_own_profile
/// PUT    /user/profile                      -> save_own_profile
/// GET    /user/role                         -> get_own_role
/// GET    /user/is-admin                     -> is_admin
/// GET    /users/{principal}/profile         -> get_profile
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/user/profile",
            get(user::get_own_profile).put(user::save_own_profile),
        )
        .route("/user/role", get(user::get_own_role))
        .route("/user/is-admin", get(user::is_admin))
        .route("/users/{principal}/profile", get(user::get_profile))
}
