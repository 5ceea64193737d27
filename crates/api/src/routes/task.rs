//! Route definitions for the `/tasks` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::task;
use crate::state::AppState;

/// Routes mounted at `/tasks`.
///
/// ```text
/// GET    /                                  -> list_by_due_date
/// PUT    /{id}/crew                         -> assign_crew
/// GET    /{id}/weather-warnings             -> list_weather_warnings
/// POST   /{id}/weather-warnings             -> flag_weather
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(task::list_by_due_date))
        .route("/{id}/crew", put(task::assign_crew))
        .route(
            "/{id}/weather-warnings",
            get(task::list_weather_warnings).post(task::flag_weather),
        )
}
