//! Handler for the dashboard summary.

use ampsite_core::roles::Capability;
use ampsite_db::models::project::DashboardSummary;
use ampsite_db::repositories::ProjectRepo;
use axum::extract::State;
use axum::Json;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/dashboard/summary
pub async fn summary(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<DashboardSummary>>> {
    user.require(Capability::ReadProjects)?;
    let summary = ProjectRepo::dashboard_summary(&state.pool).await?;
    Ok(Json(DataResponse { data: summary }))
}
