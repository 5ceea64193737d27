//! Handlers for permits.

use ampsite_core::roles::Capability;
use ampsite_core::site_log;
use ampsite_core::types::DbId;
use ampsite_db::models::permit::{CreatePermit, Permit};
use ampsite_db::repositories::PermitRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use super::ensure_project_exists;
use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireEditor;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/projects/{id}/permits
pub async fn create(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreatePermit>,
) -> AppResult<(StatusCode, Json<DataResponse<Permit>>)> {
    site_log::validate_permit(&input.permit_number, &input.inspector_name)?;
    ensure_project_exists(&state.pool, project_id).await?;

    let permit = PermitRepo::create(&state.pool, project_id, &input, &user.principal).await?;

    tracing::info!(
        project_id,
        permit_id = permit.id,
        principal = %user.principal,
        "Permit added"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: permit })))
}

/// GET /api/v1/projects/{id}/permits
pub async fn list(
    user: AuthUser,
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Permit>>>> {
    user.require(Capability::ReadProjects)?;
    ensure_project_exists(&state.pool, project_id).await?;
    let permits = PermitRepo::list_for_project(&state.pool, project_id).await?;
    Ok(Json(DataResponse { data: permits }))
}
