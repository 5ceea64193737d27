//! Handlers for safety incident reports.

use ampsite_core::roles::Capability;
use ampsite_core::site_log;
use ampsite_core::types::DbId;
use ampsite_db::models::safety_incident::{CreateSafetyIncident, SafetyIncident};
use ampsite_db::repositories::SafetyIncidentRepo;
use ampsite_events::PlatformEvent;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use super::ensure_project_exists;
use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireEditor;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/projects/{id}/safety-incidents
pub async fn report(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateSafetyIncident>,
) -> AppResult<(StatusCode, Json<DataResponse<SafetyIncident>>)> {
    site_log::validate_incident(&input.description, &input.reported_by)?;
    ensure_project_exists(&state.pool, project_id).await?;

    let incident =
        SafetyIncidentRepo::create(&state.pool, project_id, &input, &user.principal).await?;

    tracing::info!(
        project_id,
        incident_id = incident.id,
        principal = %user.principal,
        "Safety incident reported"
    );
    state.event_bus.publish(
        PlatformEvent::new("safety.incident_reported")
            .with_source("project", project_id)
            .with_actor(&user.principal)
            .with_payload(serde_json::json!({
                "incident_id": incident.id,
                "reporter_name": incident.reporter_name,
            })),
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: incident })))
}

/// GET /api/v1/projects/{id}/safety-incidents
pub async fn list(
    user: AuthUser,
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<SafetyIncident>>>> {
    user.require(Capability::ReadProjects)?;
    ensure_project_exists(&state.pool, project_id).await?;
    let incidents = SafetyIncidentRepo::list_for_project(&state.pool, project_id).await?;
    Ok(Json(DataResponse { data: incidents }))
}
