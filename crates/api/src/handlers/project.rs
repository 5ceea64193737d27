//! Handlers for the `/projects` resource.

use ampsite_core::project::{self, state_machine, NewProjectFields};
use ampsite_core::roles::Capability;
use ampsite_core::types::DbId;
use ampsite_db::models::project::{AdvanceProjectStatus, CreateProject, Project};
use ampsite_db::repositories::ProjectRepo;
use ampsite_events::PlatformEvent;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireEditor;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/projects
pub async fn create(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<DataResponse<Project>>)> {
    project::validate_new_project(
        &NewProjectFields {
            name: &input.name,
            location: &input.location,
            client_name: &input.client_name,
            general_contractor: &input.general_contractor,
            project_value: input.project_value,
            notes: &input.notes,
            estimated_completion_date: input.estimated_completion_date,
        },
        Utc::now(),
    )?;

    let project = ProjectRepo::create(&state.pool, &input, &user.principal).await?;

    tracing::info!(
        project_id = project.id,
        principal = %user.principal,
        project_value = project.project_value,
        "Project created"
    );
    state.event_bus.publish(
        PlatformEvent::new("project.created")
            .with_source("project", project.id)
            .with_actor(&user.principal)
            .with_payload(serde_json::json!({
                "name": project.name,
                "project_value": project.project_value,
            })),
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: project })))
}

/// GET /api/v1/projects
pub async fn list(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Project>>>> {
    user.require(Capability::ReadProjects)?;
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: projects }))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Project>>> {
    user.require(Capability::ReadProjects)?;
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Project", id))?;
    Ok(Json(DataResponse { data: project }))
}

/// PUT /api/v1/projects/{id}/status
///
/// Only the project's creator or an admin may advance it.
pub async fn advance_status(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<AdvanceProjectStatus>,
) -> AppResult<Json<DataResponse<Project>>> {
    let target = project::parse_status(&input.status)?;

    let current = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Project", id))?;

    if current.created_by != user.principal && !user.is_admin() {
        return Err(AppError::Core(ampsite_core::error::CoreError::Forbidden(
            "Only the project creator or an admin may change its status".into(),
        )));
    }

    state_machine::validate_transition(current.status_id, target)?;

    let updated = ProjectRepo::update_status(&state.pool, id, current.status_id, target)
        .await?
        .ok_or_else(|| {
            AppError::BadRequest(format!(
                "Project {id} changed status concurrently; reload and retry"
            ))
        })?;

    tracing::info!(
        project_id = id,
        principal = %user.principal,
        from = %current.status,
        to = %updated.status,
        "Project status advanced"
    );
    state.event_bus.publish(
        PlatformEvent::new("project.status_changed")
            .with_source("project", id)
            .with_actor(&user.principal)
            .with_payload(serde_json::json!({
                "from": current.status,
                "to": updated.status,
            })),
    );

    Ok(Json(DataResponse { data: updated }))
}
