//! Handlers for field records: crew check-ins, mileage, photo annotations
//! and code compliance verifications.

use ampsite_core::error::CoreError;
use ampsite_core::roles::Capability;
use ampsite_core::site_log;
use ampsite_core::types::DbId;
use ampsite_db::models::site_log::{
    CheckIn, ComplianceVerification, CreateCheckIn, CreateComplianceVerification,
    CreateMileageLog, CreatePhotoAnnotation, MileageLog, PhotoAnnotation,
};
use ampsite_db::repositories::SiteLogRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use super::ensure_project_exists;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireEditor;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Check-ins
// ---------------------------------------------------------------------------

/// POST /api/v1/projects/{id}/check-ins
pub async fn check_in(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateCheckIn>,
) -> AppResult<(StatusCode, Json<DataResponse<CheckIn>>)> {
    site_log::validate_check_in(&input.crew_member_name)?;
    ensure_project_exists(&state.pool, project_id).await?;

    let record = SiteLogRepo::create_check_in(&state.pool, project_id, &input, &user.principal).await?;
    tracing::info!(project_id, check_in_id = record.id, principal = %user.principal, "Crew checked in");
    Ok((StatusCode::CREATED, Json(DataResponse { data: record })))
}

/// GET /api/v1/projects/{id}/check-ins
pub async fn list_check_ins(
    user: AuthUser,
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<CheckIn>>>> {
    user.require(Capability::ReadProjects)?;
    ensure_project_exists(&state.pool, project_id).await?;
    let records = SiteLogRepo::list_check_ins(&state.pool, project_id).await?;
    Ok(Json(DataResponse { data: records }))
}

// ---------------------------------------------------------------------------
// Mileage
// ---------------------------------------------------------------------------

/// POST /api/v1/projects/{id}/mileage
pub async fn log_mileage(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateMileageLog>,
) -> AppResult<(StatusCode, Json<DataResponse<MileageLog>>)> {
    site_log::validate_mileage(input.miles, input.drive_time_minutes)?;
    ensure_project_exists(&state.pool, project_id).await?;

    let record = SiteLogRepo::create_mileage(&state.pool, project_id, &input, &user.principal).await?;
    tracing::info!(
        project_id,
        mileage_id = record.id,
        miles = record.miles,
        principal = %user.principal,
        "Mileage logged"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: record })))
}

/// GET /api/v1/projects/{id}/mileage
pub async fn list_mileage(
    user: AuthUser,
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<MileageLog>>>> {
    user.require(Capability::ReadProjects)?;
    ensure_project_exists(&state.pool, project_id).await?;
    let records = SiteLogRepo::list_mileage(&state.pool, project_id).await?;
    Ok(Json(DataResponse { data: records }))
}

// ---------------------------------------------------------------------------
// Photo annotations
// ---------------------------------------------------------------------------

/// POST /api/v1/projects/{id}/photo-annotations
///
/// The annotated task must belong to the project.
pub async fn annotate_photo(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreatePhotoAnnotation>,
) -> AppResult<(StatusCode, Json<DataResponse<PhotoAnnotation>>)> {
    site_log::validate_photo_annotation(&input.description)?;
    ensure_project_exists(&state.pool, project_id).await?;

    let record =
        SiteLogRepo::create_photo_annotation(&state.pool, project_id, &input, &user.principal)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::NotFound {
                    entity: "Task",
                    id: input.task_id,
                })
            })?;
    tracing::info!(
        project_id,
        task_id = record.task_id,
        annotation_id = record.id,
        principal = %user.principal,
        "Photo annotated"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: record })))
}

/// GET /api/v1/projects/{id}/photo-annotations
pub async fn list_photo_annotations(
    user: AuthUser,
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<PhotoAnnotation>>>> {
    user.require(Capability::ReadProjects)?;
    ensure_project_exists(&state.pool, project_id).await?;
    let records = SiteLogRepo::list_photo_annotations(&state.pool, project_id).await?;
    Ok(Json(DataResponse { data: records }))
}

// ---------------------------------------------------------------------------
// Code compliance
// ---------------------------------------------------------------------------

/// POST /api/v1/projects/{id}/compliance-verifications
pub async fn verify_compliance(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateComplianceVerification>,
) -> AppResult<(StatusCode, Json<DataResponse<ComplianceVerification>>)> {
    site_log::validate_compliance(&input.code_section, &input.verified_by)?;
    ensure_project_exists(&state.pool, project_id).await?;

    let record =
        SiteLogRepo::create_compliance(&state.pool, project_id, &input, &user.principal).await?;
    tracing::info!(
        project_id,
        verification_id = record.id,
        code_section = %record.code_section,
        principal = %user.principal,
        "Code compliance verified"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: record })))
}

/// GET /api/v1/projects/{id}/compliance-verifications
pub async fn list_compliance(
    user: AuthUser,
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<ComplianceVerification>>>> {
    user.require(Capability::ReadProjects)?;
    ensure_project_exists(&state.pool, project_id).await?;
    let records = SiteLogRepo::list_compliance(&state.pool, project_id).await?;
    Ok(Json(DataResponse { data: records }))
}
