//! Handlers for tasks, crew assignment and weather warnings.

use ampsite_core::reminders::{self, WeatherFlagOutcome};
use ampsite_core::roles::Capability;
use ampsite_core::site_log;
use ampsite_core::types::DbId;
use ampsite_db::models::task::{AssignCrew, AssignOutcome, CreateTask, FlagWeather, Task, WeatherWarning};
use ampsite_db::repositories::{TaskRepo, WeatherWarningRepo};
use ampsite_events::PlatformEvent;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use super::ensure_project_exists;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireEditor;
use crate::response::DataResponse;
use crate::state::AppState;

/// Result of a weather flag request. `warning` is absent for indoor tasks.
#[derive(Debug, Serialize)]
pub struct WeatherFlagResponse {
    pub outcome: WeatherFlagOutcome,
    pub warning: Option<WeatherWarning>,
}

/// POST /api/v1/projects/{id}/tasks
pub async fn create(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateTask>,
) -> AppResult<(StatusCode, Json<DataResponse<Task>>)> {
    site_log::validate_task(&input.description)?;
    ensure_project_exists(&state.pool, project_id).await?;

    let task = TaskRepo::create(&state.pool, project_id, &input, &user.principal).await?;

    tracing::info!(
        project_id,
        task_id = task.id,
        principal = %user.principal,
        is_outdoor = task.is_outdoor,
        "Task created"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: task })))
}

/// GET /api/v1/tasks
pub async fn list_by_due_date(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Task>>>> {
    user.require(Capability::ReadProjects)?;
    let tasks = TaskRepo::list_by_due_date(&state.pool).await?;
    Ok(Json(DataResponse { data: tasks }))
}

/// PUT /api/v1/tasks/{id}/crew
pub async fn assign_crew(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(task_id): Path<DbId>,
    Json(input): Json<AssignCrew>,
) -> AppResult<Json<DataResponse<Task>>> {
    let task = match TaskRepo::assign_crew(&state.pool, task_id, input.crew_id).await? {
        AssignOutcome::Assigned(task) => task,
        AssignOutcome::TaskNotFound => return Err(AppError::not_found("Task", task_id)),
        AssignOutcome::Rejected(err) => {
            tracing::debug!(task_id, crew_id = input.crew_id, error = %err, "Crew assignment rejected");
            return Err(AppError::Core(err));
        }
    };

    tracing::info!(
        task_id,
        project_id = task.project_id,
        crew_id = input.crew_id,
        principal = %user.principal,
        "Crew assigned"
    );
    state.event_bus.publish(
        PlatformEvent::new("crew.assigned")
            .with_source("task", task_id)
            .with_actor(&user.principal)
            .with_payload(serde_json::json!({
                "project_id": task.project_id,
                "crew_id": input.crew_id,
            })),
    );

    Ok(Json(DataResponse { data: task }))
}

/// POST /api/v1/tasks/{id}/weather-warnings
///
/// Indoor tasks are acknowledged with `not_outdoor` and nothing is stored.
pub async fn flag_weather(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(task_id): Path<DbId>,
    Json(input): Json<FlagWeather>,
) -> AppResult<Json<DataResponse<WeatherFlagResponse>>> {
    let task = TaskRepo::find_by_id(&state.pool, task_id)
        .await?
        .ok_or(AppError::not_found("Task", task_id))?;

    let outcome = reminders::evaluate_weather_flag(task.is_outdoor, &input.condition)?;
    if outcome == WeatherFlagOutcome::NotOutdoor {
        tracing::debug!(task_id, "Weather flag ignored for indoor task");
        return Ok(Json(DataResponse {
            data: WeatherFlagResponse {
                outcome,
                warning: None,
            },
        }));
    }

    let warning =
        WeatherWarningRepo::create(&state.pool, task_id, &input.condition, &user.principal).await?;

    tracing::info!(
        task_id,
        project_id = task.project_id,
        warning_id = warning.id,
        principal = %user.principal,
        "Weather warning raised"
    );
    state.event_bus.publish(
        PlatformEvent::new("task.weather_warning")
            .with_source("task", task_id)
            .with_actor(&user.principal)
            .with_payload(serde_json::json!({
                "project_id": task.project_id,
                "condition": warning.condition,
                "due_date": task.due_date.timestamp_nanos_opt(),
            })),
    );

    Ok(Json(DataResponse {
        data: WeatherFlagResponse {
            outcome,
            warning: Some(warning),
        },
    }))
}

/// GET /api/v1/tasks/{id}/weather-warnings
pub async fn list_weather_warnings(
    user: AuthUser,
    State(state): State<AppState>,
    Path(task_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<WeatherWarning>>>> {
    user.require(Capability::ReadProjects)?;
    if TaskRepo::find_by_id(&state.pool, task_id).await?.is_none() {
        return Err(AppError::not_found("Task", task_id));
    }
    let warnings = WeatherWarningRepo::list_for_task(&state.pool, task_id).await?;
    Ok(Json(DataResponse { data: warnings }))
}
