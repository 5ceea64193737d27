//! Handlers for change orders.

use ampsite_core::change_order::{self, Resolution};
use ampsite_core::roles::Capability;
use ampsite_core::types::DbId;
use ampsite_db::models::change_order::{ChangeOrder, CreateChangeOrder, ResolveOutcome};
use ampsite_db::repositories::ChangeOrderRepo;
use ampsite_events::PlatformEvent;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use super::ensure_project_exists;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::{RequireApprover, RequireEditor};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/projects/{id}/change-orders
pub async fn create(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateChangeOrder>,
) -> AppResult<(StatusCode, Json<DataResponse<ChangeOrder>>)> {
    change_order::validate_new(&input.description, input.additional_cost)?;
    ensure_project_exists(&state.pool, project_id).await?;

    let order = ChangeOrderRepo::create(&state.pool, project_id, &input, &user.principal).await?;

    tracing::info!(
        project_id,
        change_order_id = order.id,
        principal = %user.principal,
        additional_cost = order.additional_cost,
        "Change order submitted"
    );
    state.event_bus.publish(
        PlatformEvent::new("change_order.created")
            .with_source("change_order", order.id)
            .with_actor(&user.principal)
            .with_payload(serde_json::json!({
                "project_id": project_id,
                "additional_cost": order.additional_cost,
            })),
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: order })))
}

/// GET /api/v1/projects/{id}/change-orders
pub async fn list_for_project(
    user: AuthUser,
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<ChangeOrder>>>> {
    user.require(Capability::ReadProjects)?;
    ensure_project_exists(&state.pool, project_id).await?;
    let orders = ChangeOrderRepo::list_for_project(&state.pool, project_id).await?;
    Ok(Json(DataResponse { data: orders }))
}

/// GET /api/v1/change-orders/pending
pub async fn list_pending(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ChangeOrder>>>> {
    user.require(Capability::ReadProjects)?;
    let orders = ChangeOrderRepo::list_pending(&state.pool).await?;
    Ok(Json(DataResponse { data: orders }))
}

/// POST /api/v1/change-orders/{id}/approve
pub async fn approve(
    RequireApprover(user): RequireApprover,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ChangeOrder>>> {
    resolve(&state, &user, id, Resolution::Approve).await
}

/// POST /api/v1/change-orders/{id}/reject
pub async fn reject(
    RequireApprover(user): RequireApprover,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ChangeOrder>>> {
    resolve(&state, &user, id, Resolution::Reject).await
}

async fn resolve(
    state: &AppState,
    user: &AuthUser,
    id: DbId,
    resolution: Resolution,
) -> AppResult<Json<DataResponse<ChangeOrder>>> {
    let order = match ChangeOrderRepo::resolve(&state.pool, id, resolution, &user.principal).await? {
        ResolveOutcome::Resolved(order) => order,
        ResolveOutcome::AlreadyResolved(order) => {
            tracing::debug!(change_order_id = id, status = %order.status, "Change order already resolved");
            return Err(AppError::Core(change_order::already_resolved(id)));
        }
        ResolveOutcome::NotFound => return Err(AppError::not_found("ChangeOrder", id)),
    };

    tracing::info!(
        change_order_id = id,
        project_id = order.project_id,
        principal = %user.principal,
        status = %order.status,
        value_delta = resolution.value_delta(order.additional_cost),
        "Change order resolved"
    );
    state.event_bus.publish(
        PlatformEvent::new(resolution.event_type())
            .with_source("change_order", id)
            .with_actor(&user.principal)
            .with_payload(serde_json::json!({
                "project_id": order.project_id,
                "additional_cost": order.additional_cost,
            })),
    );

    Ok(Json(DataResponse { data: order }))
}
