//! Handlers for the material purchase ledger and budget figures.

use ampsite_core::ledger::{self, BudgetSummary};
use ampsite_core::roles::Capability;
use ampsite_core::types::DbId;
use ampsite_db::models::material_purchase::{CreateMaterialPurchase, MaterialPurchase};
use ampsite_db::repositories::{MaterialPurchaseRepo, ProjectRepo};
use ampsite_events::PlatformEvent;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use super::ensure_project_exists;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireEditor;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/projects/{id}/purchases
///
/// The stored total is always `quantity * unit_cost`.
pub async fn record_purchase(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateMaterialPurchase>,
) -> AppResult<(StatusCode, Json<DataResponse<MaterialPurchase>>)> {
    let total = ledger::price_purchase(&input.item, input.quantity, input.unit_cost, &input.supplier)?;
    ensure_project_exists(&state.pool, project_id).await?;

    let purchase =
        MaterialPurchaseRepo::create(&state.pool, project_id, &input, total, &user.principal)
            .await?;

    tracing::info!(
        project_id,
        purchase_id = purchase.id,
        principal = %user.principal,
        total_cost = purchase.total_cost,
        "Material purchase recorded"
    );
    state.event_bus.publish(
        PlatformEvent::new("material.purchased")
            .with_source("project", project_id)
            .with_actor(&user.principal)
            .with_payload(serde_json::json!({
                "purchase_id": purchase.id,
                "item": purchase.item,
                "total_cost": purchase.total_cost,
            })),
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: purchase })))
}

/// GET /api/v1/projects/{id}/purchases
pub async fn list_purchases(
    user: AuthUser,
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<MaterialPurchase>>>> {
    user.require(Capability::ReadProjects)?;
    ensure_project_exists(&state.pool, project_id).await?;
    let purchases = MaterialPurchaseRepo::list_for_project(&state.pool, project_id).await?;
    Ok(Json(DataResponse { data: purchases }))
}

/// GET /api/v1/projects/{id}/budget
pub async fn budget(
    user: AuthUser,
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<DataResponse<BudgetSummary>>> {
    user.require(Capability::ReadProjects)?;
    let project = ProjectRepo::find_by_id(&state.pool, project_id)
        .await?
        .ok_or(AppError::not_found("Project", project_id))?;
    let totals = MaterialPurchaseRepo::totals_for_project(&state.pool, project_id).await?;
    let summary = BudgetSummary::from_totals(project.project_value, totals);
    Ok(Json(DataResponse { data: summary }))
}
