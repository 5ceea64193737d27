//! Handler for on-demand reminder sweeps.

use ampsite_core::roles::Capability;
use axum::extract::State;
use axum::Json;
use chrono::Utc;

use crate::background::reminder_sweep::{self, SweepReport};
use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/reminders/send
pub async fn send(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<SweepReport>>> {
    user.require(Capability::RunReminders)?;

    let report = reminder_sweep::sweep(&state.pool, &state.event_bus, Utc::now()).await?;

    tracing::info!(
        principal = %user.principal,
        evaluated = report.evaluated,
        sent = report.sent,
        suppressed = report.suppressed,
        "Reminder sweep run on demand"
    );
    Ok(Json(DataResponse { data: report }))
}
