//! Safety incident log entries.

use ampsite_core::types::{DbId, Principal, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the append-only `safety_incidents` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SafetyIncident {
    pub id: DbId,
    pub project_id: DbId,
    pub description: String,
    /// Name typed by the reporter on site.
    pub reporter_name: String,
    /// Authenticated principal that submitted the report.
    pub reported_by: Principal,
    #[serde(with = "chrono::serde::ts_nanoseconds")]
    pub timestamp: Timestamp,
}

/// DTO for reporting an incident.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSafetyIncident {
    pub description: String,
    pub reported_by: String,
}
