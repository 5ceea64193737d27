//! Project entity model and DTOs.

use ampsite_core::types::{DbId, Principal, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::status::StatusId;

/// A project row from the `projects` table.
///
/// `status` is the wire name resolved from `project_statuses`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub location: String,
    pub client_name: String,
    pub general_contractor: String,
    pub notes: String,
    pub project_value: f64,
    pub status_id: StatusId,
    pub status: String,
    #[serde(with = "chrono::serde::ts_nanoseconds")]
    pub start_date: Timestamp,
    #[serde(with = "chrono::serde::ts_nanoseconds_option")]
    pub estimated_completion_date: Option<Timestamp>,
    pub created_by: Principal,
    #[serde(with = "chrono::serde::ts_nanoseconds")]
    pub created_at: Timestamp,
    #[serde(with = "chrono::serde::ts_nanoseconds")]
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub name: String,
    pub location: String,
    pub client_name: String,
    pub general_contractor: String,
    pub project_value: f64,
    #[serde(default)]
    pub notes: String,
    #[serde(default, with = "chrono::serde::ts_nanoseconds_option")]
    pub estimated_completion_date: Option<Timestamp>,
}

/// Request body for advancing a project's status.
#[derive(Debug, Clone, Deserialize)]
pub struct AdvanceProjectStatus {
    /// Target status wire name: `inProgress` or `completed`.
    pub status: String,
}

/// Aggregate figures shown on the dashboard.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DashboardSummary {
    pub total_projects: i64,
    pub active_projects: i64,
    pub completed_projects: i64,
    pub total_project_value: f64,
    pub pending_change_orders: i64,
}
