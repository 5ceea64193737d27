//! Task entity model and DTOs.

use ampsite_core::error::CoreError;
use ampsite_core::types::{DbId, Principal, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `tasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    pub project_id: DbId,
    pub description: String,
    #[serde(with = "chrono::serde::ts_nanoseconds")]
    pub due_date: Timestamp,
    pub assigned_crew_id: Option<DbId>,
    pub is_outdoor: bool,
    pub created_by: Principal,
    #[serde(with = "chrono::serde::ts_nanoseconds")]
    pub created_at: Timestamp,
    #[serde(with = "chrono::serde::ts_nanoseconds")]
    pub updated_at: Timestamp,
}

/// DTO for creating a task under a project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTask {
    pub description: String,
    #[serde(with = "chrono::serde::ts_nanoseconds")]
    pub due_date: Timestamp,
    #[serde(default)]
    pub is_outdoor: bool,
}

/// Request body for assigning a crew to a task.
#[derive(Debug, Clone, Deserialize)]
pub struct AssignCrew {
    pub crew_id: DbId,
}

/// Result of a crew assignment attempt.
///
/// `Rejected` carries the error from `ampsite_core::crew::check_assignment`
/// (an invalid crew id or a crew conflict); nothing was written.
#[derive(Debug, Clone)]
pub enum AssignOutcome {
    Assigned(Task),
    TaskNotFound,
    Rejected(CoreError),
}

/// A row from the `weather_warnings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WeatherWarning {
    pub id: DbId,
    pub task_id: DbId,
    pub condition: String,
    pub flagged_by: Principal,
    #[serde(with = "chrono::serde::ts_nanoseconds")]
    pub created_at: Timestamp,
}

/// Request body for flagging an outdoor task.
#[derive(Debug, Clone, Deserialize)]
pub struct FlagWeather {
    pub condition: String,
}
