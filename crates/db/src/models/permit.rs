//! Permit entity model and DTOs.

use ampsite_core::types::{DbId, Principal, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `permits` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Permit {
    pub id: DbId,
    pub project_id: DbId,
    pub permit_number: String,
    pub inspector_name: String,
    /// Scheduled inspection; permits without one are never reminded.
    #[serde(with = "chrono::serde::ts_nanoseconds_option")]
    pub inspection_date: Option<Timestamp>,
    pub created_by: Principal,
    #[serde(with = "chrono::serde::ts_nanoseconds")]
    pub created_at: Timestamp,
}

/// DTO for adding a permit to a project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePermit {
    pub permit_number: String,
    pub inspector_name: String,
    #[serde(default, with = "chrono::serde::ts_nanoseconds_option")]
    pub inspection_date: Option<Timestamp>,
}
