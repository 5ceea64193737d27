//! Role assignment model.

use ampsite_core::types::{Principal, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `user_roles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserRoleAssignment {
    pub principal: Principal,
    pub role_id: i16,
    pub assigned_by: Principal,
    #[serde(with = "chrono::serde::ts_nanoseconds")]
    pub created_at: Timestamp,
    #[serde(with = "chrono::serde::ts_nanoseconds")]
    pub updated_at: Timestamp,
}

/// Request body for assigning a role.
#[derive(Debug, Clone, Deserialize)]
pub struct AssignRole {
    pub role: String,
}
