//! Change order entity model and DTOs.

use ampsite_core::types::{DbId, Principal, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::status::StatusId;

/// A row from the `change_orders` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ChangeOrder {
    pub id: DbId,
    pub project_id: DbId,
    pub description: String,
    pub additional_cost: f64,
    pub status_id: StatusId,
    pub status: String,
    pub created_by: Principal,
    pub resolved_by: Option<Principal>,
    #[serde(with = "chrono::serde::ts_nanoseconds_option")]
    pub resolved_at: Option<Timestamp>,
    #[serde(with = "chrono::serde::ts_nanoseconds")]
    pub created_at: Timestamp,
}

/// DTO for submitting a change order against a project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateChangeOrder {
    pub description: String,
    pub additional_cost: f64,
}

/// Result of an approve/reject attempt.
#[derive(Debug, Clone)]
pub enum ResolveOutcome {
    /// The order was pending and is now resolved.
    Resolved(ChangeOrder),
    /// The order was already approved or rejected; nothing changed.
    AlreadyResolved(ChangeOrder),
    /// No order with that id exists.
    NotFound,
}
