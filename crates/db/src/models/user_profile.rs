//! User profile model.

use ampsite_core::types::{Principal, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `user_profiles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserProfile {
    pub principal: Principal,
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    #[serde(with = "chrono::serde::ts_nanoseconds")]
    pub created_at: Timestamp,
    #[serde(with = "chrono::serde::ts_nanoseconds")]
    pub updated_at: Timestamp,
}
