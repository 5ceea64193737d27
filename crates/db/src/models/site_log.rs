//! Append-only field records: check-ins, mileage, photo annotations and
//! code compliance verifications.

use ampsite_core::types::{DbId, Principal, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CheckIn {
    pub id: DbId,
    pub project_id: DbId,
    pub crew_member_name: String,
    pub checked_in_by: Principal,
    #[serde(with = "chrono::serde::ts_nanoseconds")]
    pub checked_in_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCheckIn {
    pub crew_member_name: String,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MileageLog {
    pub id: DbId,
    pub project_id: DbId,
    pub miles: f64,
    pub drive_time_minutes: i64,
    pub logged_by: Principal,
    #[serde(with = "chrono::serde::ts_nanoseconds")]
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateMileageLog {
    pub miles: f64,
    pub drive_time_minutes: i64,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PhotoAnnotation {
    pub id: DbId,
    pub project_id: DbId,
    pub task_id: DbId,
    pub description: String,
    pub created_by: Principal,
    #[serde(with = "chrono::serde::ts_nanoseconds")]
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePhotoAnnotation {
    pub task_id: DbId,
    pub description: String,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ComplianceVerification {
    pub id: DbId,
    pub project_id: DbId,
    pub code_section: String,
    pub verified_by: String,
    pub recorded_by: Principal,
    #[serde(with = "chrono::serde::ts_nanoseconds")]
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateComplianceVerification {
    pub code_section: String,
    pub verified_by: String,
}
