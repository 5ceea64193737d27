//! Reminder log rows and the dated subjects a sweep evaluates.

use ampsite_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `reminder_log` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReminderLogEntry {
    pub id: DbId,
    pub subject_type: String,
    pub subject_id: DbId,
    pub project_id: DbId,
    pub tier: String,
    pub days_until: i64,
    pub sent_on: NaiveDate,
    #[serde(with = "chrono::serde::ts_nanoseconds")]
    pub created_at: Timestamp,
}

/// A task or permit with a due date, as seen by the reminder sweep.
#[derive(Debug, Clone, FromRow)]
pub struct DatedSubject {
    pub id: DbId,
    pub project_id: DbId,
    pub due: Timestamp,
    pub label: String,
}
