//! Repository for the `reminder_log` table.

use ampsite_core::reminders::Reminder;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::models::reminder::ReminderLogEntry;

const COLUMNS: &str =
    "id, subject_type, subject_id, project_id, tier, days_until, sent_on, created_at";

pub struct ReminderRepo;

impl ReminderRepo {
    /// Record a reminder unless one for the same subject, tier and day was
    /// already logged.
    ///
    /// Returns the new row, or `None` when the reminder is a duplicate and
    /// must not be sent again.
    pub async fn record_if_new(
        pool: &PgPool,
        reminder: &Reminder,
    ) -> Result<Option<ReminderLogEntry>, sqlx::Error> {
        let query = format!(
            "INSERT INTO reminder_log (subject_type, subject_id, project_id, tier, days_until, sent_on)
             VALUES ($1, $2, $3, $4, $5, $6)
             ON CONFLICT (subject_type, subject_id, tier, sent_on) DO NOTHING
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ReminderLogEntry>(&query)
            .bind(reminder.subject.name())
            .bind(reminder.subject_id)
            .bind(reminder.project_id)
            .bind(reminder.tier.name())
            .bind(reminder.days_until)
            .bind(reminder.sent_on)
            .fetch_optional(pool)
            .await
    }

    /// Reminders logged for a given UTC day.
    pub async fn list_for_day(
        pool: &PgPool,
        day: NaiveDate,
    ) -> Result<Vec<ReminderLogEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reminder_log WHERE sent_on = $1 ORDER BY id");
        sqlx::query_as::<_, ReminderLogEntry>(&query)
            .bind(day)
            .fetch_all(pool)
            .await
    }
}
