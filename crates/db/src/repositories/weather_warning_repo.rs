//! Repository for the `weather_warnings` table.

use ampsite_core::types::DbId;
use sqlx::PgPool;

use crate::models::task::WeatherWarning;

const COLUMNS: &str = "id, task_id, condition, flagged_by, created_at";

pub struct WeatherWarningRepo;

impl WeatherWarningRepo {
    pub async fn create(
        pool: &PgPool,
        task_id: DbId,
        condition: &str,
        flagged_by: &str,
    ) -> Result<WeatherWarning, sqlx::Error> {
        let query = format!(
            "INSERT INTO weather_warnings (task_id, condition, flagged_by)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WeatherWarning>(&query)
            .bind(task_id)
            .bind(condition.trim())
            .bind(flagged_by)
            .fetch_one(pool)
            .await
    }

    /// Warnings raised for a task, newest first.
    pub async fn list_for_task(
        pool: &PgPool,
        task_id: DbId,
    ) -> Result<Vec<WeatherWarning>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM weather_warnings WHERE task_id = $1 ORDER BY id DESC"
        );
        sqlx::query_as::<_, WeatherWarning>(&query)
            .bind(task_id)
            .fetch_all(pool)
            .await
    }
}
