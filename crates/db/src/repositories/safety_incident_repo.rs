//! Repository for the append-only `safety_incidents` table.

use ampsite_core::types::DbId;
use sqlx::PgPool;

use crate::models::safety_incident::{CreateSafetyIncident, SafetyIncident};

const COLUMNS: &str = "id, project_id, description, reporter_name, reported_by, \"timestamp\"";

pub struct SafetyIncidentRepo;

impl SafetyIncidentRepo {
    /// Record an incident stamped with the server clock.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateSafetyIncident,
        reported_by: &str,
    ) -> Result<SafetyIncident, sqlx::Error> {
        let query = format!(
            "INSERT INTO safety_incidents (project_id, description, reporter_name, reported_by)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SafetyIncident>(&query)
            .bind(project_id)
            .bind(input.description.trim())
            .bind(input.reported_by.trim())
            .bind(reported_by)
            .fetch_one(pool)
            .await
    }

    pub async fn list_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<SafetyIncident>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM safety_incidents WHERE project_id = $1 ORDER BY id"
        );
        sqlx::query_as::<_, SafetyIncident>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }
}
