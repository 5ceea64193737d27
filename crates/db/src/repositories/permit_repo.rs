//! Repository for the `permits` table.

use ampsite_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::permit::{CreatePermit, Permit};
use crate::models::reminder::DatedSubject;

const COLUMNS: &str =
    "id, project_id, permit_number, inspector_name, inspection_date, created_by, created_at";

pub struct PermitRepo;

impl PermitRepo {
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreatePermit,
        created_by: &str,
    ) -> Result<Permit, sqlx::Error> {
        let query = format!(
            "INSERT INTO permits (project_id, permit_number, inspector_name, inspection_date, created_by)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Permit>(&query)
            .bind(project_id)
            .bind(input.permit_number.trim())
            .bind(input.inspector_name.trim())
            .bind(input.inspection_date)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    pub async fn list_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Permit>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM permits WHERE project_id = $1 ORDER BY id");
        sqlx::query_as::<_, Permit>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Permits with an inspection scheduled before `horizon`.
    pub async fn list_inspections_before(
        pool: &PgPool,
        horizon: Timestamp,
    ) -> Result<Vec<DatedSubject>, sqlx::Error> {
        sqlx::query_as::<_, DatedSubject>(
            "SELECT id, project_id, inspection_date AS due, permit_number AS label
             FROM permits
             WHERE inspection_date IS NOT NULL AND inspection_date < $1
             ORDER BY inspection_date, id",
        )
        .bind(horizon)
        .fetch_all(pool)
        .await
    }
}
