//! Repository for the `projects` table.

use ampsite_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{CreateProject, DashboardSummary, Project};
use crate::models::status::{ChangeOrderStatus, ProjectStatus, StatusId};

/// Column list for `projects` queries. `status` is resolved from the
/// lookup table so every read and `RETURNING` clause carries the wire name.
const COLUMNS: &str = "id, name, location, client_name, general_contractor, notes, \
    project_value, status_id, \
    (SELECT ps.name FROM project_statuses ps WHERE ps.id = projects.status_id) AS status, \
    start_date, estimated_completion_date, created_by, created_at, updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project in the `planned` state, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateProject,
        created_by: &str,
    ) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects
                (name, location, client_name, general_contractor, notes, project_value,
                 status_id, estimated_completion_date, created_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(input.name.trim())
            .bind(input.location.trim())
            .bind(input.client_name.trim())
            .bind(input.general_contractor.trim())
            .bind(&input.notes)
            .bind(input.project_value)
            .bind(ProjectStatus::Planned.id())
            .bind(input.estimated_completion_date)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Check that a project exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM projects WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Move a project from `from` to `to`.
    ///
    /// The update only applies while the row is still in `from`; `None`
    /// means the project is missing or was advanced by someone else first.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        from: StatusId,
        to: StatusId,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET status_id = $2
             WHERE id = $1 AND status_id = $3
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(to)
            .bind(from)
            .fetch_optional(pool)
            .await
    }

    /// Aggregate counts and totals across all projects.
    pub async fn dashboard_summary(pool: &PgPool) -> Result<DashboardSummary, sqlx::Error> {
        sqlx::query_as::<_, DashboardSummary>(
            "SELECT
                COUNT(*) AS total_projects,
                COUNT(*) FILTER (WHERE status_id = $1) AS active_projects,
                COUNT(*) FILTER (WHERE status_id = $2) AS completed_projects,
                COALESCE(SUM(project_value), 0)::DOUBLE PRECISION AS total_project_value,
                (SELECT COUNT(*) FROM change_orders WHERE status_id = $3) AS pending_change_orders
             FROM projects",
        )
        .bind(ProjectStatus::InProgress.id())
        .bind(ProjectStatus::Completed.id())
        .bind(ChangeOrderStatus::Pending.id())
        .fetch_one(pool)
        .await
    }
}

