//! Repository for the `change_orders` table.
//!
//! Resolution is the only mutation after insert and it runs in a single
//! transaction with the project value adjustment.

use ampsite_core::change_order::Resolution;
use ampsite_core::types::DbId;
use sqlx::PgPool;

use crate::models::change_order::{ChangeOrder, CreateChangeOrder, ResolveOutcome};
use crate::models::status::ChangeOrderStatus;

const COLUMNS: &str = "id, project_id, description, additional_cost, status_id, \
    (SELECT s.name FROM change_order_statuses s WHERE s.id = change_orders.status_id) AS status, \
    created_by, resolved_by, resolved_at, created_at";

pub struct ChangeOrderRepo;

impl ChangeOrderRepo {
    /// Insert a new pending change order.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateChangeOrder,
        created_by: &str,
    ) -> Result<ChangeOrder, sqlx::Error> {
        let query = format!(
            "INSERT INTO change_orders (project_id, description, additional_cost, status_id, created_by)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ChangeOrder>(&query)
            .bind(project_id)
            .bind(input.description.trim())
            .bind(input.additional_cost)
            .bind(ChangeOrderStatus::Pending.id())
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ChangeOrder>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM change_orders WHERE id = $1");
        sqlx::query_as::<_, ChangeOrder>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All pending change orders across projects, oldest first.
    pub async fn list_pending(pool: &PgPool) -> Result<Vec<ChangeOrder>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM change_orders WHERE status_id = $1 ORDER BY id");
        sqlx::query_as::<_, ChangeOrder>(&query)
            .bind(ChangeOrderStatus::Pending.id())
            .fetch_all(pool)
            .await
    }

    /// Every change order for one project regardless of status, oldest first.
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<ChangeOrder>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM change_orders WHERE project_id = $1 ORDER BY id");
        sqlx::query_as::<_, ChangeOrder>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Approve or reject a pending change order.
    ///
    /// The status flip is conditional on the row still being pending, so of
    /// two concurrent resolutions exactly one wins. On approval the owning
    /// project's value grows by the order's cost in the same transaction.
    pub async fn resolve(
        pool: &PgPool,
        id: DbId,
        resolution: Resolution,
        resolved_by: &str,
    ) -> Result<ResolveOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE change_orders
             SET status_id = $2, resolved_by = $3, resolved_at = NOW()
             WHERE id = $1 AND status_id = $4
             RETURNING {COLUMNS}"
        );
        let resolved = sqlx::query_as::<_, ChangeOrder>(&query)
            .bind(id)
            .bind(resolution.target_status())
            .bind(resolved_by)
            .bind(ChangeOrderStatus::Pending.id())
            .fetch_optional(&mut *tx)
            .await?;

        let Some(order) = resolved else {
            let query = format!("SELECT {COLUMNS} FROM change_orders WHERE id = $1");
            let existing = sqlx::query_as::<_, ChangeOrder>(&query)
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
            tx.rollback().await?;
            return Ok(match existing {
                Some(order) => ResolveOutcome::AlreadyResolved(order),
                None => ResolveOutcome::NotFound,
            });
        };

        let delta = resolution.value_delta(order.additional_cost);
        if delta != 0.0 {
            sqlx::query("UPDATE projects SET project_value = project_value + $2 WHERE id = $1")
                .bind(order.project_id)
                .bind(delta)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(ResolveOutcome::Resolved(order))
    }
}
