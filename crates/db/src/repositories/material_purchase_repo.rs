//! Repository for the append-only `material_purchases` ledger.

use ampsite_core::types::DbId;
use sqlx::PgPool;

use crate::models::material_purchase::{CreateMaterialPurchase, MaterialPurchase};

const COLUMNS: &str =
    "id, project_id, item, quantity, unit_cost, total_cost, supplier, logged_by, created_at";

/// Provides insert and read operations for purchase entries. Entries are
/// never updated or deleted.
pub struct MaterialPurchaseRepo;

impl MaterialPurchaseRepo {
    /// Append a purchase with a total already computed by the caller.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateMaterialPurchase,
        total_cost: f64,
        logged_by: &str,
    ) -> Result<MaterialPurchase, sqlx::Error> {
        let query = format!(
            "INSERT INTO material_purchases
                (project_id, item, quantity, unit_cost, total_cost, supplier, logged_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MaterialPurchase>(&query)
            .bind(project_id)
            .bind(input.item.trim())
            .bind(input.quantity)
            .bind(input.unit_cost)
            .bind(total_cost)
            .bind(input.supplier.trim())
            .bind(logged_by)
            .fetch_one(pool)
            .await
    }

    /// List a project's purchases in insertion order.
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<MaterialPurchase>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM material_purchases WHERE project_id = $1 ORDER BY id"
        );
        sqlx::query_as::<_, MaterialPurchase>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Purchase totals for a project in insertion order, for budget sums.
    pub async fn totals_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<f64>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT total_cost FROM material_purchases WHERE project_id = $1 ORDER BY id",
        )
        .bind(project_id)
        .fetch_all(pool)
        .await
    }
}
