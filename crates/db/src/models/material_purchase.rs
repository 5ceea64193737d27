//! Material purchase ledger entries.

use ampsite_core::types::{DbId, Principal, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the append-only `material_purchases` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MaterialPurchase {
    pub id: DbId,
    pub project_id: DbId,
    pub item: String,
    pub quantity: f64,
    pub unit_cost: f64,
    pub total_cost: f64,
    pub supplier: String,
    pub logged_by: Principal,
    #[serde(with = "chrono::serde::ts_nanoseconds")]
    pub created_at: Timestamp,
}

/// Request body for recording a purchase. Any total supplied by the client
/// is ignored; it is recomputed from quantity and unit cost.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMaterialPurchase {
    pub item: String,
    pub quantity: f64,
    pub unit_cost: f64,
    pub supplier: String,
}
