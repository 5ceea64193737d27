//! Repository for the `user_roles` table.

use ampsite_core::roles::UserRole;
use sqlx::PgPool;

use crate::models::role::UserRoleAssignment;

const COLUMNS: &str = "principal, role_id, assigned_by, created_at, updated_at";

/// Provides role lookup and assignment.
pub struct RoleRepo;

impl RoleRepo {
    /// Resolve a principal's role. Principals without an assignment are guests.
    pub async fn role_for(pool: &PgPool, principal: &str) -> Result<UserRole, sqlx::Error> {
        let role_id: Option<i16> =
            sqlx::query_scalar("SELECT role_id FROM user_roles WHERE principal = $1")
                .bind(principal)
                .fetch_optional(pool)
                .await?;
        Ok(role_id.and_then(UserRole::from_id).unwrap_or(UserRole::Guest))
    }

    /// Set a principal's role, replacing any previous assignment.
    pub async fn assign(
        pool: &PgPool,
        principal: &str,
        role: UserRole,
        assigned_by: &str,
    ) -> Result<UserRoleAssignment, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_roles (principal, role_id, assigned_by)
             VALUES ($1, $2, $3)
             ON CONFLICT (principal)
             DO UPDATE SET role_id = EXCLUDED.role_id, assigned_by = EXCLUDED.assigned_by
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserRoleAssignment>(&query)
            .bind(principal)
            .bind(role.id())
            .bind(assigned_by)
            .fetch_one(pool)
            .await
    }
}
