//! Repository for the `user_profiles` table.

use ampsite_core::profile::ProfileInput;
use sqlx::PgPool;

use crate::models::user_profile::UserProfile;

const COLUMNS: &str = "principal, name, role, email, phone, created_at, updated_at";

pub struct UserProfileRepo;

impl UserProfileRepo {
    pub async fn find(pool: &PgPool, principal: &str) -> Result<Option<UserProfile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_profiles WHERE principal = $1");
        sqlx::query_as::<_, UserProfile>(&query)
            .bind(principal)
            .fetch_optional(pool)
            .await
    }

    /// Create or replace the caller's profile.
    pub async fn upsert(
        pool: &PgPool,
        principal: &str,
        input: &ProfileInput,
    ) -> Result<UserProfile, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_profiles (principal, name, role, email, phone)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (principal) DO UPDATE SET
                name = EXCLUDED.name,
                role = EXCLUDED.role,
                email = EXCLUDED.email,
                phone = EXCLUDED.phone
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserProfile>(&query)
            .bind(principal)
            .bind(input.name.trim())
            .bind(input.role.trim())
            .bind(input.email.trim())
            .bind(input.phone.trim())
            .fetch_one(pool)
            .await
    }
}
