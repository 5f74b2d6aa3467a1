//! Profile repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use storefront_core::error::{AppError, ErrorKind};
use storefront_core::result::AppResult;
use storefront_entity::profile::Profile;

/// Repository for profile rows.
#[derive(Debug, Clone)]
pub struct ProfileRepository {
    pool: PgPool,
}

impl ProfileRepository {
    /// Create a new profile repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a profile by identity id.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Profile>> {
        sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find profile", e))
    }

    /// Create a profile for a new identity, defaulting to the `user` role.
    ///
    /// Concurrent first requests for the same identity race on this insert;
    /// the ON CONFLICT clause makes the second writer adopt the first's row
    /// (refreshing the email), so both callers observe the same profile.
    pub async fn upsert(&self, id: Uuid, email: &str) -> AppResult<Profile> {
        sqlx::query_as::<_, Profile>(
            "INSERT INTO profiles (id, email, role) VALUES ($1, $2, 'user') \
             ON CONFLICT (id) DO UPDATE SET email = EXCLUDED.email RETURNING *",
        )
        .bind(id)
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to upsert profile", e))
    }

    /// Update a profile's email to match the identity's current one.
    pub async fn update_email(&self, id: Uuid, email: &str) -> AppResult<()> {
        sqlx::query("UPDATE profiles SET email = $2 WHERE id = $1")
            .bind(id)
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update profile email", e)
            })?;
        Ok(())
    }

    /// Overwrite the legacy single-role column.
    pub async fn update_legacy_role(&self, id: Uuid, role: &str) -> AppResult<()> {
        sqlx::query("UPDATE profiles SET role = $2 WHERE id = $1")
            .bind(id)
            .bind(role)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update legacy role", e)
            })?;
        Ok(())
    }

    /// List profiles, newest first.
    pub async fn find_all(&self, limit: i64) -> AppResult<Vec<Profile>> {
        sqlx::query_as::<_, Profile>(
            "SELECT * FROM profiles ORDER BY created_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list profiles", e))
    }
}
