//! Role and role-assignment repository implementation.

use std::collections::HashMap;

use sqlx::PgPool;
use uuid::Uuid;

use storefront_core::error::{AppError, ErrorKind};
use storefront_core::result::AppResult;
use storefront_entity::role::Role;

/// Repository for the role catalog and the user/role assignment table.
#[derive(Debug, Clone)]
pub struct RoleRepository {
    pool: PgPool,
}

impl RoleRepository {
    /// Create a new role repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List every role in the catalog, in seed order.
    pub async fn find_all(&self) -> AppResult<Vec<Role>> {
        sqlx::query_as::<_, Role>("SELECT * FROM roles ORDER BY created_at")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list roles", e))
    }

    /// List existing role names (used by catalog seeding).
    pub async fn find_names(&self) -> AppResult<Vec<String>> {
        sqlx::query_scalar::<_, String>("SELECT name FROM roles")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list role names", e)
            })
    }

    /// Insert catalog entries, skipping names that already exist.
    ///
    /// The uniqueness constraint on `roles.name` absorbs concurrent seed
    /// races; ON CONFLICT DO NOTHING keeps the insert idempotent.
    pub async fn insert_missing(&self, entries: &[(&str, &str)]) -> AppResult<()> {
        for (name, description) in entries {
            sqlx::query(
                "INSERT INTO roles (name, description) VALUES ($1, $2) \
                 ON CONFLICT (name) DO NOTHING",
            )
            .bind(name)
            .bind(description)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to insert role", e)
            })?;
        }
        Ok(())
    }

    /// Resolve role names to catalog rows.
    pub async fn find_by_names(&self, names: &[String]) -> AppResult<Vec<Role>> {
        sqlx::query_as::<_, Role>("SELECT * FROM roles WHERE name = ANY($1)")
            .bind(names)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to resolve role names", e)
            })
    }

    /// Role names explicitly assigned to one identity.
    pub async fn assignment_names_for_user(&self, user_id: Uuid) -> AppResult<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            "SELECT r.name FROM user_roles ur JOIN roles r ON r.id = ur.role_id \
             WHERE ur.user_id = $1",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to load role assignments", e)
        })
    }

    /// Role names for every identity with at least one assignment.
    pub async fn assignment_names_for_all(&self) -> AppResult<HashMap<Uuid, Vec<String>>> {
        let rows = sqlx::query_as::<_, (Uuid, String)>(
            "SELECT ur.user_id, r.name FROM user_roles ur JOIN roles r ON r.id = ur.role_id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to load role assignments", e)
        })?;

        let mut map: HashMap<Uuid, Vec<String>> = HashMap::new();
        for (user_id, name) in rows {
            map.entry(user_id).or_default().push(name);
        }
        Ok(map)
    }

    /// Replace every assignment for one identity with a new set.
    ///
    /// Delete-all-then-insert inside one transaction, so a concurrent read
    /// observes either the old set or the new set, never a mix.
    pub async fn replace_assignments(&self, user_id: Uuid, role_ids: &[Uuid]) -> AppResult<()> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        sqlx::query("DELETE FROM user_roles WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to clear role assignments", e)
            })?;

        for role_id in role_ids {
            sqlx::query(
                "INSERT INTO user_roles (user_id, role_id) VALUES ($1, $2) \
                 ON CONFLICT (user_id, role_id) DO NOTHING",
            )
            .bind(user_id)
            .bind(role_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to insert role assignment", e)
            })?;
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit role assignments", e)
        })
    }
}
