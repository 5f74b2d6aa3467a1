//! Schema migration runner for the admin tables.

use sqlx::PgPool;
use tracing::info;

use storefront_core::error::{AppError, ErrorKind};

/// Apply pending migrations from the workspace `migrations/` directory.
///
/// Called from the composition root before any repository is built: the
/// admin schema (profiles, roles, user_roles, admin_audit_logs) and its
/// uniqueness constraints must exist before the first request resolves
/// roles, since catalog seeding and the profile upsert lean on them.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    info!("Applying database migrations");

    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to apply migrations: {e}"),
                e,
            )
        })?;

    info!("Database schema is up to date");
    Ok(())
}
